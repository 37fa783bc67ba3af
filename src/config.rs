//! Application-wide constants and compile-time configuration.
//!
//! All sampling parameters, timing, and BLE protocol constants live
//! here so they can be tuned in one place.

// Sampling

/// Number of raw ADC conversions averaged into one reported sample.
pub const SAMPLE_WINDOW: usize = 10;

/// Telemetry period while a central is connected (ms).
pub const TELEMETRY_PERIOD_MS: u64 = 2_000;

/// Poll interval while disconnected (ms). The loop only checks the
/// connection flag at this rate; no sampling happens while idle.
pub const IDLE_POLL_MS: u64 = 100;

// BLE

/// Complete local name placed in the advertisement payload.
pub const DEVICE_NAME: &str = "adc2ble";

/// Advertising interval (in 0.625 ms units). 800 = 500 ms.
pub const ADV_INTERVAL: u32 = 800;

/// Upper bound of the notification payload. A `u32` rendered as decimal
/// text is at most 10 bytes; 12 matches the characteristic's value size.
pub const MAX_PAYLOAD_LEN: usize = 12;
