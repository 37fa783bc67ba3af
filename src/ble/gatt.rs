//! GATT attribute table.
//!
//! One primary service with a single notify-only telemetry
//! characteristic. The `#[nrf_softdevice::gatt_server]` macro generates
//! the attribute registration and the CCCD-write event plumbing; the
//! table is registered once at startup and immutable afterwards.

use crate::config::MAX_PAYLOAD_LEN;

/// Telemetry service: the averaged reading as decimal text, pushed to
/// the peer once it enables notifications through the CCCD.
#[nrf_softdevice::gatt_service(uuid = "6e400001-b5a3-f393-e0a9-e50e24dcca9e")]
pub struct TelemetryService {
    #[characteristic(uuid = "6e400002-b5a3-f393-e0a9-e50e24dcca9e", notify)]
    pub reading: heapless::Vec<u8, MAX_PAYLOAD_LEN>,
}

#[nrf_softdevice::gatt_server]
pub struct Server {
    pub telemetry: TelemetryService,
}
