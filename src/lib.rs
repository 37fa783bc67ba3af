//! Test-only library interface for adc2ble.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no SoftDevice or nRF hardware required): the link
//! state machine, the windowed sampler, the notification dispatcher,
//! and the advertisement payload builder.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

// Internal module paths for the actual implementations
#[path = "ble/adv_data.rs"]
mod ble_adv_data_impl;
#[path = "ble/dispatcher.rs"]
mod ble_dispatcher_impl;
#[path = "ble/link.rs"]
mod ble_link_impl;
#[path = "config.rs"]
mod config_impl;
#[path = "error.rs"]
mod error_impl;
#[path = "sensor/sampler.rs"]
mod sensor_sampler_impl;

pub mod config {
    pub use crate::config_impl::*;
}

pub mod error {
    pub use crate::error_impl::*;
}

pub mod ble {
    pub mod adv_data {
        pub use crate::ble_adv_data_impl::*;
    }
    pub mod dispatcher {
        pub use crate::ble_dispatcher_impl::*;
    }
    pub mod link {
        pub use crate::ble_link_impl::*;
    }
}

pub mod sensor {
    pub mod sampler {
        pub use crate::sensor_sampler_impl::*;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
