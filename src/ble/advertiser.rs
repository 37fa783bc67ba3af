//! Connectable advertising.
//!
//! The SoftDevice models advertising as a future that resolves into a
//! connection, so the radio broadcasts precisely while no central is
//! connected: the future is awaited only from the disconnected arm of
//! the peripheral loop, and resolving it stops the radio before the
//! connection is handed back. Parameters follow the original node:
//! connectable undirected, identity address, 500 ms interval.

use defmt::info;
use nrf_softdevice::ble::peripheral::{self, AdvertiseError};
use nrf_softdevice::ble::Connection;
use nrf_softdevice::Softdevice;

use crate::ble::adv_data;
use crate::config::{ADV_INTERVAL, DEVICE_NAME};
use crate::error::AdvError;

/// Advertise until a central connects.
pub async fn advertise(sd: &Softdevice) -> Result<Connection, AdvError> {
    let adv_data = adv_data::build_adv_data(DEVICE_NAME);
    let scan_data = adv_data::build_scan_data();

    let config = peripheral::Config {
        interval: ADV_INTERVAL,
        ..Default::default()
    };
    let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
        adv_data: &adv_data,
        scan_data: &scan_data,
    };

    info!("advertising started ({} ms interval)", ADV_INTERVAL * 625 / 1000);
    peripheral::advertise_connectable(sd, adv, &config)
        .await
        .map_err(|e| match e {
            AdvertiseError::Timeout => AdvError::Timeout,
            AdvertiseError::NoFreeConn => AdvError::Busy,
            AdvertiseError::Raw(err) => AdvError::Raw(err as u32),
        })
}
