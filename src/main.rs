//! adc2ble firmware entry point.
//!
//! Boot sequence: Embassy HAL init (interrupt priorities kept clear of
//! the SoftDevice's reserved levels), SoftDevice enable, GATT table
//! registration, then the three long-running tasks: SoftDevice,
//! peripheral loop, telemetry loop. Init failures are fatal - without
//! Bluetooth or the attribute table the node has no useful behavior.

#![no_std]
#![no_main]

mod ble;
mod config;
mod error;
mod sensor;
mod telemetry;

use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::interrupt::Priority;
use nrf_softdevice::{raw, Softdevice};
use panic_probe as _;
use static_cell::StaticCell;

use crate::ble::gatt::Server;
use crate::sensor::saadc::AdcReader;

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

fn softdevice_config() -> nrf_softdevice::Config {
    nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_XTAL as u8,
            rc_ctiv: 0,
            rc_temp_ctiv: 0,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_50_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t { att_mtu: 256 }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: config::DEVICE_NAME.as_ptr() as _,
            current_len: config::DEVICE_NAME.len() as u16,
            max_len: config::DEVICE_NAME.len() as u16,
            write_perm: unsafe { core::mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    }
}

static SERVER: StaticCell<Server> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("adc2ble starting");

    // The SoftDevice reserves the highest interrupt priorities; keep
    // the HAL off them.
    let mut hal_config = embassy_nrf::config::Config::default();
    hal_config.gpiote_interrupt_priority = Priority::P2;
    hal_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(hal_config);

    let sd = Softdevice::enable(&softdevice_config());
    let server: &'static Server = SERVER.init(unwrap!(Server::new(sd)));
    unwrap!(spawner.spawn(softdevice_task(sd)));
    info!("SoftDevice enabled, GATT table registered");

    let adc = AdcReader::new(p.SAADC, p.P0_04);
    unwrap!(spawner.spawn(telemetry::telemetry_task(adc)));
    unwrap!(spawner.spawn(ble::peripheral::peripheral_task(sd, server)));
}
