//! Telemetry loop - the top-level driver.
//!
//! While a central is connected, one sampling cycle runs per period and
//! the averaged reading is handed to the peripheral loop; while
//! disconnected the loop idles without touching the ADC. Errors are
//! logged and the cycle skipped, never escalated: the only observer is
//! the passive peer, who simply sees absent notifications.

use core::sync::atomic::Ordering;

use defmt::debug;
use embassy_time::Timer;

use crate::ble::{CONNECTED, SAMPLES};
use crate::config::{IDLE_POLL_MS, TELEMETRY_PERIOD_MS};
use crate::sensor::saadc::AdcReader;

#[embassy_executor::task]
pub async fn telemetry_task(mut adc: AdcReader<'static>) -> ! {
    loop {
        if !CONNECTED.load(Ordering::Relaxed) {
            Timer::after_millis(IDLE_POLL_MS).await;
            continue;
        }

        let sample = adc.acquire_average().await;

        // Discard-newest: if the peripheral loop still holds the
        // previous sample, this one is dropped rather than queued.
        if SAMPLES.try_send(sample).is_err() {
            debug!("sample slot occupied, dropping value={}", sample.value);
        }

        Timer::after_millis(TELEMETRY_PERIOD_MS).await;
    }
}
