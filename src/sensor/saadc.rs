//! SAADC front-end for the sensor input.
//!
//! AIN2 (P0.04), 12-bit, gain 1/6 against the internal 0.6 V reference.
//! The HAL's one-shot conversions cannot fail, so the fallible path of
//! the sampler seam exists for the trait boundary, not this adapter.

use embassy_nrf::peripherals::{P0_04, SAADC};
use embassy_nrf::saadc::{ChannelConfig, Config, Gain, Reference, Resolution, Saadc};
use embassy_nrf::{bind_interrupts, saadc};

use crate::config::SAMPLE_WINDOW;
use crate::sensor::sampler::{Sample, WindowAverager};

bind_interrupts!(pub struct Irqs {
    SAADC => saadc::InterruptHandler;
});

/// One-channel SAADC reader, owned by the telemetry task.
pub struct AdcReader<'d> {
    saadc: Saadc<'d, 1>,
}

impl<'d> AdcReader<'d> {
    pub fn new(adc: SAADC, pin: P0_04) -> Self {
        let mut config = Config::default();
        config.resolution = Resolution::_12BIT;

        let mut channel = ChannelConfig::single_ended(pin);
        channel.gain = Gain::GAIN1_6;
        channel.reference = Reference::INTERNAL;

        Self {
            saadc: Saadc::new(adc, Irqs, config, [channel]),
        }
    }

    /// Run one full sampling cycle: `SAMPLE_WINDOW` sequential
    /// conversions, floor-averaged. Negative codes (ground-referenced
    /// noise) clamp to zero before accumulation.
    pub async fn acquire_average(&mut self) -> Sample {
        let mut acc = WindowAverager::new(SAMPLE_WINDOW);
        loop {
            let mut buf = [0i16; 1];
            self.saadc.sample(&mut buf).await;
            if let Some(sample) = acc.push(buf[0].max(0) as u16) {
                return sample;
            }
        }
    }
}
