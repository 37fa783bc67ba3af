//! Windowed averaging of raw analog readings.
//!
//! A sampling cycle performs a fixed number of raw conversions and
//! reports their integer mean (floor division - the fractional
//! remainder is dropped, not rounded). A single failed conversion
//! aborts the whole window: a partial average would silently
//! misrepresent the signal, so none is ever produced.

/// One averaged reading, produced fresh each sampling cycle and
/// consumed by a single dispatch attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub value: u32,
}

/// Accumulates raw readings until a full window has been collected.
///
/// Shared by the blocking host path (`acquire_average`) and the async
/// SAADC path, so the averaging semantics live in exactly one place.
pub struct WindowAverager {
    sum: u32,
    count: usize,
    window: usize,
}

impl WindowAverager {
    /// `window` must be at least 1.
    pub fn new(window: usize) -> Self {
        debug_assert!(window >= 1);
        Self {
            sum: 0,
            count: 0,
            window,
        }
    }

    /// Feed one raw conversion result. Returns the averaged sample once
    /// the window is full, resetting the accumulator for the next cycle.
    pub fn push(&mut self, raw: u16) -> Option<Sample> {
        self.sum += u32::from(raw);
        self.count += 1;
        if self.count < self.window {
            return None;
        }

        let value = self.sum / self.window as u32;
        self.sum = 0;
        self.count = 0;
        Some(Sample { value })
    }
}

/// Acquire `window` sequential raw readings and return their mean.
///
/// The first read error aborts the cycle and is returned as-is; the
/// reader is not called again for that window. Blocking from the
/// caller's perspective - wall-clock time is proportional to `window`
/// times the per-conversion latency of the underlying hardware.
pub fn acquire_average<E>(
    window: usize,
    mut read: impl FnMut() -> Result<u16, E>,
) -> Result<Sample, E> {
    let mut acc = WindowAverager::new(window);
    loop {
        if let Some(sample) = acc.push(read()?) {
            return Ok(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averager_emits_once_per_window() {
        let mut acc = WindowAverager::new(3);
        assert_eq!(acc.push(10), None);
        assert_eq!(acc.push(20), None);
        assert_eq!(acc.push(30), Some(Sample { value: 20 }));
    }

    #[test]
    fn averager_resets_between_windows() {
        let mut acc = WindowAverager::new(2);
        assert_eq!(acc.push(4), None);
        assert_eq!(acc.push(6), Some(Sample { value: 5 }));
        // Second window starts from a clean accumulator.
        assert_eq!(acc.push(100), None);
        assert_eq!(acc.push(200), Some(Sample { value: 150 }));
    }

    #[test]
    fn averager_floors_the_mean() {
        let mut acc = WindowAverager::new(4);
        acc.push(1);
        acc.push(1);
        acc.push(1);
        // 5/4 = 1.25 floors to 1, never rounds to 2.
        assert_eq!(acc.push(2), Some(Sample { value: 1 }));
    }
}
