//! Tuning of the detector and its timing.

use core::ops::RangeInclusive;

/// Samples below this value are considered a dip of the signal. Given in
/// units of a 10-bit ADC.
pub const THRESHOLD: u16 = 820;

/// Minimum distance between two accepted beats in milliseconds.
pub const DEBOUNCE_MS: u32 = 800;

/// Number of consecutive low samples after which the finger is considered
/// removed from the sensor. With 20 ms ticks this makes 200 ms.
pub const LOST_COUNT: u8 = 10;

/// How long should the indicator stay lit after a beat, in milliseconds.
pub const LED_ON_TIME: u32 = 100;

/// Period of the control loop in milliseconds.
pub const TICK_MS: u32 = 20;

/// Heart rates outside of this range are not reported.
pub const BPM_RANGE: RangeInclusive<u32> = 40..=200;

/// Parameters of the detection.
///
/// The default holds the constants above. It can be tweaked for boards
/// with a different sensor or loop period.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub threshold: u16,
    pub debounce_ms: u32,
    pub lost_count: u8,
    pub led_on_time: u32,
    pub tick_ms: u32,
    pub min_bpm: u32,
    pub max_bpm: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD,
            debounce_ms: DEBOUNCE_MS,
            lost_count: LOST_COUNT,
            led_on_time: LED_ON_TIME,
            tick_ms: TICK_MS,
            min_bpm: *BPM_RANGE.start(),
            max_bpm: *BPM_RANGE.end(),
        }
    }
}

impl Config {
    pub(crate) fn is_plausible(&self, bpm: u32) -> bool {
        (self.min_bpm..=self.max_bpm).contains(&bpm)
    }
}
