//! Turn raw sensor samples into heart beats.

use crate::config::Config;
use crate::log;

/// Detect beats in the signal of a photoplethysmography sensor.
///
/// Call `process_sample` once per tick with the latest sample and the
/// current time. A beat is recognized on a rise of the signal above the
/// threshold that follows a dip below it, if enough time passed since the
/// previous beat. While the signal stays low for too long, the finger is
/// considered removed and no beats are detected.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Detector {
    config: Config,
    low_signal: u8,
    pulse_ready: bool,
    last_beat: u32,
    heart_rate: Option<u32>,
}

/// Accepted beat with a plausible heart rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Beat {
    pub bpm: u32,
    pub time: u32,
}

/// The current state of the detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Signal was low for too long, the finger is not on the sensor.
    ContactLost,
    /// Waiting for the signal to dip below the threshold.
    Armed,
    /// The signal dipped, the next rise may be a beat.
    Ready,
}

impl Detector {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn process_sample(&mut self, raw: u16, now: u32) -> Option<Beat> {
        let was_lost = self.contact_lost();

        if raw < self.config.threshold {
            if self.low_signal < self.config.lost_count {
                self.low_signal += 1;
            }
        } else {
            self.low_signal = 0;
        }

        // The contact must be evaluated before the beat, so a rise of the
        // signal cannot slip through on the tick the contact gets lost.
        if self.contact_lost() {
            if !was_lost {
                log::info!("Lost contact with the sensor at={:?}", now);
            }
            self.pulse_ready = false;
            return None;
        } else if was_lost {
            log::info!("Regained contact with the sensor at={:?}", now);
        }

        if raw < self.config.threshold {
            self.pulse_ready = true;
        }

        let since_last_beat = now.wrapping_sub(self.last_beat);
        if raw > self.config.threshold
            && self.pulse_ready
            && since_last_beat > self.config.debounce_ms
        {
            self.pulse_ready = false;
            self.last_beat = now;
            return self.accept_beat(since_last_beat, now);
        }

        None
    }

    fn accept_beat(&mut self, interval: u32, now: u32) -> Option<Beat> {
        if interval == 0 {
            return None;
        }

        let bpm = 60_000 / interval;
        if self.config.is_plausible(bpm) {
            log::info!("Detected beat bpm={:?} at={:?}", bpm, now);
            self.heart_rate = Some(bpm);
            Some(Beat { bpm, time: now })
        } else {
            log::debug!("Discarding implausible rate bpm={:?} at={:?}", bpm, now);
            None
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        if self.contact_lost() {
            State::ContactLost
        } else if self.pulse_ready {
            State::Ready
        } else {
            State::Armed
        }
    }

    #[must_use]
    pub fn contact_lost(&self) -> bool {
        self.low_signal >= self.config.lost_count
    }

    /// The last plausible heart rate.
    #[must_use]
    pub fn heart_rate(&self) -> Option<u32> {
        self.heart_rate
    }

    #[must_use]
    pub fn last_beat(&self) -> u32 {
        self.last_beat
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }
}
