//! Monotonic time of the control loop.

use crate::config::TICK_MS;

/// Milliseconds elapsed since boot.
///
/// The clock is not tied to any wall clock. It moves forward only when the
/// loop calls `advance`, once per tick, so all timing of the detector is
/// expressed in ticks of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clock {
    now: u32,
    step: u32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl Clock {
    #[must_use]
    pub fn new(step: u32) -> Self {
        Self { now: 0, step }
    }

    #[must_use]
    pub fn now(&self) -> u32 {
        self.now
    }

    pub fn advance(&mut self) {
        self.now = self.now.wrapping_add(self.step);
    }
}
