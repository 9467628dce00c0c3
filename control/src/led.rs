//! Led abstraction keeping it lit.

use crate::config::LED_ON_TIME;

/// Abstraction of the beat indicator.
///
/// A beat is detected within a single tick of the control loop, but the
/// indicator should remain lit for a moment for the user to notice it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Led {
    on: bool,
    since: u32,
    duration: u32,
}

impl Default for Led {
    fn default() -> Self {
        Self::new(LED_ON_TIME)
    }
}

impl Led {
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            on: false,
            since: 0,
            duration,
        }
    }

    pub fn on_beat_event(&mut self, now: u32) {
        self.on = true;
        self.since = now;
    }

    pub fn tick(&mut self, now: u32) {
        if self.on && now.wrapping_sub(self.since) >= self.duration {
            self.on = false;
        }
    }

    pub fn force_off(&mut self) {
        self.on = false;
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_started_it_is_off() {
        let led = Led::default();
        assert!(!led.is_on());
    }

    #[test]
    fn when_triggered_it_stays_on_for_the_whole_duration() {
        let mut led = Led::default();
        led.on_beat_event(1000);
        for now in (1000..1100).step_by(20) {
            led.tick(now);
            assert!(led.is_on(), "Led went off too early at {}", now);
        }
        led.tick(1100);
        assert!(!led.is_on());
    }

    #[test]
    fn when_retriggered_it_extends_the_duration() {
        let mut led = Led::default();
        led.on_beat_event(1000);
        led.tick(1080);
        led.on_beat_event(1080);
        led.tick(1100);
        assert!(led.is_on());
        led.tick(1180);
        assert!(!led.is_on());
    }

    #[test]
    fn when_off_tick_does_nothing() {
        let mut led = Led::default();
        led.tick(5000);
        assert!(!led.is_on());
        assert_eq!(led, Led::default());
    }

    #[test]
    fn when_forced_off_it_goes_off_immediately() {
        let mut led = Led::default();
        led.on_beat_event(1000);
        led.force_off();
        assert!(!led.is_on());
    }
}
