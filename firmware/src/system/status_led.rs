use daisy::led::{Led, LedUser};

use pulse_control::Indicator;

/// User led of the board, blinking with every beat.
pub struct StatusLed {
    led: LedUser,
}

impl StatusLed {
    #[must_use]
    pub fn new(mut led: LedUser) -> Self {
        led.off();
        Self { led }
    }
}

impl Indicator for StatusLed {
    fn set(&mut self, on: bool) {
        if on {
            self.led.on();
        } else {
            self.led.off();
        }
    }
}
