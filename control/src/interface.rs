//! Peripherals the control loop talks to.
//!
//! These are implemented by the hardware binding. All of them are blocking
//! and none of them exposes a failure.

/// Source of raw samples of the pulse sensor.
pub trait Sampler {
    /// Read a single sample, in units of a 10-bit ADC.
    fn read_sample(&mut self) -> u16;
}

/// Serial link receiving textual reports.
pub trait Reporter {
    /// Send the whole line, fire-and-forget.
    fn send_line(&mut self, line: &str);
}

/// Binary indicator showing detected beats.
pub trait Indicator {
    fn set(&mut self, on: bool);
}
