use nb::block;

use pulse_control::Sampler;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::gpio;
use crate::system::hal::pac::ADC1;

/// Photoplethysmography sensor connected to the first CV input.
pub struct Sensor {
    adc: Adc<ADC1, Enabled>,
    pin: Pin,
}

pub type Pin = gpio::gpioa::PA3<gpio::Analog>;

impl Sensor {
    #[must_use]
    pub fn new(adc: Adc<ADC1, Enabled>, pin: Pin) -> Self {
        Self { adc, pin }
    }
}

impl Sampler for Sensor {
    #[allow(clippy::cast_possible_truncation)]
    fn read_sample(&mut self) -> u16 {
        self.adc.start_conversion(&mut self.pin);
        let sample: u32 = block!(self.adc.read_sample()).unwrap();
        // The converter is set to 10 bits, the value always fits.
        sample as u16
    }
}
