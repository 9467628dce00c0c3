mod sensor;
mod serial;
mod status_led;

pub use daisy::hal;

use hal::adc::{Adc, AdcSampleTime, Resolution};
use hal::delay::DelayFromCountDownTimer;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

pub use sensor::{Pin as SensorPin, Sensor};
pub use serial::{Serial, BAUD_RATE};
pub use status_led::StatusLed;

pub struct System {
    pub mono: Systick<1000>,
    pub sensor: Sensor,
    pub serial: Serial,
    pub status_led: StatusLed,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mut delay = DelayFromCountDownTimer::new(dp.TIM2.timer(
            100.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        // Threshold of the detector is given in units of a 10-bit converter.
        let adc = {
            let mut adc = Adc::adc1(dp.ADC1, &mut delay, ccdr.peripheral.ADC12, &ccdr.clocks);
            adc.set_resolution(Resolution::TENBIT);
            adc.set_sample_time(AdcSampleTime::T_16);
            adc.enable()
        };

        let mono = Systick::new(cp.SYST, 480_000_000);
        let sensor = Sensor::new(adc, pins.GPIO.PIN_C5.into_analog());
        let serial = Serial::new(
            dp.USART1,
            pins.GPIO.PIN_A8.into_alternate(),
            pins.GPIO.PIN_A9.into_alternate(),
            ccdr.peripheral.USART1,
            &ccdr.clocks,
        );
        let status_led = StatusLed::new(daisy::board_split_leds!(pins).USER);

        defmt::info!("Initialized serial link with baud_rate={:?}", BAUD_RATE);

        Self {
            mono,
            sensor,
            serial,
            status_led,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
