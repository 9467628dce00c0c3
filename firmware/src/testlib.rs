use pulse_control::{Sampler, THRESHOLD};

use crate::system::Sensor;

/// Block until the sensor gets covered by a finger.
///
/// The signal must first drop below the threshold and then rise above it,
/// so a finger that was already on the sensor has to be lifted first.
pub fn sample_until_sensor_is_touched(sensor: &mut Sensor) {
    let mut was_low = false;
    loop {
        let is_high = sensor.read_sample() > THRESHOLD;
        if was_low && is_high {
            break;
        }
        was_low = !is_high;
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}
