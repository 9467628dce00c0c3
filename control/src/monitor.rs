//! Single tick of the pulse monitor.

use crate::clock::Clock;
use crate::config::Config;
use crate::detector::{Detector, State};
use crate::interface::{Indicator, Reporter, Sampler};
use crate::led::Led;
use crate::report::Report;

/// The main store of the pulse monitor.
///
/// This struct owns all the state of the device. It takes one raw sample per
/// tick, passes it through the detector, keeps the indicator and the clock
/// and tells the caller what should be shown and sent.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Monitor {
    clock: Clock,
    detector: Detector,
    led: Led,
}

/// Desired state of output peripherals after a tick.
///
/// This structure transfers request to the hardware, asking to lit the led
/// or send a line over the serial link.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub led: bool,
    pub report: Option<Report>,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Monitor {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            clock: Clock::new(config.tick_ms),
            led: Led::new(config.led_on_time),
            detector: Detector::new(config),
        }
    }

    /// Process a sample taken at the current time and move to the next tick.
    ///
    /// The led is lit only for reported beats. A rise accepted by the
    /// debounce but carrying an implausible rate moves the time of the last
    /// beat, yet neither blinks nor reports.
    pub fn tick(&mut self, raw: u16) -> DesiredOutput {
        let now = self.clock.now();

        let beat = self.detector.process_sample(raw, now);
        if beat.is_some() {
            self.led.on_beat_event(now);
        }

        if self.detector.contact_lost() {
            self.led.force_off();
        }
        self.led.tick(now);

        self.clock.advance();

        DesiredOutput {
            led: self.led.is_on(),
            report: beat.map(Report::from),
        }
    }

    /// Run a whole tick, from taking the sample to setting outputs.
    pub fn step(
        &mut self,
        sampler: &mut impl Sampler,
        indicator: &mut impl Indicator,
        reporter: &mut impl Reporter,
    ) -> DesiredOutput {
        let raw = sampler.read_sample();
        let output = self.tick(raw);
        indicator.set(output.led);
        if let Some(report) = &output.report {
            reporter.send_line(report.as_str());
        }
        output
    }

    #[must_use]
    pub fn now(&self) -> u32 {
        self.clock.now()
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.detector.state()
    }

    #[must_use]
    pub fn heart_rate(&self) -> Option<u32> {
        self.detector.heart_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIGH: u16 = 900;
    const LOW: u16 = 700;

    struct ScriptedSampler {
        samples: Vec<u16>,
        position: usize,
    }

    impl ScriptedSampler {
        fn new(samples: Vec<u16>) -> Self {
            Self {
                samples,
                position: 0,
            }
        }
    }

    impl Sampler for ScriptedSampler {
        fn read_sample(&mut self) -> u16 {
            let sample = self.samples[self.position.min(self.samples.len() - 1)];
            self.position += 1;
            sample
        }
    }

    #[derive(Default)]
    struct RecordingLed {
        history: Vec<bool>,
    }

    impl Indicator for RecordingLed {
        fn set(&mut self, on: bool) {
            self.history.push(on);
        }
    }

    #[derive(Default)]
    struct RecordingSerial {
        sent: String,
    }

    impl Reporter for RecordingSerial {
        fn send_line(&mut self, line: &str) {
            self.sent.push_str(line);
        }
    }

    // Keep the signal high until `time`, dipping for two ticks right before.
    fn beat_at(time: u32, from: u32) -> Vec<u16> {
        let ticks = ((time - from) / 20) as usize;
        let mut samples = vec![HIGH; ticks - 2];
        samples.extend([LOW, LOW, HIGH]);
        samples
    }

    #[test]
    fn it_should_be_possible_to_initialize_monitor() {
        let monitor = Monitor::default();
        assert_eq!(monitor.now(), 0);
        assert_eq!(monitor.state(), State::Armed);
    }

    #[test]
    fn each_tick_advances_the_clock_by_tick_period() {
        let mut monitor = Monitor::default();
        monitor.tick(HIGH);
        monitor.tick(LOW);
        monitor.tick(HIGH);
        assert_eq!(monitor.now(), 60);
    }

    #[test]
    fn when_beats_are_regular_it_reports_them_over_serial() {
        let mut samples = beat_at(2000, 0);
        samples.extend(beat_at(2840, 2020));
        samples.extend(beat_at(3680, 2860));
        let ticks = samples.len();

        let mut monitor = Monitor::default();
        let mut sampler = ScriptedSampler::new(samples);
        let mut led = RecordingLed::default();
        let mut serial = RecordingSerial::default();
        for _ in 0..ticks {
            monitor.step(&mut sampler, &mut led, &mut serial);
        }

        assert_eq!(serial.sent, "71 BPM\r\n71 BPM\r\n");
        assert_eq!(monitor.heart_rate(), Some(71));
    }

    #[test]
    fn after_beat_led_is_on_for_exactly_the_led_time() {
        let mut monitor = Monitor::default();
        for raw in beat_at(2000, 0) {
            monitor.tick(raw);
        }
        let samples = beat_at(2840, 2020);
        let (last, rest) = samples.split_last().unwrap();
        for raw in rest {
            monitor.tick(*raw);
        }

        assert_eq!(monitor.now(), 2840);
        let output = monitor.tick(*last);
        assert!(output.led);
        assert_eq!(output.report.unwrap().as_str(), "71 BPM\r\n");

        for now in [2860, 2880, 2900, 2920] {
            assert_eq!(monitor.now(), now);
            assert!(monitor.tick(HIGH).led, "Led went off too early at {}", now);
        }
        assert_eq!(monitor.now(), 2940);
        assert!(!monitor.tick(HIGH).led);
        assert!(!monitor.tick(HIGH).led);
    }

    #[test]
    fn when_implausible_rate_is_detected_led_stays_off_and_nothing_is_sent() {
        let mut monitor = Monitor::default();
        let mut sampler = ScriptedSampler::new(beat_at(2000, 0));
        let mut led = RecordingLed::default();
        let mut serial = RecordingSerial::default();
        for _ in 0..150 {
            monitor.step(&mut sampler, &mut led, &mut serial);
        }
        assert!(serial.sent.is_empty());
        assert!(led.history.iter().all(|on| !on));
    }

    #[test]
    fn when_contact_is_lost_led_goes_off_immediately() {
        let mut monitor = Monitor::new(Config {
            led_on_time: 1000,
            ..Config::default()
        });
        for raw in beat_at(2000, 0) {
            monitor.tick(raw);
        }
        for raw in beat_at(2840, 2020).iter().take(41) {
            monitor.tick(*raw);
        }
        assert!(monitor.tick(HIGH).led);

        for _ in 0..9 {
            assert!(monitor.tick(LOW).led);
        }
        assert_eq!(monitor.state(), State::Ready);
        let output = monitor.tick(LOW);
        assert_eq!(monitor.state(), State::ContactLost);
        assert!(!output.led);
    }

    #[test]
    fn when_contact_is_lost_single_rise_is_not_reported() {
        let mut monitor = Monitor::default();
        for _ in 0..100 {
            monitor.tick(HIGH);
        }
        for _ in 0..10 {
            monitor.tick(LOW);
        }
        assert_eq!(monitor.state(), State::ContactLost);

        let output = monitor.tick(HIGH);
        assert_eq!(output.report, None);
        assert!(!output.led);
        assert_eq!(monitor.state(), State::Armed);
    }
}
