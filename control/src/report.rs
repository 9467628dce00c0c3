//! Textual report of a detected beat.

use core::fmt::Write;

use heapless::String;

use crate::detector::Beat;

/// Capacity of a single report line.
pub const REPORT_CAPACITY: usize = 32;

/// Line sent over the serial link for every reported beat.
///
/// The format is `"<bpm> BPM\r\n"`, e.g. `"72 BPM\r\n"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    line: String<REPORT_CAPACITY>,
}

impl Report {
    /// # Panics
    ///
    /// The longest possible line is `"4294967295 BPM\r\n"`, so this never
    /// panics while `REPORT_CAPACITY` holds it.
    #[must_use]
    pub fn new(bpm: u32) -> Self {
        let mut line = String::new();
        write!(line, "{} BPM\r\n", bpm).unwrap();
        Self { line }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }
}

impl From<Beat> for Report {
    fn from(beat: Beat) -> Self {
        Self::new(beat.bpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_formats_rate_followed_by_unit_and_line_break() {
        assert_eq!(Report::new(72).as_str(), "72 BPM\r\n");
    }

    #[test]
    fn it_does_not_pad_the_rate() {
        assert_eq!(Report::new(40).as_str(), "40 BPM\r\n");
        assert_eq!(Report::new(200).as_str(), "200 BPM\r\n");
    }

    #[test]
    fn when_created_from_beat_it_uses_its_rate() {
        let report = Report::from(Beat { bpm: 70, time: 1850 });
        assert_eq!(report.as_str(), "70 BPM\r\n");
    }

    #[test]
    fn even_the_largest_rate_fits() {
        assert_eq!(Report::new(u32::MAX).as_str(), "4294967295 BPM\r\n");
    }
}
