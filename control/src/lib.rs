//! Pulse detection, passing raw sensor samples to beat events and reactions back.
//!
//! It is meant to run in a firmware with a single loop running in a fixed
//! cadence. However, parts of it may be useful in software as well.
//!
//! Following is the communication of the firmware using this package:
//!
//! ```text
//!         [ TickLoop ]
//!              |
//!              V
//!         [ Sampler ]
//!              |
//!              | (raw sample)
//!              V
//!    [ Monitor {Clock, Detector, Led} ]
//!        |                      |
//!        | (DesiredOutput.led)  | (DesiredOutput.report)
//!        V                      V
//!   [ Indicator ]          [ Reporter ]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

mod clock;
mod config;
mod detector;
mod interface;
mod led;
mod log;
mod monitor;
mod report;

pub use clock::Clock;
pub use config::{Config, BPM_RANGE, DEBOUNCE_MS, LED_ON_TIME, LOST_COUNT, THRESHOLD, TICK_MS};
pub use detector::{Beat, Detector, State};
pub use interface::{Indicator, Reporter, Sampler};
pub use led::Led;
pub use monitor::{DesiredOutput, Monitor};
pub use report::Report;
