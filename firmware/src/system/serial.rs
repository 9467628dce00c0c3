use nb::block;

use pulse_control::Reporter;

use crate::system::hal::gpio;
use crate::system::hal::pac::USART1;
use crate::system::hal::prelude::*;
use crate::system::hal::rcc::{rec, CoreClocks};
use crate::system::hal::serial::Tx;

pub const BAUD_RATE: u32 = 9600;

/// Serial link used to report detected heart rate.
///
/// Only the transmitting half is used, the receiving pin is kept configured
/// to hold the line in a defined state.
pub struct Serial {
    tx: Tx<USART1>,
}

pub type TxPin = gpio::gpiob::PB14<gpio::Alternate<4>>;
pub type RxPin = gpio::gpiob::PB15<gpio::Alternate<4>>;

impl Serial {
    /// Configure USART1 for 8N1 at `BAUD_RATE`.
    ///
    /// # Panics
    ///
    /// Panics if the requested baud rate cannot be derived from the clocks.
    #[must_use]
    pub fn new(
        usart: USART1,
        tx: TxPin,
        rx: RxPin,
        prec: rec::Usart1,
        clocks: &CoreClocks,
    ) -> Self {
        let serial = usart
            .serial((tx, rx), BAUD_RATE.bps(), prec, clocks)
            .unwrap();
        let (tx, _rx) = serial.split();
        Self { tx }
    }
}

impl Reporter for Serial {
    fn send_line(&mut self, line: &str) {
        // Writing into the transmit register cannot fail, it only blocks.
        for byte in line.bytes() {
            block!(self.tx.write(byte)).ok();
        }
        block!(self.tx.flush()).ok();
    }
}
