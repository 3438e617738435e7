//! Minimal SPI master over the AVR SPI register block.
//!
//! Only what the digipot needs: master-mode bring-up and a blocking
//! byte exchange. No interrupts, no configurable clock, no slave mode.

use crate::pin::{Output, PinDef};
use crate::regs::{self, SPCR, SPCR_MSTR, SPCR_SPE, SPDR, SPSR, SPSR_SPIF};

pub struct SpiBus {
    _mosi: Output,
    _sck: Output,
    _ss: Output,
}

impl SpiBus {
    /// Configure the three bus pins as outputs and enable master mode.
    ///
    /// The hardware SS pin is driven high and kept as an output; a low
    /// input on SS would knock the controller out of master mode.
    pub fn init_master(mosi: PinDef, sck: PinDef, ss: PinDef) -> SpiBus {
        let mut ss = Output::new(ss);
        ss.set_high();
        let bus = SpiBus {
            _mosi: Output::new(mosi),
            _sck: Output::new(sck),
            _ss: ss,
        };
        regs::write(SPCR, SPCR_SPE | SPCR_MSTR);
        bus
    }

    /// Blocking full-duplex exchange of one byte. Busy-waits on the
    /// transfer-complete flag; must not be called from interrupt context.
    pub fn transfer(&mut self, byte: u8) -> u8 {
        regs::write(SPDR, byte);
        while (regs::read(SPSR) & SPSR_SPIF) == 0 {}
        regs::read(SPDR)
    }
}
