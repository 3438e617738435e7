//! Pin descriptors — one bit within one 8-bit I/O register group.
//!
//! A [`Port`] names a physical register group of the ATmega2560 data space
//! and yields its three facets: direction (`DDRx`), output (`PORTx`) and
//! input (`PINx`). A [`PinDef`] pairs a port with a bit position and is pure
//! compile-time data; the board profile tables in [`crate::board`] are built
//! from it. Driving a pin at run time goes through an [`Output`] or
//! [`Input`] handle, constructed once by the driver that owns the bit.

use crate::regs::{self, RegAddr};

/// An 8-bit I/O register group of the ATmega2560.
///
/// The AVR exposes each group as three consecutive registers:
/// `PINx` (input) at the base address, `DDRx` (direction) at base + 1 and
/// `PORTx` (output / pull-up) at base + 2. Ports A–G live in the low I/O
/// space, H–L in extended I/O. There is no port I.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    J,
    K,
    L,
}

impl Port {
    /// Base data-space address of the group (the `PINx` register).
    pub const fn base(self) -> RegAddr {
        match self {
            Port::A => 0x20,
            Port::B => 0x23,
            Port::C => 0x26,
            Port::D => 0x29,
            Port::E => 0x2C,
            Port::F => 0x2F,
            Port::G => 0x32,
            Port::H => 0x100,
            Port::J => 0x103,
            Port::K => 0x106,
            Port::L => 0x109,
        }
    }

    /// Input facet — reads pin levels.
    pub const fn pin_reg(self) -> RegAddr {
        self.base()
    }

    /// Direction facet — a set bit configures the pin as output.
    pub const fn ddr(self) -> RegAddr {
        self.base() + 1
    }

    /// Output facet — drives the pin level (pull-up select when input).
    pub const fn port_reg(self) -> RegAddr {
        self.base() + 2
    }
}

/// One bit within one register group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDef {
    pub port: Port,
    pub bit: u8,
}

impl PinDef {
    pub const fn new(port: Port, bit: u8) -> PinDef {
        assert!(bit < 8, "bit position must be 0..8");
        PinDef { port, bit }
    }

    pub const fn mask(self) -> u8 {
        1 << self.bit
    }

    /// Whether two descriptors name the same physical bit.
    pub const fn same_bit(self, other: PinDef) -> bool {
        self.port as u8 == other.port as u8 && self.bit == other.bit
    }
}

/// An output pin handle. Constructing it configures the bit as output;
/// holding it is what grants the right to drive the bit.
pub struct Output {
    pin: PinDef,
}

impl Output {
    pub fn new(pin: PinDef) -> Output {
        regs::set_bits(pin.port.ddr(), pin.mask());
        Output { pin }
    }

    pub fn set_high(&mut self) {
        regs::set_bits(self.pin.port.port_reg(), self.pin.mask());
    }

    pub fn set_low(&mut self) {
        regs::clear_bits(self.pin.port.port_reg(), self.pin.mask());
    }

    pub fn write(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    pub fn pin(&self) -> PinDef {
        self.pin
    }
}

/// An input pin handle. Constructing it configures the bit as input.
pub struct Input {
    pin: PinDef,
}

impl Input {
    pub fn new(pin: PinDef) -> Input {
        regs::clear_bits(pin.port.ddr(), pin.mask());
        Input { pin }
    }

    /// Enable the internal pull-up (a PORTx write while the bit is input).
    pub fn with_pullup(pin: PinDef) -> Input {
        let input = Input::new(pin);
        regs::set_bits(pin.port.port_reg(), pin.mask());
        input
    }

    pub fn is_high(&self) -> bool {
        (regs::read(self.pin.port.pin_reg()) & self.pin.mask()) != 0
    }

    pub fn pin(&self) -> PinDef {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::sim;

    // ── Register group facets ───────────────────────────────────────

    #[test]
    fn facets_are_consecutive_registers() {
        assert_eq!(Port::A.pin_reg(), 0x20);
        assert_eq!(Port::A.ddr(), 0x21);
        assert_eq!(Port::A.port_reg(), 0x22);
        // Extended I/O space
        assert_eq!(Port::L.pin_reg(), 0x109);
        assert_eq!(Port::L.ddr(), 0x10A);
        assert_eq!(Port::L.port_reg(), 0x10B);
    }

    #[test]
    fn same_bit_compares_port_and_bit() {
        let a = PinDef::new(Port::C, 3);
        assert!(a.same_bit(PinDef::new(Port::C, 3)));
        assert!(!a.same_bit(PinDef::new(Port::C, 4)));
        assert!(!a.same_bit(PinDef::new(Port::D, 3)));
    }

    // ── Output / Input handles against the simulator ────────────────

    #[test]
    fn output_configures_direction_and_drives_level() {
        let _guard = sim::lock();
        sim::reset();

        let pin = PinDef::new(Port::D, 7);
        let mut out = Output::new(pin);
        assert_eq!(sim::reg(Port::D.ddr()) & pin.mask(), pin.mask());

        out.set_high();
        assert!(sim::pin_driven_high(pin));
        out.set_low();
        assert!(!sim::pin_driven_high(pin));
        out.write(true);
        assert!(sim::pin_driven_high(pin));
    }

    #[test]
    fn output_leaves_other_bits_alone() {
        let _guard = sim::lock();
        sim::reset();

        let mut b0 = Output::new(PinDef::new(Port::B, 0));
        let mut b5 = Output::new(PinDef::new(Port::B, 5));
        b0.set_high();
        b5.set_high();
        b0.set_low();
        assert!(!sim::pin_driven_high(PinDef::new(Port::B, 0)));
        assert!(sim::pin_driven_high(PinDef::new(Port::B, 5)));
    }

    #[test]
    fn input_reads_level_from_pin_register() {
        let _guard = sim::lock();
        sim::reset();

        let pin = PinDef::new(Port::E, 5);
        let input = Input::new(pin);
        assert_eq!(sim::reg(Port::E.ddr()) & pin.mask(), 0);
        assert!(!input.is_high());
        sim::drive_input(pin, true);
        assert!(input.is_high());
    }

    #[test]
    fn pullup_input_sets_output_facet_bit() {
        let _guard = sim::lock();
        sim::reset();

        let pin = PinDef::new(Port::K, 7);
        let _input = Input::with_pullup(pin);
        assert_eq!(sim::reg(Port::K.ddr()) & pin.mask(), 0);
        assert_eq!(sim::reg(Port::K.port_reg()) & pin.mask(), pin.mask());
    }
}
