//! Motor current control over the board's SPI digital potentiometer.
//!
//! The pot has one channel per stepper driver; the board wires channels in
//! its own order, so [`crate::board::DIGIPOT_CHANNELS`] maps logical axes
//! to physical channels. Setting a channel is a two-byte frame between
//! chip-select edges: channel number, then the 8-bit wiper value. The pot
//! sends nothing back — a disconnected chip is indistinguishable from a
//! working one at this layer.
//!
//! Blocking (busy-waits per byte); call from the normal execution context
//! only, never from the stepper interrupt.

use log::debug;

use crate::board::{self, N_AXIS};
use crate::pin::Output;
use crate::spi::SpiBus;

pub struct CurrentControl {
    bus: SpiBus,
    cs: Output,
    current: [u8; N_AXIS],
}

impl CurrentControl {
    /// Bring up the bus and apply `default_current` to every axis.
    ///
    /// Safe to call again; a second init re-applies the defaults and leaves
    /// pin directions and bus mode unchanged.
    pub fn init(default_current: &[u8; N_AXIS]) -> CurrentControl {
        let mut cs = Output::new(board::DIGIPOT_CS);
        cs.set_high();
        let bus = SpiBus::init_master(board::SPI_MOSI, board::SPI_SCK, board::SPI_SS);

        let mut control = CurrentControl {
            bus,
            cs,
            current: [0; N_AXIS],
        };
        for (axis, &value) in default_current.iter().enumerate() {
            control.set(axis, value);
        }
        debug!("digipot ready, {} channels", N_AXIS);
        control
    }

    /// Program the current magnitude for one axis.
    ///
    /// `axis` must be below [`N_AXIS`]; the caller validates it against the
    /// same constant the tables are built from. Any `value` 0–255 is
    /// accepted as-is.
    pub fn set(&mut self, axis: usize, value: u8) {
        let channel = board::DIGIPOT_CHANNELS[axis];
        self.cs.set_low();
        self.bus.transfer(channel);
        self.bus.transfer(value);
        self.cs.set_high();
        self.current[axis] = value;
        debug!("axis {} current -> {}", axis, value);
    }

    /// Last value programmed for `axis`.
    pub fn current(&self, axis: usize) -> u8 {
        self.current[axis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use crate::pin::PinDef;
    use crate::regs::sim::{self, Event};
    use crate::regs::RegAddr;

    const CS: PinDef = board::DIGIPOT_CS;
    const CS_PORT: RegAddr = {
        let pin = board::DIGIPOT_CS;
        pin.port.port_reg()
    };

    #[test]
    fn init_applies_default_current_to_every_axis() {
        let _guard = sim::lock();
        sim::reset();

        let control = CurrentControl::init(&defaults::MOTOR_CURRENT);
        for axis in 0..N_AXIS {
            assert_eq!(control.current(axis), defaults::MOTOR_CURRENT[axis]);
        }

        // One channel/value pair per axis went over the bus.
        let transfers: usize = sim::take_events()
            .iter()
            .filter(|e| matches!(e, Event::SpiTransfer(_)))
            .count();
        assert_eq!(transfers, 2 * N_AXIS);
    }

    #[test]
    fn set_frames_channel_then_value_between_cs_edges() {
        let _guard = sim::lock();
        sim::reset();

        let mut control = CurrentControl::init(&defaults::MOTOR_CURRENT);
        sim::take_events();

        control.set(1, 128);
        let events = sim::take_events();
        assert_eq!(
            events.as_slice(),
            &[
                // CS asserted low...
                Event::Write { addr: CS_PORT, value: 0 },
                // ...channel byte, then magnitude...
                Event::SpiTransfer(board::DIGIPOT_CHANNELS[1]),
                Event::SpiTransfer(128),
                // ...CS deasserted strictly after both bytes.
                Event::Write { addr: CS_PORT, value: CS.mask() },
            ]
        );
    }

    #[test]
    fn full_value_range_is_transmitted_unmodified() {
        let _guard = sim::lock();
        sim::reset();

        let mut control = CurrentControl::init(&defaults::MOTOR_CURRENT);
        for &value in &[0u8, 1, 128, 255] {
            sim::take_events();
            control.set(0, value);
            let events = sim::take_events();
            let bytes: heapless::Vec<u8, 4> = events
                .iter()
                .filter_map(|e| match e {
                    Event::SpiTransfer(b) => Some(*b),
                    _ => None,
                })
                .collect();
            assert_eq!(bytes.as_slice(), &[board::DIGIPOT_CHANNELS[0], value]);
            assert_eq!(control.current(0), value);
        }
    }

    #[test]
    fn reinit_is_idempotent() {
        let _guard = sim::lock();
        sim::reset();

        let first = CurrentControl::init(&defaults::MOTOR_CURRENT);
        let cs_ddr = sim::reg(CS.port.ddr());
        let cs_level = sim::reg(CS_PORT);
        let spcr = sim::reg(crate::regs::SPCR);

        let second = CurrentControl::init(&defaults::MOTOR_CURRENT);
        assert_eq!(sim::reg(CS.port.ddr()), cs_ddr);
        assert_eq!(sim::reg(CS_PORT), cs_level);
        assert_eq!(sim::reg(crate::regs::SPCR), spcr);
        for axis in 0..N_AXIS {
            assert_eq!(second.current(axis), first.current(axis));
        }
    }

    #[test]
    #[should_panic]
    fn out_of_range_axis_is_a_contract_violation() {
        let _guard = sim::lock();
        sim::reset();

        let mut control = CurrentControl::init(&defaults::MOTOR_CURRENT);
        control.set(N_AXIS, 100);
    }
}
