//! Register backend — volatile MMIO on AVR, a simulated register file
//! everywhere else.
//!
//! All register traffic in the crate funnels through [`read`], [`write`],
//! [`set_bits`] and [`clear_bits`]. On `target_arch = "avr"` these are
//! volatile accesses to the real data space. On any other target they hit an
//! in-memory register file with an event log, so every driver in this crate
//! is testable on the host with `cargo test`.

/// A data-space register address.
pub type RegAddr = u16;

// ── SPI register block (ATmega2560) ─────────────────────────────────────

pub const SPCR: RegAddr = 0x4C;
pub const SPSR: RegAddr = 0x4D;
pub const SPDR: RegAddr = 0x4E;

/// SPCR: SPI enable.
pub const SPCR_SPE: u8 = 1 << 6;
/// SPCR: master mode select.
pub const SPCR_MSTR: u8 = 1 << 4;
/// SPSR: transfer-complete flag.
pub const SPSR_SPIF: u8 = 1 << 7;

#[cfg(target_arch = "avr")]
mod backend {
    use super::RegAddr;

    pub fn read(addr: RegAddr) -> u8 {
        unsafe { core::ptr::read_volatile(addr as usize as *const u8) }
    }

    pub fn write(addr: RegAddr, value: u8) {
        unsafe { core::ptr::write_volatile(addr as usize as *mut u8, value) }
    }
}

#[cfg(not(target_arch = "avr"))]
mod backend {
    use super::sim;
    use super::RegAddr;

    pub fn read(addr: RegAddr) -> u8 {
        sim::read(addr)
    }

    pub fn write(addr: RegAddr, value: u8) {
        sim::write(addr, value)
    }
}

pub fn read(addr: RegAddr) -> u8 {
    backend::read(addr)
}

pub fn write(addr: RegAddr, value: u8) {
    backend::write(addr, value)
}

pub fn set_bits(addr: RegAddr, mask: u8) {
    write(addr, read(addr) | mask);
}

pub fn clear_bits(addr: RegAddr, mask: u8) {
    write(addr, read(addr) & !mask);
}

/// Simulated register file for non-AVR targets.
///
/// Behaves like the hardware where the drivers depend on it: a write to
/// `SPDR` completes "instantly" (raises SPIF, logs the transferred byte) and
/// a subsequent `SPDR` read clears SPIF. Everything else is plain byte
/// storage. The event log records register writes and SPI transfers in
/// order, which is what the driver tests assert against.
#[cfg(not(target_arch = "avr"))]
pub mod sim {
    use core::cell::RefCell;

    use critical_section::Mutex;
    use heapless::Vec;

    use super::{RegAddr, SPDR, SPSR, SPSR_SPIF};
    use crate::pin::PinDef;

    /// Simulated data space — covers the extended I/O area (ports H..L).
    const SPACE: usize = 0x120;

    /// Event log capacity. Overflow drops events rather than panicking;
    /// tests reset the log between phases.
    const LOG_CAP: usize = 128;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Event {
        /// A register write (final value, after read-modify-write).
        Write { addr: RegAddr, value: u8 },
        /// A byte clocked out over the SPI bus.
        SpiTransfer(u8),
    }

    struct Sim {
        regs: [u8; SPACE],
        events: Vec<Event, LOG_CAP>,
    }

    impl Sim {
        const fn new() -> Sim {
            Sim {
                regs: [0; SPACE],
                events: Vec::new(),
            }
        }
    }

    static SIM: Mutex<RefCell<Sim>> = Mutex::new(RefCell::new(Sim::new()));

    pub(super) fn read(addr: RegAddr) -> u8 {
        critical_section::with(|cs| {
            let mut sim = SIM.borrow_ref_mut(cs);
            let value = sim.regs[addr as usize];
            if addr == SPDR {
                // Reading the data register ends the transfer-complete state.
                sim.regs[SPSR as usize] &= !SPSR_SPIF;
            }
            value
        })
    }

    pub(super) fn write(addr: RegAddr, value: u8) {
        critical_section::with(|cs| {
            let mut sim = SIM.borrow_ref_mut(cs);
            sim.regs[addr as usize] = value;
            if addr == SPDR {
                // A master write starts a transfer; it completes immediately.
                sim.regs[SPSR as usize] |= SPSR_SPIF;
                let _ = sim.events.push(Event::SpiTransfer(value));
            } else {
                let _ = sim.events.push(Event::Write { addr, value });
            }
        })
    }

    /// Clear the register file and the event log.
    pub fn reset() {
        critical_section::with(|cs| {
            *SIM.borrow_ref_mut(cs) = Sim::new();
        })
    }

    /// Raw register value, without SPI side effects.
    pub fn reg(addr: RegAddr) -> u8 {
        critical_section::with(|cs| SIM.borrow_ref(cs).regs[addr as usize])
    }

    /// Whether the output facet currently drives the pin high.
    pub fn pin_driven_high(pin: PinDef) -> bool {
        (reg(pin.port.port_reg()) & pin.mask()) != 0
    }

    /// Set the level an external source presents on an input pin.
    pub fn drive_input(pin: PinDef, high: bool) {
        critical_section::with(|cs| {
            let mut sim = SIM.borrow_ref_mut(cs);
            let addr = pin.port.pin_reg() as usize;
            if high {
                sim.regs[addr] |= pin.mask();
            } else {
                sim.regs[addr] &= !pin.mask();
            }
        })
    }

    /// Drain and return the event log.
    pub fn take_events() -> Vec<Event, LOG_CAP> {
        critical_section::with(|cs| core::mem::take(&mut SIM.borrow_ref_mut(cs).events))
    }

    /// Serialize tests that share the simulator. Tests take this guard
    /// first, then `reset()`.
    #[cfg(test)]
    pub fn lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
        LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim::Event;

    #[test]
    fn read_modify_write_preserves_other_bits() {
        let _guard = sim::lock();
        sim::reset();

        write(0x22, 0b0001_0000);
        set_bits(0x22, 0b0000_0001);
        assert_eq!(read(0x22), 0b0001_0001);
        clear_bits(0x22, 0b0001_0000);
        assert_eq!(read(0x22), 0b0000_0001);
    }

    #[test]
    fn spdr_write_raises_spif_and_logs_transfer() {
        let _guard = sim::lock();
        sim::reset();

        write(SPDR, 0xA5);
        assert_eq!(read(SPSR) & SPSR_SPIF, SPSR_SPIF);
        // Reading the data register clears the flag.
        assert_eq!(read(SPDR), 0xA5);
        assert_eq!(read(SPSR) & SPSR_SPIF, 0);

        let events = sim::take_events();
        assert!(events.contains(&Event::SpiTransfer(0xA5)));
    }

    #[test]
    fn event_log_preserves_write_order() {
        let _guard = sim::lock();
        sim::reset();

        write(0x25, 1);
        write(SPDR, 2);
        write(0x25, 3);
        let events = sim::take_events();
        assert_eq!(
            events.as_slice(),
            &[
                Event::Write { addr: 0x25, value: 1 },
                Event::SpiTransfer(2),
                Event::Write { addr: 0x25, value: 3 },
            ]
        );
    }
}
