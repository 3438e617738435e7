//! stepboard — board abstraction and peripheral drivers for a multi-axis
//! stepper controller.
//!
//! Maps logical (axis, signal-kind) pairs onto physical register/bit
//! locations of an ATmega2560-based controller board, resolved entirely at
//! compile time: the board profile and axis count are cargo features, the
//! pin tables are consts, and [`axis::Axis`] specializes per axis index so
//! the time-critical pulse path pays no lookup cost. On top of the mapping
//! sit two peripherals present only on boards that wire them: the SPI
//! digipot motor-current driver and the microstep select-line driver.
//!
//! Register traffic goes through [`regs`], which is volatile MMIO on AVR
//! and a simulated register file elsewhere — the whole crate is testable
//! on any host with `cargo test`. The pulse generator, planner, G-code and
//! settings layers are external consumers of these tables and drivers.

#![cfg_attr(not(test), no_std)]

pub mod axis;
pub mod board;
pub mod defaults;
#[cfg(feature = "digipot")]
pub mod digipot;
#[cfg(feature = "microsteps")]
pub mod microstep;
pub mod pin;
pub mod regs;
#[cfg(feature = "digipot")]
pub mod spi;
