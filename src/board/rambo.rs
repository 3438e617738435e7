//! UltiMachine RAMBo 1.4 on a Mega 2560 — up to five axes, with the SPI
//! digital potentiometer for motor current and software-controlled
//! microstep select lines.
//!
//! Step bits all sit on port C and direction bits on port L, so the pulse
//! path updates every axis in one register write. Limit switches are spread
//! across ports; hardware limit interrupts are not wired.

use super::{take, N_AXIS};
use crate::pin::{PinDef, Port};

pub const BOARD_NAME: &str = "rambo14";

pub const ATOMIC_STEP_PORT: bool = true;
pub const HW_LIMIT_INTERRUPTS: bool = false;

pub const STEP: [PinDef; N_AXIS] = take([
    PinDef::new(Port::C, 0), // X step - D37
    PinDef::new(Port::C, 1), // Y step - D36
    PinDef::new(Port::C, 2), // Z step - D35
    PinDef::new(Port::C, 3), // E0 step - D34
    PinDef::new(Port::C, 4), // E1 step - D33
]);

pub const DIRECTION: [PinDef; N_AXIS] = take([
    PinDef::new(Port::L, 1), // X dir - D48
    PinDef::new(Port::L, 0), // Y dir - D49
    PinDef::new(Port::L, 2), // Z dir - D47
    PinDef::new(Port::L, 6), // E0 dir - D43
    PinDef::new(Port::L, 7), // E1 dir - D42
]);

pub const ENABLE: [PinDef; N_AXIS] = take([
    PinDef::new(Port::A, 7), // X enable - D29
    PinDef::new(Port::A, 6), // Y enable - D28
    PinDef::new(Port::A, 5), // Z enable - D27
    PinDef::new(Port::A, 4), // E0 enable - D26
    PinDef::new(Port::A, 3), // E1 enable - D25
]);

pub const MIN_LIMIT: [PinDef; N_AXIS] = take([
    PinDef::new(Port::B, 6), // X min - D12
    PinDef::new(Port::B, 5), // Y min - D11
    PinDef::new(Port::H, 2), // Z min
    PinDef::new(Port::A, 2), // axis 4 min
    PinDef::new(Port::A, 1), // axis 5 min
]);

pub const MAX_LIMIT: [PinDef; N_AXIS] = take([
    PinDef::new(Port::D, 4), // X max
    PinDef::new(Port::J, 6), // Y max
    PinDef::new(Port::C, 7), // Z max - D29
    PinDef::new(Port::E, 7), // axis 4 max
    PinDef::new(Port::E, 2), // axis 5 max
]);

// ── Digital potentiometer (motor current) ───────────────────────────────

#[cfg(feature = "digipot")]
pub const DIGIPOT_CS: PinDef = PinDef::new(Port::D, 7); // D38

#[cfg(feature = "digipot")]
pub const SPI_MOSI: PinDef = PinDef::new(Port::B, 2);
#[cfg(feature = "digipot")]
pub const SPI_SCK: PinDef = PinDef::new(Port::B, 1);
#[cfg(feature = "digipot")]
pub const SPI_SS: PinDef = PinDef::new(Port::B, 0);

/// Digipot channel wired to each axis. The pot's channel order does not
/// match the axis order on this board.
#[cfg(feature = "digipot")]
pub const DIGIPOT_CHANNELS: [u8; N_AXIS] = take([4, 5, 3, 0, 1]);

// ── Microstep select lines ──────────────────────────────────────────────

#[cfg(feature = "microsteps")]
pub const MS1: [PinDef; N_AXIS] = take([
    PinDef::new(Port::G, 1), // X - D40
    PinDef::new(Port::K, 7), // Y - D69
    PinDef::new(Port::K, 6), // Z - D68
    PinDef::new(Port::K, 3), // E0 - D65
    PinDef::new(Port::K, 1), // E1 - D63
]);

#[cfg(feature = "microsteps")]
pub const MS2: [PinDef; N_AXIS] = take([
    PinDef::new(Port::G, 0), // X - D41
    PinDef::new(Port::G, 2), // Y - D39
    PinDef::new(Port::K, 5), // Z - D67
    PinDef::new(Port::K, 4), // E0 - D66
    PinDef::new(Port::K, 2), // E1 - D64
]);
