//! Baseline Arduino Mega 2560 layout — three axes, no optional peripherals.
//!
//! Step and direction bits each sit on a single port so the pulse path can
//! update all axes in one register write, and every limit bit shares port B
//! so one pin-change interrupt covers the whole group. The driver-enable
//! line is a single shared pin; all three axes map to it.

use super::{take, N_AXIS};
use crate::pin::{PinDef, Port};

pub const BOARD_NAME: &str = "mega2560";

pub const ATOMIC_STEP_PORT: bool = true;
pub const HW_LIMIT_INTERRUPTS: bool = true;

pub const STEP: [PinDef; N_AXIS] = take([
    PinDef::new(Port::A, 2), // X step - digital pin 24
    PinDef::new(Port::A, 3), // Y step - digital pin 25
    PinDef::new(Port::A, 4), // Z step - digital pin 26
]);

pub const DIRECTION: [PinDef; N_AXIS] = take([
    PinDef::new(Port::C, 7), // X dir - digital pin 30
    PinDef::new(Port::C, 6), // Y dir - digital pin 31
    PinDef::new(Port::C, 5), // Z dir - digital pin 32
]);

// One shared disable line for all drivers - digital pin 13.
pub const ENABLE: [PinDef; N_AXIS] = take([PinDef::new(Port::B, 7); 3]);

pub const MIN_LIMIT: [PinDef; N_AXIS] = take([
    PinDef::new(Port::B, 4), // X min - digital pin 10
    PinDef::new(Port::B, 5), // Y min - digital pin 11
    PinDef::new(Port::B, 6), // Z min - digital pin 12
]);

pub const MAX_LIMIT: [PinDef; N_AXIS] = take([
    PinDef::new(Port::B, 0), // X max - digital pin 53
    PinDef::new(Port::B, 1), // Y max - digital pin 52
    PinDef::new(Port::B, 2), // Z max - digital pin 51
]);
