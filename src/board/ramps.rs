//! RAMPS 1.4 shield on a Mega 2560 — up to six axes.
//!
//! Signals are spread over whatever pins the shield breaks out, so neither
//! the step group nor the direction group fits on one port; the pulse path
//! has to write per axis here, and hardware limit interrupts are not wired.

use super::{take, N_AXIS};
use crate::pin::{PinDef, Port};

pub const BOARD_NAME: &str = "ramps14";

pub const ATOMIC_STEP_PORT: bool = false;
pub const HW_LIMIT_INTERRUPTS: bool = false;

pub const STEP: [PinDef; N_AXIS] = take([
    PinDef::new(Port::F, 0), // X step - pin A0
    PinDef::new(Port::F, 6), // Y step - pin A6
    PinDef::new(Port::L, 3), // Z step - pin D46
    PinDef::new(Port::A, 4), // axis 4 step - pin D26 (E0)
    PinDef::new(Port::C, 1), // axis 5 step - pin D36 (E1)
    PinDef::new(Port::L, 0), // axis 6 step - pin D49 (Aux-3)
]);

pub const DIRECTION: [PinDef; N_AXIS] = take([
    PinDef::new(Port::F, 1), // X dir - pin A1
    PinDef::new(Port::F, 7), // Y dir - pin A7
    PinDef::new(Port::L, 1), // Z dir - pin D48
    PinDef::new(Port::A, 6), // axis 4 dir - pin D28 (E0)
    PinDef::new(Port::C, 3), // axis 5 dir - pin D34 (E1)
    PinDef::new(Port::B, 2), // axis 6 dir - pin D51 (Aux-3)
]);

pub const ENABLE: [PinDef; N_AXIS] = take([
    PinDef::new(Port::D, 7), // X enable - pin D38
    PinDef::new(Port::F, 2), // Y enable - pin A2
    PinDef::new(Port::K, 0), // Z enable - pin A8
    PinDef::new(Port::A, 2), // axis 4 enable - pin D24 (E0)
    PinDef::new(Port::C, 7), // axis 5 enable - pin D30 (E1)
    PinDef::new(Port::B, 0), // axis 6 enable - pin D53 (Aux-3)
]);

pub const MIN_LIMIT: [PinDef; N_AXIS] = take([
    PinDef::new(Port::E, 5), // X min - pin D3
    PinDef::new(Port::J, 1), // Y min - pin D14
    PinDef::new(Port::D, 3), // Z min - pin D18
    PinDef::new(Port::E, 4), // axis 4 min - pin D2
    PinDef::new(Port::J, 0), // axis 5 min - pin D15
    PinDef::new(Port::J, 2), // axis 6 min
]);

pub const MAX_LIMIT: [PinDef; N_AXIS] = take([
    PinDef::new(Port::F, 3), // X max - pin A3
    PinDef::new(Port::F, 4), // Y max - pin A4
    PinDef::new(Port::D, 2), // Z max - pin D19
    PinDef::new(Port::G, 1), // axis 4 max - pin D40
    PinDef::new(Port::F, 5), // axis 5 max - pin A5
    PinDef::new(Port::J, 3), // axis 6 max
]);
