//! Shipping defaults for the per-axis peripheral settings.
//!
//! In the full machine these mappings live in the stored settings; the
//! settings layer passes them (or its own values) into the driver `init`
//! calls. Nothing here is read by the drivers on their own.

#[cfg(any(feature = "digipot", feature = "microsteps"))]
use crate::board::{take, N_AXIS};

/// Default motor current per axis, 0–255 on the digipot's wiper scale
/// (135 is roughly 0.75 A on the rambo driver stage).
#[cfg(feature = "digipot")]
pub const MOTOR_CURRENT: [u8; N_AXIS] = take([135; 6]);

/// Default microstep divisor per axis.
#[cfg(feature = "microsteps")]
pub const MICROSTEP_DIVISORS: [u8; N_AXIS] = take([16; 6]);
