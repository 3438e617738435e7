//! Axis pin resolver — compile-time (axis, signal-kind) → (register, bit).
//!
//! [`Axis`] specializes over the axis index, so `Axis::<2>::STEP` is a plain
//! const with no table lookup left at run time. An index at or beyond the
//! configured axis count fails const evaluation, which makes the reference
//! a build error rather than a runtime branch:
//!
//! ```compile_fail
//! // No board supports a seventh axis; this does not build.
//! const PIN: stepboard::pin::PinDef = stepboard::axis::Axis::<6>::STEP;
//! ```

use crate::board::{self, N_AXIS};
use crate::pin::PinDef;

/// One logical axis, specialized at compile time.
pub struct Axis<const I: usize>;

const fn resolve(table: &[PinDef; N_AXIS], axis: usize) -> PinDef {
    assert!(axis < N_AXIS, "axis index exceeds the configured axis count");
    table[axis]
}

impl<const I: usize> Axis<I> {
    pub const STEP: PinDef = resolve(&board::STEP, I);
    pub const DIRECTION: PinDef = resolve(&board::DIRECTION, I);
    pub const ENABLE: PinDef = resolve(&board::ENABLE, I);
    pub const MIN_LIMIT: PinDef = resolve(&board::MIN_LIMIT, I);
    pub const MAX_LIMIT: PinDef = resolve(&board::MAX_LIMIT, I);

    #[cfg(feature = "microsteps")]
    pub const MS1: PinDef = resolve(&board::MS1, I);
    #[cfg(feature = "microsteps")]
    pub const MS2: PinDef = resolve(&board::MS2, I);
}

// ── Port-atomic masks ───────────────────────────────────────────────────
//
// OR of all bits of one signal kind, for the single-register-write pulse
// and limit paths. Evaluate these in const context: profiles whose bits
// span multiple ports fail the shared-port assertion at build time.

pub const fn step_mask() -> u8 {
    assert!(
        board::same_port(&board::STEP),
        "step bits span multiple register groups on this profile"
    );
    board::mask_of(&board::STEP)
}

pub const fn direction_mask() -> u8 {
    assert!(
        board::same_port(&board::DIRECTION),
        "direction bits span multiple register groups on this profile"
    );
    board::mask_of(&board::DIRECTION)
}

/// Combined min + max limit bits, for the pin-change interrupt mask.
pub const fn limit_mask() -> u8 {
    let limits: [PinDef; 2 * N_AXIS] = board::concat(board::MIN_LIMIT, board::MAX_LIMIT);
    assert!(
        board::same_port(&limits),
        "limit bits span multiple register groups on this profile"
    );
    board::mask_of(&limits)
}
