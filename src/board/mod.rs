//! Board profiles — compile-time pin assignments for supported boards.
//!
//! Exactly one profile is active per build, selected via feature flags
//! (`mega2560`, `ramps`, `rambo`). A profile is a set of per-signal-kind
//! tables (`STEP`, `DIRECTION`, `ENABLE`, `MIN_LIMIT`, `MAX_LIMIT`, plus the
//! optional digipot bus and microstep select lines), each trimmed to the
//! configured axis count. The tables are plain consts: resolving an axis to
//! a register/bit pair costs nothing at run time, and every wiring
//! constraint below is checked during const evaluation, so a profile that
//! assigns one bit to two signal kinds, or a build that asks for more axes
//! than the board wires, does not compile.

use crate::pin::PinDef;

#[cfg(not(any(
    feature = "board-mega2560",
    feature = "board-ramps",
    feature = "board-rambo"
)))]
compile_error!("select a board profile feature: `mega2560`, `ramps` or `rambo`");

#[cfg(all(feature = "board-mega2560", feature = "board-ramps"))]
compile_error!("board profile features are mutually exclusive");
#[cfg(all(feature = "board-mega2560", feature = "board-rambo"))]
compile_error!("board profile features are mutually exclusive");
#[cfg(all(feature = "board-ramps", feature = "board-rambo"))]
compile_error!("board profile features are mutually exclusive");

#[cfg(all(feature = "digipot", not(feature = "board-rambo")))]
compile_error!("the selected board profile does not wire a digital potentiometer");
#[cfg(all(feature = "microsteps", not(feature = "board-rambo")))]
compile_error!("the selected board profile does not wire microstep select lines");

/// Configured axis count, 3 unless raised by the cumulative `axes-*`
/// features.
#[cfg(not(feature = "axes-4"))]
pub const N_AXIS: usize = 3;
#[cfg(all(feature = "axes-4", not(feature = "axes-5")))]
pub const N_AXIS: usize = 4;
#[cfg(all(feature = "axes-5", not(feature = "axes-6")))]
pub const N_AXIS: usize = 5;
#[cfg(feature = "axes-6")]
pub const N_AXIS: usize = 6;

#[cfg(feature = "board-mega2560")]
mod mega2560;
#[cfg(feature = "board-mega2560")]
pub use mega2560::*;

#[cfg(feature = "board-ramps")]
mod ramps;
#[cfg(feature = "board-ramps")]
pub use ramps::*;

#[cfg(feature = "board-rambo")]
mod rambo;
#[cfg(feature = "board-rambo")]
pub use rambo::*;

/// Trim a wired-axis list to the configured axis count. Selecting more
/// axes than the board wires fails const evaluation.
pub(crate) const fn take<T: Copy, const M: usize>(wired: [T; M]) -> [T; N_AXIS] {
    assert!(
        M >= N_AXIS,
        "the selected board profile does not wire this many axes"
    );
    let mut out = [wired[0]; N_AXIS];
    let mut i = 0;
    while i < N_AXIS {
        out[i] = wired[i];
        i += 1;
    }
    out
}

pub(crate) const fn concat<T: Copy, const A: usize, const B: usize, const C: usize>(
    a: [T; A],
    b: [T; B],
) -> [T; C] {
    assert!(A + B == C);
    let mut out = [a[0]; C];
    let mut i = 0;
    while i < A {
        out[i] = a[i];
        i += 1;
    }
    while i < C {
        out[i] = b[i - A];
        i += 1;
    }
    out
}

/// Whether every descriptor sits in the same register group.
pub(crate) const fn same_port(pins: &[PinDef]) -> bool {
    let mut i = 1;
    while i < pins.len() {
        if pins[i].port as u8 != pins[0].port as u8 {
            return false;
        }
        i += 1;
    }
    true
}

/// OR of all bit masks. Meaningful only when [`same_port`] holds.
pub(crate) const fn mask_of(pins: &[PinDef]) -> u8 {
    let mut mask = 0;
    let mut i = 0;
    while i < pins.len() {
        mask |= pins[i].mask();
        i += 1;
    }
    mask
}

/// No two descriptors in the list name the same physical bit.
pub(crate) const fn all_distinct(pins: &[PinDef]) -> bool {
    let mut a = 0;
    while a < pins.len() {
        let mut b = a + 1;
        while b < pins.len() {
            if pins[a].same_bit(pins[b]) {
                return false;
            }
            b += 1;
        }
        a += 1;
    }
    true
}

/// No bit is claimed by two *different* signal kinds. Duplicates within one
/// kind are not checked here — a shared enable line is one purpose, not a
/// conflict.
pub(crate) const fn kinds_disjoint(kinds: &[&[PinDef]]) -> bool {
    let mut a = 0;
    while a < kinds.len() {
        let mut b = a + 1;
        while b < kinds.len() {
            let mut i = 0;
            while i < kinds[a].len() {
                let mut j = 0;
                while j < kinds[b].len() {
                    if kinds[a][i].same_bit(kinds[b][j]) {
                        return false;
                    }
                    j += 1;
                }
                i += 1;
            }
            b += 1;
        }
        a += 1;
    }
    true
}

// ── Build-time wiring validation for the active profile ─────────────────

const LIMITS: [PinDef; 2 * N_AXIS] = concat(MIN_LIMIT, MAX_LIMIT);

#[cfg(feature = "microsteps")]
const MS_ALL: [PinDef; 2 * N_AXIS] = concat(MS1, MS2);
#[cfg(not(feature = "microsteps"))]
const MS_ALL: [PinDef; 0] = [];

#[cfg(feature = "digipot")]
const BUS: [PinDef; 4] = [DIGIPOT_CS, SPI_MOSI, SPI_SCK, SPI_SS];
#[cfg(not(feature = "digipot"))]
const BUS: [PinDef; 0] = [];

const _: () = assert!(N_AXIS >= 3 && N_AXIS <= 6);

// The pulse path writes all step bits (and all direction bits) in one
// register access on profiles that declare it.
const _: () = assert!(
    !ATOMIC_STEP_PORT || same_port(&STEP),
    "step bits must share one register group on this profile"
);
const _: () = assert!(
    !ATOMIC_STEP_PORT || same_port(&DIRECTION),
    "direction bits must share one register group on this profile"
);

// Interrupt-driven limits need every limit bit on the interrupt port.
const _: () = assert!(
    !HW_LIMIT_INTERRUPTS || same_port(&LIMITS),
    "limit bits must share one register group when limit interrupts are wired"
);

const _: () = assert!(all_distinct(&STEP), "duplicate step pin");
const _: () = assert!(all_distinct(&DIRECTION), "duplicate direction pin");
const _: () = assert!(all_distinct(&MIN_LIMIT), "duplicate min-limit pin");
const _: () = assert!(all_distinct(&MAX_LIMIT), "duplicate max-limit pin");
#[cfg(feature = "microsteps")]
const _: () = assert!(all_distinct(&MS_ALL), "duplicate microstep select pin");
#[cfg(feature = "digipot")]
const _: () = assert!(all_distinct(&BUS), "duplicate digipot bus pin");

const _: () = assert!(
    kinds_disjoint(&[
        &STEP,
        &DIRECTION,
        &ENABLE,
        &MIN_LIMIT,
        &MAX_LIMIT,
        &MS_ALL,
        &BUS
    ]),
    "a pin is assigned to more than one signal kind"
);

#[cfg(test)]
mod tests {
    use super::*;

    // ── Profile table integrity (re-runs the const checks as data) ──

    #[test]
    fn axis_count_within_supported_range() {
        assert!((3..=6).contains(&N_AXIS));
        assert_eq!(STEP.len(), N_AXIS);
        assert_eq!(DIRECTION.len(), N_AXIS);
        assert_eq!(ENABLE.len(), N_AXIS);
        assert_eq!(MIN_LIMIT.len(), N_AXIS);
        assert_eq!(MAX_LIMIT.len(), N_AXIS);
    }

    #[test]
    fn no_bit_serves_two_signal_kinds() {
        assert!(kinds_disjoint(&[
            &STEP,
            &DIRECTION,
            &ENABLE,
            &MIN_LIMIT,
            &MAX_LIMIT,
            &MS_ALL,
            &BUS
        ]));
    }

    #[test]
    fn declared_port_constraints_hold() {
        if ATOMIC_STEP_PORT {
            assert!(same_port(&STEP));
            assert!(same_port(&DIRECTION));
        }
        if HW_LIMIT_INTERRUPTS {
            assert!(same_port(&LIMITS));
        }
    }

    #[test]
    fn take_returns_leading_axes() {
        let trimmed: [u8; N_AXIS] = take([10, 11, 12, 13, 14, 15]);
        for (i, value) in trimmed.iter().enumerate() {
            assert_eq!(*value, 10 + i as u8);
        }
    }

    #[cfg(feature = "digipot")]
    #[test]
    fn digipot_channel_map_covers_every_axis() {
        assert_eq!(DIGIPOT_CHANNELS.len(), N_AXIS);
        assert!(all_distinct(&BUS));
    }
}
