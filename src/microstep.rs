//! Software-controlled microstepping.
//!
//! Each axis has two select lines into its stepper driver; the four wired
//! line combinations pick the stepping resolution. Anything else — an
//! unknown divisor, an axis beyond the configured count — is silently
//! ignored, mirroring a hardware table that simply has no entry for it.

use log::debug;

use crate::board::{self, N_AXIS};
use crate::pin::Output;

/// Stepping resolution, named by its step divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicrostepMode {
    Full,
    Half,
    Quarter,
    Sixteenth,
}

impl MicrostepMode {
    pub const fn from_divisor(divisor: u8) -> Option<MicrostepMode> {
        match divisor {
            1 => Some(MicrostepMode::Full),
            2 => Some(MicrostepMode::Half),
            4 => Some(MicrostepMode::Quarter),
            16 => Some(MicrostepMode::Sixteenth),
            _ => None,
        }
    }

    pub const fn divisor(self) -> u8 {
        match self {
            MicrostepMode::Full => 1,
            MicrostepMode::Half => 2,
            MicrostepMode::Quarter => 4,
            MicrostepMode::Sixteenth => 16,
        }
    }

    /// Levels for (select-line-1, select-line-2).
    pub const fn select_lines(self) -> (bool, bool) {
        match self {
            MicrostepMode::Full => (false, false),
            MicrostepMode::Half => (true, false),
            MicrostepMode::Quarter => (false, true),
            MicrostepMode::Sixteenth => (true, true),
        }
    }
}

pub struct Microstep {
    ms1: [Output; N_AXIS],
    ms2: [Output; N_AXIS],
}

impl Microstep {
    /// Configure both select lines of every axis as outputs and apply the
    /// default divisor per axis. Safe to call again; the result is the same
    /// as a single init.
    pub fn init(default_divisors: &[u8; N_AXIS]) -> Microstep {
        let mut driver = Microstep {
            ms1: board::MS1.map(Output::new),
            ms2: board::MS2.map(Output::new),
        };
        for (axis, &divisor) in default_divisors.iter().enumerate() {
            driver.set(axis, divisor);
        }
        driver
    }

    /// Select the resolution for one axis by divisor. Divisors other than
    /// 1, 2, 4 and 16 are ignored.
    pub fn set(&mut self, axis: usize, divisor: u8) {
        if let Some(mode) = MicrostepMode::from_divisor(divisor) {
            self.set_mode(axis, mode);
        }
    }

    /// Select the resolution for one axis. Writes exactly that axis's two
    /// select bits; out-of-range axes are ignored.
    pub fn set_mode(&mut self, axis: usize, mode: MicrostepMode) {
        if axis >= N_AXIS {
            return;
        }
        let (ms1, ms2) = mode.select_lines();
        self.ms1[axis].write(ms1);
        self.ms2[axis].write(ms2);
        debug!("axis {} microstep -> 1/{}", axis, mode.divisor());
    }
}
