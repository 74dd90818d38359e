//! Simulation time model.
//!
//! # Design
//!
//! Time is an absolute count of simulated milliseconds since the world was
//! created.  Unlike a fixed-step tick counter it is real-valued: the driver
//! hands the engine whatever wall-clock delta elapsed between frames, and
//! some job durations are sampled from a continuous range.
//!
//! The clock only moves forward.  [`Millis::advance_by`] clamps negative and
//! NaN deltas to zero so a misbehaving driver can never rewind the world.

use std::fmt;

/// An absolute or relative amount of simulated time, in milliseconds.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub f64);

impl Millis {
    pub const ZERO: Millis = Millis(0.0);

    /// The clock value `elapsed_ms` after `self`.
    ///
    /// Negative and NaN deltas count as zero.
    #[inline]
    pub fn advance_by(self, elapsed_ms: f64) -> Millis {
        // `f64::max` returns the non-NaN operand.
        Millis(self.0 + elapsed_ms.max(0.0))
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 / 1_000.0
    }
}

impl std::ops::Add for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Millis {
    type Output = Millis;
    #[inline]
    fn sub(self, rhs: Millis) -> Millis {
        Millis(self.0 - rhs.0)
    }
}

impl From<f64> for Millis {
    #[inline]
    fn from(ms: f64) -> Millis {
        Millis(ms)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}ms", self.0)
    }
}
