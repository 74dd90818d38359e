//! Injectable randomness for the tick engine.
//!
//! # Determinism strategy
//!
//! Nothing in the simulation calls a platform RNG.  The engine only ever
//! draws through [`RngProvider`], which the caller owns and passes into each
//! tick.  Two implementations ship here:
//!
//! - [`SimRng`]: a seeded `SmallRng`.  The same seed and the same sequence
//!   of ticks always produce identical worlds.
//! - [`ScriptedRng`]: replays a fixed list of unit values.  Tests use it to
//!   force a specific assembly outcome or bar-mining duration.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The two random primitives the job model needs.
pub trait RngProvider {
    /// A real uniformly distributed in `[lo, hi)`.
    ///
    /// Callers guarantee `lo < hi`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// A real uniformly distributed in `[0, 1)`, used for success checks.
    fn unit(&mut self) -> f64;
}

impl<R: RngProvider + ?Sized> RngProvider for &mut R {
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform(lo, hi)
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation RNG.
///
/// Used only in single-threaded contexts: the world is ticked strictly
/// sequentially, so one stream per world is enough.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RngProvider for SimRng {
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.gen_range(lo..hi)
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── ScriptedRng ───────────────────────────────────────────────────────────────

/// Replays a fixed sequence of unit values, cycling when it runs out.
///
/// `uniform(lo, hi)` consumes one scripted value `u` and returns
/// `lo + u * (hi - lo)`, so a script of `[0.0]` always yields the lower bound
/// of every range.  Values are clamped into `[0, 1)`; an empty script behaves
/// like `[0.0]`.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Always return `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_value(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

impl RngProvider for ScriptedRng {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let u = self.next_value();
        lo + u * (hi - lo)
    }

    fn unit(&mut self) -> f64 {
        self.next_value()
    }
}
