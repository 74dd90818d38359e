//! Factory tunables.
//!
//! Every constant of the job model lives here.  `FactoryConfig::default()`
//! reproduces the reference game balance; drivers may load an override from
//! JSON (with the `serde` feature) and must call [`FactoryConfig::validate`]
//! before use.  `fb-world`'s builder does this for them.

use crate::{CoreError, CoreResult};

/// The cost of buying one robot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotPrice {
    pub foo:    u64,
    pub foobar: u64,
}

impl Default for RobotPrice {
    fn default() -> Self {
        Self { foo: 6, foobar: 3 }
    }
}

/// Top-level simulation configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FactoryConfig {
    /// Duration of one `MiningFoo` job.
    pub mining_foo_ms: f64,

    /// `[min, max)` range a `MiningBar` duration is sampled from.
    pub mining_bar_ms: (f64, f64),

    /// Duration of one `AssemblingFoobar` job.
    pub assembly_ms: f64,

    /// How long a robot is unavailable while changing jobs.
    pub switching_ms: f64,

    /// Probability that an assembly yields a foobar.  A failed assembly
    /// returns the bar and loses the foo.
    pub assembly_success_rate: f64,

    pub robot_price: RobotPrice,

    /// Population at which the world is done.  Purchases never exceed it.
    pub max_robots: usize,

    /// Robots created by a default world.  Between 2 and `max_robots`.
    pub initial_robots: usize,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            mining_foo_ms:         1_000.0,
            mining_bar_ms:         (500.0, 2_000.0),
            assembly_ms:           2_000.0,
            switching_ms:          5_000.0,
            assembly_success_rate: 0.6,
            robot_price:           RobotPrice::default(),
            max_robots:            20,
            initial_robots:        2,
        }
    }
}

impl FactoryConfig {
    /// Reject tunables the engine cannot honour.
    ///
    /// Durations must be finite and strictly positive so that a started job
    /// always ends strictly after the frame that started it.
    pub fn validate(&self) -> CoreResult<()> {
        let durations = [
            ("mining_foo_ms", self.mining_foo_ms),
            ("mining_bar_ms.0", self.mining_bar_ms.0),
            ("mining_bar_ms.1", self.mining_bar_ms.1),
            ("assembly_ms", self.assembly_ms),
            ("switching_ms", self.switching_ms),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a positive finite duration, got {value}"
                )));
            }
        }

        let (lo, hi) = self.mining_bar_ms;
        if lo >= hi {
            return Err(CoreError::Config(format!(
                "mining_bar_ms range is empty: [{lo}, {hi})"
            )));
        }

        if !(0.0..=1.0).contains(&self.assembly_success_rate) {
            return Err(CoreError::Config(format!(
                "assembly_success_rate must be within [0, 1], got {}",
                self.assembly_success_rate
            )));
        }

        if self.robot_price.foo == 0 || self.robot_price.foobar == 0 {
            return Err(CoreError::Config(
                "robot_price components must be at least 1".into(),
            ));
        }

        if self.max_robots == 0 {
            return Err(CoreError::Config("max_robots must be at least 1".into()));
        }

        if self.initial_robots < 2 || self.initial_robots > self.max_robots {
            return Err(CoreError::Config(format!(
                "initial_robots must be within [2, max_robots = {}], got {}",
                self.max_robots, self.initial_robots
            )));
        }

        Ok(())
    }
}
