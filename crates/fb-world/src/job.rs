//! The job model: what each job costs, how long it takes, and what it yields.
//!
//! | Job                | Duration          | Start                              | Completion                   |
//! |--------------------|-------------------|------------------------------------|------------------------------|
//! | `MiningFoo`        | fixed             | always                             | +1 foo                       |
//! | `MiningBar`        | sampled `[lo,hi)` | always                             | +1 bar                       |
//! | `AssemblingFoobar` | fixed             | needs and consumes 1 foo + 1 bar   | +1 foobar, or +1 bar on fail |
//! | `BuyingRobot`      | instantaneous     | buys as many robots as affordable  | none                         |
//! | `Switching{t}`     | fixed             | always                             | job becomes `t`              |
//!
//! Every function here is pure apart from the counters and RNG it is handed;
//! the tick engine decides when and in which order they run.

use std::fmt;

use fb_core::{FactoryConfig, Millis, RngProvider};

use crate::Resources;

/// A job a caller may assign to a robot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Task {
    MiningFoo,
    MiningBar,
    AssemblingFoobar,
    BuyingRobot,
}

impl Task {
    pub const ALL: [Task; 4] = [
        Task::MiningFoo,
        Task::MiningBar,
        Task::AssemblingFoobar,
        Task::BuyingRobot,
    ];
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Task::MiningFoo        => "mining foo",
            Task::MiningBar        => "mining bar",
            Task::AssemblingFoobar => "assembling foobar",
            Task::BuyingRobot      => "buying robot",
        };
        f.write_str(s)
    }
}

/// The job a robot currently holds.
///
/// `Switching` always carries the task it is switching to, and that target
/// can never itself be `Switching`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Job {
    MiningFoo,
    MiningBar,
    AssemblingFoobar,
    BuyingRobot,
    Switching { target: Task },
}

impl From<Task> for Job {
    fn from(task: Task) -> Job {
        match task {
            Task::MiningFoo        => Job::MiningFoo,
            Task::MiningBar        => Job::MiningBar,
            Task::AssemblingFoobar => Job::AssemblingFoobar,
            Task::BuyingRobot      => Job::BuyingRobot,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.task()) {
            (Job::Switching { target }, _) => write!(f, "switching to {target}"),
            (_, Some(task)) => fmt::Display::fmt(&task, f),
            (_, None) => Ok(()),
        }
    }
}

/// What a finished job produced.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Completion {
    Foo,
    Bar,
    Foobar,
    /// The success check failed; the bar went back to stock.
    AssemblyFailed,
    /// The robot now holds this task.
    Switched(Task),
    /// No effect beyond the robot becoming idle.
    Nothing,
}

/// Result of offering an idle robot the chance to start its job.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Start {
    /// The robot is busy for `duration`; any inputs are already consumed.
    Working { duration: Millis },
    /// `BuyingRobot` can afford this many new robots and stays idle.  Nothing
    /// is paid yet; the engine charges for each robot it manages to add.
    Purchase(usize),
    /// The precondition failed; nothing changed.
    Blocked,
}

impl Job {
    #[inline]
    pub fn is_switching(self) -> bool {
        matches!(self, Job::Switching { .. })
    }

    /// The task this job performs, or `None` while switching.
    pub fn task(self) -> Option<Task> {
        match self {
            Job::MiningFoo        => Some(Task::MiningFoo),
            Job::MiningBar        => Some(Task::MiningBar),
            Job::AssemblingFoobar => Some(Task::AssemblingFoobar),
            Job::BuyingRobot      => Some(Task::BuyingRobot),
            Job::Switching { .. } => None,
        }
    }

    /// Evaluate the start precondition against `resources` and apply the
    /// start effect if it holds.  Purchases are the exception: they leave
    /// `resources` untouched and are paid for by the caller.
    ///
    /// `population` is the current robot count; purchases never take it past
    /// `config.max_robots`.
    pub fn start<R: RngProvider + ?Sized>(
        self,
        resources:  &mut Resources,
        population: usize,
        config:     &FactoryConfig,
        rng:        &mut R,
    ) -> Start {
        match self {
            Job::MiningFoo => Start::Working {
                duration: Millis(config.mining_foo_ms),
            },
            Job::MiningBar => {
                let (lo, hi) = config.mining_bar_ms;
                Start::Working { duration: Millis(rng.uniform(lo, hi)) }
            }
            Job::AssemblingFoobar => {
                if resources.take_assembly_inputs() {
                    Start::Working { duration: Millis(config.assembly_ms) }
                } else {
                    Start::Blocked
                }
            }
            Job::BuyingRobot => {
                let slots = config.max_robots.saturating_sub(population) as u64;
                let count = resources.affordable_robots(config.robot_price).min(slots);
                if count == 0 {
                    return Start::Blocked;
                }
                Start::Purchase(count as usize)
            }
            Job::Switching { .. } => Start::Working {
                duration: Millis(config.switching_ms),
            },
        }
    }

    /// Apply the completion effect and return the job the robot holds next.
    pub fn complete<R: RngProvider + ?Sized>(
        self,
        resources: &mut Resources,
        config:    &FactoryConfig,
        rng:       &mut R,
    ) -> (Job, Completion) {
        match self {
            Job::MiningFoo => {
                resources.foo += 1;
                (self, Completion::Foo)
            }
            Job::MiningBar => {
                resources.bar += 1;
                (self, Completion::Bar)
            }
            Job::AssemblingFoobar => {
                if rng.unit() <= config.assembly_success_rate {
                    resources.foobar += 1;
                    (self, Completion::Foobar)
                } else {
                    resources.bar += 1;
                    (self, Completion::AssemblyFailed)
                }
            }
            // Purchases resolve at start, so only a seeded working buyer gets here.
            Job::BuyingRobot => (self, Completion::Nothing),
            Job::Switching { target } => (Job::from(target), Completion::Switched(target)),
        }
    }
}
