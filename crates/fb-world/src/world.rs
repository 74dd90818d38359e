//! The `World` value and its non-tick operations.

use tracing::debug;

use fb_core::{FactoryConfig, Millis, RobotId};

use crate::{Job, Resources, Robot, Roster, Snapshot, Task, WorldBuilder, WorldError, WorldResult};

/// The complete simulation state.
///
/// A `World` is a plain value.  [`tick`](World::tick) and
/// [`change_job`](World::change_job) take `&self` and return the next world,
/// so callers can keep, compare, or discard states freely and never observe
/// a half-applied update.
///
/// Create via [`World::default`], [`World::new`], or [`World::builder`].
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    /// Simulated time consumed so far.  Only moves forward.
    pub(crate) clock: Millis,

    pub(crate) resources: Resources,

    /// Robots in insertion order.  See [`Roster`] for why order matters.
    pub(crate) roster: Roster,

    pub(crate) config: FactoryConfig,

    /// Id handed to the next purchased robot.
    pub(crate) next_id: RobotId,
}

impl Default for World {
    /// A world with the reference balance and its two starting robots.
    fn default() -> Self {
        WorldBuilder::default_world(FactoryConfig::default())
    }
}

impl World {
    /// A world with `config.initial_robots` idle foo miners.
    pub fn new(config: FactoryConfig) -> WorldResult<World> {
        WorldBuilder::new().config(config).build()
    }

    pub fn builder() -> WorldBuilder {
        WorldBuilder::new()
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn clock(&self) -> Millis {
        self.clock
    }

    #[inline]
    pub fn resources(&self) -> Resources {
        self.resources
    }

    #[inline]
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Robots in roster order.
    #[inline]
    pub fn robots(&self) -> &[Robot] {
        self.roster.as_slice()
    }

    pub fn robot(&self, id: RobotId) -> Option<&Robot> {
        self.roster.get(id)
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.roster.len()
    }

    /// `true` once the population has reached `config.max_robots`.  A done
    /// world ignores every further tick.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.roster.len() >= self.config.max_robots
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            robots:    self.roster.as_slice(),
            resources: self.resources,
            clock:     self.clock,
            is_done:   self.is_done(),
        }
    }

    // ── Job changes ───────────────────────────────────────────────────────

    /// Reassign robot `id` to `task`.
    ///
    /// The robot drops whatever it was doing, with no refund and no credit
    /// for partial work, and enters `Switching { target: task }` as idle.  It
    /// starts switching on the next tick.
    ///
    /// Unknown ids and requests for the job the robot already holds return
    /// an unchanged copy.
    pub fn change_job(&self, id: RobotId, task: Task) -> World {
        let mut next = self.clone();
        if let Some(robot) = next.roster.get_mut(id) {
            if robot.job() != Job::from(task) {
                debug!(robot = %id, from = %robot.job(), to = %task, "job change requested");
                robot.switch_to(task);
            }
        }
        next
    }

    /// Like [`change_job`](Self::change_job) but reports an unknown id.
    pub fn try_change_job(&self, id: RobotId, task: Task) -> WorldResult<World> {
        if !self.roster.contains(id) {
            return Err(WorldError::RobotNotFound(id));
        }
        Ok(self.change_job(id, task))
    }

    // ── Population growth ─────────────────────────────────────────────────

    /// Append a fresh idle foo miner and return its id.
    pub(crate) fn spawn_robot(&mut self) -> WorldResult<RobotId> {
        let id = self.next_id;
        self.roster.push(Robot::new(id, Task::MiningFoo))?;
        self.next_id = id.next();
        Ok(id)
    }
}
