//! Fluent builder for constructing a [`World`].

use fb_core::{FactoryConfig, Millis, RobotId};

use crate::{Resources, Robot, Roster, Task, World, WorldResult};

/// Fluent builder for [`World`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                          |
/// |------------------|--------------------------------------------------|
/// | `.config(c)`     | `FactoryConfig::default()`                       |
/// | `.robots(v)`     | `config.initial_robots` idle `MiningFoo` robots  |
/// | `.resources(r)`  | All counters zero                                |
///
/// A supplied robot list is used verbatim: order, jobs and activities are
/// kept, and its size may lie outside the usual population bounds (a list
/// at or above `max_robots` yields a world that is already done).
///
/// # Example
///
/// ```rust
/// use fb_core::RobotId;
/// use fb_world::{Robot, Task, World};
///
/// let world = World::builder()
///     .robots(vec![
///         Robot::new(RobotId(0), Task::MiningFoo),
///         Robot::new(RobotId(1), Task::AssemblingFoobar),
///     ])
///     .build()
///     .unwrap();
/// assert_eq!(world.population(), 2);
/// ```
#[derive(Default)]
pub struct WorldBuilder {
    config:    FactoryConfig,
    robots:    Option<Vec<Robot>>,
    resources: Resources,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: FactoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the roster with `robots`, in this order.
    pub fn robots(mut self, robots: Vec<Robot>) -> Self {
        self.robots = Some(robots);
        self
    }

    /// Seed the starting resource counters.
    pub fn resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    /// Validate the config and robot ids and return the world at clock zero.
    pub fn build(self) -> WorldResult<World> {
        self.config.validate()?;

        let roster = match self.robots {
            Some(robots) => Roster::from_robots(robots)?,
            None => default_roster(self.config.initial_robots),
        };

        let next_id = roster.max_id().map_or(RobotId(0), RobotId::next);

        Ok(World {
            clock: Millis::ZERO,
            resources: self.resources,
            roster,
            config: self.config,
            next_id,
        })
    }

    /// Default world for an already-valid config.
    pub(crate) fn default_world(config: FactoryConfig) -> World {
        let roster = default_roster(config.initial_robots);
        World {
            clock: Millis::ZERO,
            resources: Resources::default(),
            next_id: RobotId(roster.len() as u32),
            roster,
            config,
        }
    }
}

fn default_roster(count: usize) -> Roster {
    let robots = (0..count as u32).map(|i| Robot::new(RobotId(i), Task::MiningFoo));
    let mut roster = Roster::new();
    for robot in robots {
        // Sequential ids cannot collide.
        let _ = roster.push(robot);
    }
    roster
}
