//! `Roster`: the insertion-ordered robot collection.
//!
//! # Why order matters
//!
//! Both tick passes walk the robots front to back, and the start pass lets
//! earlier robots claim shared foo/bar before later ones are considered.
//! Roster order therefore decides who wins resource contention, and it must
//! be exactly the order robots were seeded or bought in.
//!
//! Storage is a `Vec<Robot>` for iteration plus an `FxHashMap` from id to
//! position for O(1) lookup.  Robots are never removed, so positions never
//! shift and the index never needs rebuilding.

use rustc_hash::FxHashMap;

use fb_core::RobotId;

use crate::{Robot, WorldError, WorldResult};

#[derive(Clone, Debug, Default)]
pub struct Roster {
    robots: Vec<Robot>,
    index:  FxHashMap<RobotId, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from `robots`, keeping their order.
    ///
    /// Fails on the first repeated id.
    pub fn from_robots(robots: Vec<Robot>) -> WorldResult<Self> {
        let mut roster = Self {
            robots: Vec::with_capacity(robots.len()),
            index:  FxHashMap::default(),
        };
        for robot in robots {
            roster.push(robot)?;
        }
        Ok(roster)
    }

    /// Append `robot` at the end of the roster.
    pub fn push(&mut self, robot: Robot) -> WorldResult<()> {
        if self.index.contains_key(&robot.id()) {
            return Err(WorldError::DuplicateRobot(robot.id()));
        }
        self.index.insert(robot.id(), self.robots.len());
        self.robots.push(robot);
        Ok(())
    }

    pub fn get(&self, id: RobotId) -> Option<&Robot> {
        self.index.get(&id).map(|&i| &self.robots[i])
    }

    pub fn contains(&self, id: RobotId) -> bool {
        self.index.contains_key(&id)
    }

    /// All robots in roster order.
    #[inline]
    pub fn as_slice(&self) -> &[Robot] {
        &self.robots
    }

    pub fn iter(&self) -> impl Iterator<Item = &Robot> + '_ {
        self.robots.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.robots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    /// The largest id present, if any.
    pub fn max_id(&self) -> Option<RobotId> {
        self.index.keys().copied().max()
    }

    // ── Mutation (world only) ─────────────────────────────────────────────

    pub(crate) fn get_mut(&mut self, id: RobotId) -> Option<&mut Robot> {
        let i = *self.index.get(&id)?;
        self.robots.get_mut(i)
    }

    pub(crate) fn at_mut(&mut self, position: usize) -> Option<&mut Robot> {
        self.robots.get_mut(position)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Robot> + '_ {
        self.robots.iter_mut()
    }
}

/// Two rosters are equal when they hold the same robots in the same order;
/// the index is derived data.
impl PartialEq for Roster {
    fn eq(&self, other: &Self) -> bool {
        self.robots == other.robots
    }
}
