//! Read-only projection of a world for the presentation layer.

use fb_core::{Millis, RobotId};

use crate::{Resources, Robot};

/// Everything a front end needs to render one frame.
///
/// Borrows the robots straight out of the world; no allocation happens.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    /// Robots in roster order.
    pub robots: &'a [Robot],

    pub resources: Resources,

    /// Simulated time the world has been advanced to.
    pub clock: Millis,

    /// `true` once the population cap is reached.
    pub is_done: bool,
}

impl<'a> Snapshot<'a> {
    #[inline]
    pub fn population(&self) -> usize {
        self.robots.len()
    }

    pub fn robot(&self, id: RobotId) -> Option<&'a Robot> {
        self.robots.iter().find(|r| r.id() == id)
    }
}
