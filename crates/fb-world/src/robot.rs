//! The robot: one worker with one job and one activity at a time.

use std::fmt;

use fb_core::{Millis, RobotId};

use crate::{Job, Task};

/// What a robot is doing right now.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activity {
    /// Waiting for the next start pass.
    #[default]
    Idle,
    /// Busy with the current job until the clock reaches `until`.
    Working { until: Millis },
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Idle => f.write_str("idle"),
            Activity::Working { until } => write!(f, "working until {until}"),
        }
    }
}

/// A worker unit.
///
/// The id is fixed at construction.  Job and activity change only through
/// the world (`tick` and `change_job`), so the fields are read through
/// accessors.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    id:       RobotId,
    job:      Job,
    activity: Activity,
}

impl Robot {
    /// An idle robot assigned to `task`.
    pub fn new(id: RobotId, task: Task) -> Self {
        Self::with_job(id, Job::from(task))
    }

    /// An idle robot holding any job, `Switching` included.
    pub fn with_job(id: RobotId, job: Job) -> Self {
        Self { id, job, activity: Activity::Idle }
    }

    /// A robot already busy with `job` until `until`.
    ///
    /// Lets scenarios and tests seed a world mid-flight.
    pub fn working(id: RobotId, job: Job, until: Millis) -> Self {
        Self { id, job, activity: Activity::Working { until } }
    }

    #[inline]
    pub fn id(&self) -> RobotId {
        self.id
    }

    #[inline]
    pub fn job(&self) -> Job {
        self.job
    }

    #[inline]
    pub fn activity(&self) -> Activity {
        self.activity
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.activity == Activity::Idle
    }

    /// `true` if the robot is working and its job ends at or before `frame`.
    #[inline]
    pub fn finishes_by(&self, frame: Millis) -> bool {
        matches!(self.activity, Activity::Working { until } if until <= frame)
    }

    // ── Transitions (driven by the world) ─────────────────────────────────

    pub(crate) fn begin(&mut self, until: Millis) {
        self.activity = Activity::Working { until };
    }

    pub(crate) fn finish(&mut self, next: Job) {
        self.job = next;
        self.activity = Activity::Idle;
    }

    /// Drop whatever the robot was doing and start switching to `target`.
    pub(crate) fn switch_to(&mut self, target: Task) {
        self.job = Job::Switching { target };
        self.activity = Activity::Idle;
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.id, self.job, self.activity)
    }
}
