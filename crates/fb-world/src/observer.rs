//! World observer trait for progress reporting and data collection.

use fb_core::{Millis, RobotId};

use crate::{Completion, Job};

/// Callbacks invoked by [`World::tick_observed`][crate::World::tick_observed]
/// as the tick engine resolves each event.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers see events in the order the
/// engine applies them: every completion of a tick precedes every start.
///
/// # Example: foobar counter
///
/// ```rust,ignore
/// struct FoobarCounter { made: u32, failed: u32 }
///
/// impl WorldObserver for FoobarCounter {
///     fn on_job_completed(&mut self, _robot: RobotId, completion: Completion) {
///         match completion {
///             Completion::Foobar         => self.made += 1,
///             Completion::AssemblyFailed => self.failed += 1,
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// A robot finished its job during the completion pass.
    fn on_job_completed(&mut self, _robot: RobotId, _completion: Completion) {}

    /// A robot started `job` during the start pass and is busy until `until`.
    fn on_job_started(&mut self, _robot: RobotId, _job: Job, _until: Millis) {}

    /// `buyer` paid for new robots; `bought` lists them in roster order.
    fn on_robots_purchased(&mut self, _buyer: RobotId, _bought: &[RobotId]) {}

    /// The tick ending at `clock` brought the population to its cap.
    fn on_done(&mut self, _clock: Millis) {}
}

/// A [`WorldObserver`] that does nothing.  [`World::tick`][crate::World::tick]
/// uses it.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
