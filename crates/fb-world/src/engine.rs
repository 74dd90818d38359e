//! The tick engine.
//!
//! # Two-pass tick
//!
//! ```text
//! tick(elapsed):
//!   if population >= max_robots: return unchanged      (done)
//!   frame = clock + max(elapsed, 0)
//!   ① Completion: for each robot in roster order:
//!                    Working and until <= frame → apply completion, go Idle
//!                    (Switching robots take on their target job)
//!   ② Start:      for each robot present before this pass, in roster order:
//!                    Idle → check precondition against current counters;
//!                    on success consume inputs and work until frame + duration
//!                    (BuyingRobot appends new robots instead, pays for each
//!                     one actually added, and stays Idle)
//!   clock = frame
//! ```
//!
//! Counter changes are visible to every later robot in the same pass, so an
//! earlier assembler can take the last foo/bar and leave a later one idle for
//! the tick.  Robots bought in ② wait for the next tick.

use tracing::{debug, info, trace, warn};

use fb_core::{Millis, RngProvider};

use crate::{NoopObserver, Start, World, WorldObserver};

impl World {
    /// Advance the world by `elapsed_ms` of simulated time.
    ///
    /// Negative and NaN deltas count as zero.  A done world is returned
    /// unchanged, clock included.  The same world, delta and RNG draws
    /// always produce the same result.
    pub fn tick<R: RngProvider + ?Sized>(&self, elapsed_ms: f64, rng: &mut R) -> World {
        self.tick_observed(elapsed_ms, rng, &mut NoopObserver)
    }

    /// [`tick`](Self::tick), reporting each event to `observer`.
    pub fn tick_observed<R, O>(&self, elapsed_ms: f64, rng: &mut R, observer: &mut O) -> World
    where
        R: RngProvider + ?Sized,
        O: WorldObserver + ?Sized,
    {
        if self.is_done() {
            trace!(population = self.population(), "world is done; tick ignored");
            return self.clone();
        }

        let frame = self.clock.advance_by(elapsed_ms);
        trace!(clock = %self.clock, %frame, "tick");

        let mut next = self.clone();
        next.completion_pass(frame, rng, observer);
        next.start_pass(frame, rng, observer);
        next.clock = frame;

        if next.is_done() {
            info!(population = next.population(), clock = %frame, "population cap reached");
            observer.on_done(frame);
        }
        next
    }

    // ── Passes ────────────────────────────────────────────────────────────

    fn completion_pass<R, O>(&mut self, frame: Millis, rng: &mut R, observer: &mut O)
    where
        R: RngProvider + ?Sized,
        O: WorldObserver + ?Sized,
    {
        let config = self.config;
        for robot in self.roster.iter_mut() {
            if !robot.finishes_by(frame) {
                continue;
            }
            let (next_job, completion) = robot.job().complete(&mut self.resources, &config, rng);
            robot.finish(next_job);
            debug!(robot = %robot.id(), ?completion, %frame, "job completed");
            observer.on_job_completed(robot.id(), completion);
        }
    }

    fn start_pass<R, O>(&mut self, frame: Millis, rng: &mut R, observer: &mut O)
    where
        R: RngProvider + ?Sized,
        O: WorldObserver + ?Sized,
    {
        let config = self.config;
        // Robots appended below are not visited until the next tick.
        let visit = self.roster.len();

        for position in 0..visit {
            let population = self.roster.len();
            let Some(robot) = self.roster.at_mut(position) else {
                break;
            };
            if !robot.is_idle() {
                continue;
            }
            let (id, job) = (robot.id(), robot.job());

            match job.start(&mut self.resources, population, &config, rng) {
                Start::Working { duration } => {
                    let until = frame + duration;
                    robot.begin(until);
                    debug!(robot = %id, %job, %until, "job started");
                    observer.on_job_started(id, job, until);
                }
                Start::Purchase(count) => {
                    let mut bought = Vec::with_capacity(count);
                    for _ in 0..count {
                        match self.spawn_robot() {
                            Ok(new_id) => bought.push(new_id),
                            Err(e) => {
                                warn!(robot = %id, %e, "could not add purchased robot");
                                break;
                            }
                        }
                    }
                    if bought.is_empty() {
                        continue;
                    }
                    self.resources.pay_for_robots(bought.len() as u64, config.robot_price);
                    debug!(robot = %id, count = bought.len(), resources = %self.resources, "robots purchased");
                    observer.on_robots_purchased(id, &bought);
                }
                Start::Blocked => {}
            }
        }
    }
}
