//! headless: drive a foobartory world without a UI.
//!
//! Ticks the world every 100 simulated milliseconds, lets a simple planner
//! reassign robots, and prints each purchase until the population cap
//! is reached or the time limit runs out.
//!
//! ```text
//! headless [--seed N] [--config factory.json] [--limit-secs S]
//! RUST_LOG=fb_world=debug headless        # per-job tracing
//! ```

mod planner;


use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fb_core::{FactoryConfig, Millis, RobotId, SimRng};
use fb_world::{Completion, World, WorldObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SEED:       u64 = 42;
const TICK_MS:            f64 = 100.0;
const DEFAULT_LIMIT_SECS: f64 = 3_600.0;

// ── Command line ──────────────────────────────────────────────────────────────

struct Args {
    seed:       u64,
    config:     Option<PathBuf>,
    limit_secs: f64,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { seed: DEFAULT_SEED, config: None, limit_secs: DEFAULT_LIMIT_SECS };
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--seed" => args.seed = value()?.parse().context("--seed must be an integer")?,
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--limit-secs" => {
                args.limit_secs = value()?.parse().context("--limit-secs must be a number")?
            }
            other => bail!("unknown argument {other:?}"),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> Result<FactoryConfig> {
    let Some(path) = path else {
        return Ok(FactoryConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    foo:        u64,
    bar:        u64,
    foobar:     u64,
    failures:   u64,
    switches:   u64,
    purchases:  Vec<(RobotId, usize)>,
}

impl WorldObserver for Tally {
    fn on_job_completed(&mut self, _robot: RobotId, completion: Completion) {
        match completion {
            Completion::Foo            => self.foo += 1,
            Completion::Bar            => self.bar += 1,
            Completion::Foobar         => self.foobar += 1,
            Completion::AssemblyFailed => self.failures += 1,
            Completion::Switched(_)    => self.switches += 1,
            Completion::Nothing        => {}
        }
    }

    fn on_robots_purchased(&mut self, buyer: RobotId, bought: &[RobotId]) {
        self.purchases.push((buyer, bought.len()));
    }

    fn on_done(&mut self, clock: Millis) {
        info!(%clock, "factory complete");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = parse_args()?;
    let config = load_config(args.config.as_ref())?;

    println!("=== headless: foobartory ===");
    println!(
        "Seed: {}  |  Tick: {TICK_MS} ms  |  Limit: {} s  |  Cap: {} robots",
        args.seed, args.limit_secs, config.max_robots
    );
    println!();

    let mut world = World::new(config)?;
    let mut rng = SimRng::new(args.seed);
    let mut tally = Tally::default();
    let limit = Millis(args.limit_secs * 1_000.0);

    let t0 = Instant::now();
    let mut frames: u64 = 0;
    while !world.is_done() && world.clock() < limit {
        world = planner::apply(world);

        let before = tally.purchases.len();
        world = world.tick_observed(TICK_MS, &mut rng, &mut tally);
        frames += 1;

        for &(buyer, count) in &tally.purchases[before..] {
            println!(
                "{:>8.1} s  {buyer} bought {count} robot(s) → {} robots  ({})",
                world.clock().as_secs_f64(),
                world.population(),
                world.resources(),
            );
        }
    }
    let elapsed = t0.elapsed();

    let snapshot = world.snapshot();
    println!();
    println!(
        "{} after {:.1} simulated s ({frames} frames, {:.3} s wall)",
        if snapshot.is_done { "Done" } else { "Stopped" },
        snapshot.clock.as_secs_f64(),
        elapsed.as_secs_f64(),
    );
    println!(
        "  mined: {} foo, {} bar  |  assembled: {} foobar ({} failed)  |  switches: {}",
        tally.foo, tally.bar, tally.foobar, tally.failures, tally.switches
    );
    println!("  stock: {}", snapshot.resources);
    println!();

    println!("{:<4} {:<14} {:<26} {}", "#", "Robot", "Job", "Activity");
    println!("{}", "-".repeat(64));
    for (i, robot) in snapshot.robots.iter().enumerate() {
        println!(
            "{:<4} {:<14} {:<26} {}",
            i + 1,
            robot.id().to_string(),
            robot.job().to_string(),
            robot.activity(),
        );
    }

    Ok(())
}
