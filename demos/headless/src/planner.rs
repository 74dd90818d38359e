//! A fixed-role job planner standing in for the player.
//!
//! Roles by roster position:
//!
//! | Position | Role                                                     |
//! |----------|----------------------------------------------------------|
//! | 0        | foo miner                                                |
//! | 1        | bar miner once there are 3+ robots, otherwise the flex   |
//! | 2        | the flex robot once there are 3+ robots                  |
//! | 3..      | cycle of foo, bar, assemble, foo                         |
//!
//! The flex robot moves between mining bar, assembling, and buying as stock
//! allows.  Miners restart in the same tick they finish, so they are almost
//! never idle; roles are decided from the current job and the stock instead.
//! An assembly in progress is only abandoned for a purchase, and robots that
//! are already switching are left alone.

use fb_core::{FactoryConfig, RobotId};
use fb_world::{Job, Resources, Robot, Snapshot, Task, World};

const TAIL_ROLES: [Task; 4] = [
    Task::MiningFoo,
    Task::MiningBar,
    Task::AssemblingFoobar,
    Task::MiningFoo,
];

/// Bars to stockpile before a lone flex robot starts assembling.
const BAR_BATCH: u64 = 4;

/// Job-change requests for this frame.
pub fn plan(snapshot: &Snapshot<'_>, config: &FactoryConfig) -> Vec<(RobotId, Task)> {
    let population = snapshot.population();
    let can_buy = snapshot.resources.affordable_robots(config.robot_price) >= 1;

    snapshot
        .robots
        .iter()
        .enumerate()
        .filter(|(_, robot)| !robot.job().is_switching())
        .filter_map(|(position, robot)| {
            let wanted = match (position, population) {
                (0, _) => Task::MiningFoo,
                (1, n) if n < 3 => flex(robot, snapshot.resources, can_buy, true),
                (1, _) => Task::MiningBar,
                (2, _) => flex(robot, snapshot.resources, can_buy, false),
                (p, _) => TAIL_ROLES[(p - 3) % TAIL_ROLES.len()],
            };
            (robot.job() != Job::from(wanted)).then_some((robot.id(), wanted))
        })
        .collect()
}

/// Apply this frame's plan to `world`.
pub fn apply(world: World) -> World {
    let requests = plan(&world.snapshot(), world.config());
    requests
        .into_iter()
        .fold(world, |w, (id, task)| w.change_job(id, task))
}

/// The flex role.  `own_bars` is set while no dedicated bar miner exists.
fn flex(robot: &Robot, stock: Resources, can_buy: bool, own_bars: bool) -> Task {
    if can_buy {
        return Task::BuyingRobot;
    }
    if !own_bars {
        return Task::AssemblingFoobar;
    }
    match robot.job() {
        Job::MiningBar if stock.bar >= BAR_BATCH => Task::AssemblingFoobar,
        Job::MiningBar => Task::MiningBar,
        // Blocked for lack of bars: go and mine some.
        Job::AssemblingFoobar if robot.is_idle() && stock.bar == 0 => Task::MiningBar,
        Job::AssemblingFoobar => Task::AssemblingFoobar,
        Job::BuyingRobot if stock.bar > 0 => Task::AssemblingFoobar,
        _ => Task::MiningBar,
    }
}
