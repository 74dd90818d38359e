//! `fb-world`: robots, jobs, and the tick engine for the `foobartory`
//! simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`job`]         | `Task`, `Job`, start/completion effects                   |
//! | [`robot`]       | `Robot`, `Activity`                                       |
//! | [`roster`]      | `Roster` (insertion-ordered robot collection)             |
//! | [`resources`]   | `Resources` (foo / bar / foobar counters)                 |
//! | [`world`]       | `World` value, `change_job`, accessors                    |
//! | [`engine`]      | `World::tick`: completion pass then start pass            |
//! | [`snapshot`]    | `Snapshot<'a>` read-only projection for front ends        |
//! | [`observer`]    | `WorldObserver` trait, `NoopObserver`                     |
//! | [`builder`]     | `WorldBuilder` (fluent construction + validation)         |
//! | [`error`]       | `WorldError`, `WorldResult<T>`                            |
//!
//! # Quick-start
//!
//! ```rust
//! use fb_core::SimRng;
//! use fb_world::{Task, World};
//!
//! let mut rng = SimRng::new(42);
//! let world = World::default();
//! let first = world.robots()[0].id();
//!
//! let world = world.change_job(first, Task::MiningBar);
//! let world = world.tick(100.0, &mut rng);
//! assert!(!world.snapshot().is_done);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod job;
pub mod observer;
pub mod resources;
pub mod robot;
pub mod roster;
pub mod snapshot;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{WorldError, WorldResult};
pub use job::{Completion, Job, Start, Task};
pub use observer::{NoopObserver, WorldObserver};
pub use resources::Resources;
pub use robot::{Activity, Robot};
pub use roster::Roster;
pub use snapshot::Snapshot;
pub use world::World;
