//! `fb-core`: foundational types for the `foobartory` simulation.
//!
//! This crate is a dependency of every other `fb-*` crate.  It has no `fb-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RobotId`                                             |
//! | [`time`]        | `Millis` (simulated milliseconds)                     |
//! | [`rng`]         | `RngProvider` trait, `SimRng`, `ScriptedRng`          |
//! | [`config`]      | `FactoryConfig`, `RobotPrice`                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FactoryConfig, RobotPrice};
pub use error::{CoreError, CoreResult};
pub use ids::RobotId;
pub use rng::{RngProvider, ScriptedRng, SimRng};
pub use time::Millis;
