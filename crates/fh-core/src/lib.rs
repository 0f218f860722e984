//! `fh-core`: foundational types for the `fharvest` coverage simulator.
//!
//! This crate is a dependency of every other `fh-*` crate.  It intentionally
//! has no `fh-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RobotId`                                             |
//! | [`geo`]         | `GridPoint`, taxicab and Euclidean distance           |
//! | [`time`]        | `Step`, `MissionConfig`                               |
//! | [`rng`]         | `SimRng` (injectable, seedable)                       |
//! | [`error`]       | `FhError`, `FhResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FhError, FhResult};
pub use geo::GridPoint;
pub use ids::RobotId;
pub use rng::SimRng;
pub use time::{DEFAULT_MAX_DISTANCE, MissionConfig, Step};
