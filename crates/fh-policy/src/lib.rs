//! `fh-policy`: how a robot picks its next cell.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                        |
//! |-----------------|-----------------------------------------------------------------|
//! | [`legality`]    | `MissionRules`: goal reachability + fleet cohesion predicate    |
//! | [`candidates`]  | `valid_neighbours`: legal axis neighbours of a robot            |
//! | [`context`]     | `PolicyContext<'a>`: read-only view handed to every decision    |
//! | [`model`]       | `MovePolicy` trait                                              |
//! | [`random`]      | `RandomPolicy`                                                  |
//! | [`heuristic`]   | `HeuristicPolicy` and its narrowing filters                     |
//! | [`kind`]        | `PolicyKind` selector, `Policy` closed dispatch enum            |
//! | [`error`]       | `PolicyError`, `PolicyResult<T>`                                |
//!
//! # Design notes
//!
//! A policy only *decides*.  The driver in `fh-sim` records the move in the
//! coverage accountant and updates the fleet immediately after each
//! decision, before the next robot decides, so every decision sees the
//! effects of all earlier robots in the same step.

pub mod candidates;
pub mod context;
pub mod error;
pub mod heuristic;
pub mod kind;
pub mod legality;
pub mod model;
pub mod random;


pub use candidates::valid_neighbours;
pub use context::PolicyContext;
pub use error::{PolicyError, PolicyResult};
pub use heuristic::HeuristicPolicy;
pub use kind::{Policy, PolicyKind};
pub use legality::MissionRules;
pub use model::MovePolicy;
pub use random::RandomPolicy;
