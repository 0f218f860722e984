//! `fh-fleet`: robot positions for the `fharvest` coverage simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`fleet`]       | `FleetState`: every robot's position right now            |
//! | [`trajectory`]  | `TrajectoryStore`: dense `(step, robot, axis)` history    |
//! | [`loader`]      | Initial-position file parsing                             |
//! | [`error`]       | `FleetError`, `FleetResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Axis`.               |

pub mod error;
pub mod fleet;
pub mod loader;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use error::{FleetError, FleetResult};
pub use fleet::FleetState;
pub use loader::{load_positions_file, load_positions_reader};
pub use trajectory::{Axis, TrajectoryStore};
