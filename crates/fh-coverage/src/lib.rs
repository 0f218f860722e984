//! `fh-coverage`: covered-area bookkeeping.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`direction`]   | `Direction` of a unit move, `EdgeCorner`                  |
//! | [`accountant`]  | `CoverageAccountant`: visited cells + four edge sets      |
//!
//! # Footprint model
//!
//! Each robot carries a circular sensor whose diameter equals one cell.  A
//! visited cell is credited with the inscribed circle (`π/4`).  When a robot
//! moves between two adjacent cells the sensor also sweeps the corner
//! slivers between the two circles; each such sliver is `(4-π)/16` and is
//! tracked per cell and per corner, so a sliver swept twice is counted once.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Use `rustc-hash` `FxHashSet` for the coverage sets.     |

pub mod accountant;
pub mod direction;


pub use accountant::{CIRCLE_AREA, CoverageAccountant, EDGE_AREA};
pub use direction::{Direction, EdgeCorner};
