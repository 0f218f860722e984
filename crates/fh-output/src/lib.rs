//! `fh-output`: mission output writers for the fharvest simulator.
//!
//! | Item                      | Produces                                         |
//! |---------------------------|--------------------------------------------------|
//! | [`CsvWriter`]             | `trajectories.csv`, `step_summaries.csv`         |
//! | [`MissionOutputObserver`] | drives any [`OutputWriter`] from the step loop   |
//! | [`format_trajectories`]   | one `(x, y) (x, y) ...` line per robot           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use fh_output::{CsvWriter, MissionOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = MissionOutputObserver::new(writer);
//! mission.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MissionOutputObserver;
pub use row::{PositionRow, StepSummaryRow};
pub use text::format_trajectories;
pub use writer::OutputWriter;
