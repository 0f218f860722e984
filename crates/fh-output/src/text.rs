//! Plain-text trajectory listing.

use std::fmt::Write;

use fh_core::{RobotId, Step};
use fh_fleet::TrajectoryStore;

/// Render every robot's path, one line per robot, steps in order:
///
/// ```text
/// (0, 0) (1, 0) (1, 1)
/// (5, 5) (5, 4) (5, 4)
/// ```
pub fn format_trajectories(store: &TrajectoryStore) -> String {
    let mut out = String::new();
    for n in 0..store.robots() as u32 {
        for t in 0..store.steps() as u64 {
            if t > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{}", store.position(Step(t), RobotId(n)));
        }
        out.push('\n');
    }
    out
}
