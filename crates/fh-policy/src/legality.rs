//! Move legality.
//!
//! A cell is a legal next position when the goal is still reachable from it
//! in the remaining time *and* it is within the cohesion radius of at least
//! one robot.

use fh_core::{GridPoint, MissionConfig};
use fh_fleet::FleetState;

/// Fixed per-mission legality parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MissionRules {
    pub goal:         GridPoint,
    pub max_distance: f64,
}

impl MissionRules {
    pub fn new(goal: GridPoint, max_distance: f64) -> Self {
        Self { goal, max_distance }
    }

    pub fn from_config(config: &MissionConfig) -> Self {
        Self::new(config.goal, config.max_distance)
    }

    /// `true` if `p` is within `max_distance` of any robot in `fleet`.
    ///
    /// The deciding robot is not excluded: a cell within range of the
    /// robot's own current position passes.
    pub fn in_range(&self, p: GridPoint, fleet: &FleetState) -> bool {
        fleet
            .positions()
            .iter()
            .any(|&r| p.euclidean_distance(r) <= self.max_distance)
    }

    /// `true` if a robot may stand on `p` with `time_left` steps remaining.
    pub fn legal_move(&self, p: GridPoint, time_left: u64, fleet: &FleetState) -> bool {
        p.taxicab_distance(self.goal) < time_left && self.in_range(p, fleet)
    }
}
