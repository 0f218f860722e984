//! Coverage-seeking heuristic movement.
//!
//! # Cascade
//!
//! ```text
//! legal neighbours
//!   │  empty → stay
//!   ▼
//! ① unharvested       keep cells no robot has visited yet
//!   ▼
//! ② farthest from     walk the other robots nearest-first; for each, keep
//!    nearest robots   the candidates farthest from it; stop at one
//!   ▼
//! ③ uniform pick among the survivors
//! ```
//!
//! A filter whose output is empty leaves the candidate set unchanged.
//! Everything before ③ is deterministic for a given fleet and coverage
//! state; only the final pick consumes randomness.

use std::collections::BTreeMap;

use fh_core::{GridPoint, RobotId, SimRng};
use fh_coverage::CoverageAccountant;
use fh_fleet::FleetState;

use crate::{MovePolicy, PolicyContext, valid_neighbours};

/// A [`MovePolicy`] that prefers fresh cells and spreads away from crowding.
#[derive(Copy, Clone, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// The candidate set that survives filters ① and ② for `robot`.
    ///
    /// Empty only when the robot has no legal neighbour.
    pub fn surviving_candidates(&self, robot: RobotId, ctx: &PolicyContext<'_>) -> Vec<GridPoint> {
        let here = ctx.fleet.position(robot);
        let candidates = valid_neighbours(here, ctx);
        if candidates.is_empty() {
            return candidates;
        }

        let fresh = unharvested(&candidates, ctx.coverage);
        let candidates = narrow(candidates, fresh);

        if candidates.len() > 1 {
            let spread = farthest_from_nearest(robot, &candidates, ctx.fleet);
            narrow(candidates, spread)
        } else {
            candidates
        }
    }
}

impl MovePolicy for HeuristicPolicy {
    fn decide_move(
        &self,
        robot: RobotId,
        ctx:   &PolicyContext<'_>,
        rng:   &mut SimRng,
    ) -> GridPoint {
        let candidates = self.surviving_candidates(robot, ctx);
        rng.choose(&candidates)
            .copied()
            .unwrap_or_else(|| ctx.fleet.position(robot))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

/// Candidates no robot has visited yet, in input order.
pub fn unharvested(candidates: &[GridPoint], coverage: &CoverageAccountant) -> Vec<GridPoint> {
    candidates
        .iter()
        .copied()
        .filter(|&c| !coverage.is_harvested(c))
        .collect()
}

/// Lexicographic avoidance of the other robots, nearest first.
///
/// Other robots are ordered by taxicab distance to `robot`'s current
/// position (ties keep robot order).  For each in turn, the working set is
/// reduced to the candidates farthest from that robot; the walk stops as
/// soon as a single candidate remains.  With no other robots the input is
/// returned unchanged.
pub fn farthest_from_nearest(
    robot:      RobotId,
    candidates: &[GridPoint],
    fleet:      &FleetState,
) -> Vec<GridPoint> {
    let here = fleet.position(robot);

    let mut by_distance: BTreeMap<u64, Vec<GridPoint>> = BTreeMap::new();
    for other in fleet.others(robot) {
        by_distance
            .entry(here.taxicab_distance(other))
            .or_default()
            .push(other);
    }

    let mut working = candidates.to_vec();
    for other in by_distance.into_values().flatten() {
        working = farthest_from(&working, other);
        if working.len() == 1 {
            break;
        }
    }
    working
}

/// The candidates at maximal taxicab distance from `other`.
fn farthest_from(candidates: &[GridPoint], other: GridPoint) -> Vec<GridPoint> {
    let Some(max) = candidates.iter().map(|c| c.taxicab_distance(other)).max() else {
        return vec![];
    };
    candidates
        .iter()
        .copied()
        .filter(|c| c.taxicab_distance(other) == max)
        .collect()
}

/// Replace `current` with `narrowed` unless the filter eliminated everything.
#[inline]
fn narrow(current: Vec<GridPoint>, narrowed: Vec<GridPoint>) -> Vec<GridPoint> {
    if narrowed.is_empty() { current } else { narrowed }
}
