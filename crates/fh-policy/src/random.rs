//! Uniform random movement.

use fh_core::{GridPoint, RobotId, SimRng};

use crate::{MovePolicy, PolicyContext, valid_neighbours};

/// A [`MovePolicy`] that picks any legal neighbour with equal probability.
///
/// The baseline against which [`HeuristicPolicy`][crate::HeuristicPolicy]
/// is compared.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn decide_move(
        &self,
        robot: RobotId,
        ctx:   &PolicyContext<'_>,
        rng:   &mut SimRng,
    ) -> GridPoint {
        let here = ctx.fleet.position(robot);
        let candidates = valid_neighbours(here, ctx);
        rng.choose(&candidates).copied().unwrap_or(here)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
