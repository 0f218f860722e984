//! Move-candidate generation.

use fh_core::GridPoint;

use crate::PolicyContext;

/// The legal axis neighbours of `here`, in left, right, bottom, top order.
///
/// Staying in place is never a candidate; a robot with no candidates stays
/// put.  Legality is checked against `ctx.fleet` as it stands, including any
/// moves already made this step.
pub fn valid_neighbours(here: GridPoint, ctx: &PolicyContext<'_>) -> Vec<GridPoint> {
    here.neighbours()
        .filter(|&n| ctx.rules.legal_move(n, ctx.time_left, ctx.fleet))
        .collect()
}
