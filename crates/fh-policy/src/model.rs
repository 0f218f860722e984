//! The `MovePolicy` trait: the extension point for movement strategies.

use fh_core::{GridPoint, RobotId, SimRng};

use crate::PolicyContext;

/// Pluggable move selection.
///
/// Called once per robot per step.  Must return either the robot's current
/// position (stay) or one of its axis neighbours; the driver records the
/// result, so implementations never mutate mission state themselves.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysStay;
///
/// impl MovePolicy for AlwaysStay {
///     fn decide_move(&self, robot: RobotId, ctx: &PolicyContext<'_>, _rng: &mut SimRng) -> GridPoint {
///         ctx.fleet.position(robot)
///     }
/// }
/// ```
pub trait MovePolicy {
    fn decide_move(
        &self,
        robot: RobotId,
        ctx:   &PolicyContext<'_>,
        rng:   &mut SimRng,
    ) -> GridPoint;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}
