//! Read-only mission state passed to every policy decision.

use fh_coverage::CoverageAccountant;
use fh_fleet::FleetState;

use crate::MissionRules;

/// A read-only view of the mission at the moment one robot decides.
///
/// Built by `fh-sim` once per robot per step.  `fleet` already reflects the
/// moves of lower-indexed robots in the current step.
pub struct PolicyContext<'a> {
    /// Steps remaining, `total_steps - t`.
    pub time_left: u64,

    pub rules: &'a MissionRules,

    /// Every robot's current position.
    pub fleet: &'a FleetState,

    /// Cells and edges covered so far.
    pub coverage: &'a CoverageAccountant,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(
        time_left: u64,
        rules:     &'a MissionRules,
        fleet:     &'a FleetState,
        coverage:  &'a CoverageAccountant,
    ) -> Self {
        Self { time_left, rules, fleet, coverage }
    }
}
