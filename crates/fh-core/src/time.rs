//! Simulation time and mission configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Step` counter.  A mission of `steps`
//! total steps stores positions for steps `0..steps`; step 0 holds the
//! initial positions and steps `1..steps` are simulated.  At step `t` a robot
//! has `steps - t` moves left in which it must still be able to reach the
//! goal.

use std::fmt;

use crate::{FhError, FhResult, GridPoint};

/// Fleet-cohesion radius of the reference configuration.
pub const DEFAULT_MAX_DISTANCE: f64 = 200.0;

// ── Step ──────────────────────────────────────────────────────────────────────

/// An absolute simulation step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Steps remaining before a mission of `total_steps` ends.  Saturates at
    /// zero past the end.
    #[inline]
    pub fn time_left(self, total_steps: u64) -> u64 {
        total_steps.saturating_sub(self.0)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── MissionConfig ─────────────────────────────────────────────────────────────

/// Per-mission parameters that are not implied by the trajectory store.
///
/// The step count and fleet size come from the store's shape; everything
/// else lives here.  Typically loaded from a JSON file by the driver binary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MissionConfig {
    /// Shared destination.  Every robot must be able to reach it (in taxicab
    /// steps) before time runs out.
    pub goal: GridPoint,

    /// A cell is in range of the fleet if it is within this Euclidean
    /// distance of at least one robot.
    pub max_distance: f64,

    /// RNG seed.  `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Emit an output snapshot every N steps.  0 disables snapshots.
    pub output_interval_steps: u64,
}

impl MissionConfig {
    pub fn new(goal: GridPoint) -> Self {
        Self { goal, ..Self::default() }
    }

    /// Reject a cohesion radius that is negative or not finite.
    pub fn validate(&self) -> FhResult<()> {
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            return Err(FhError::Config(format!(
                "max_distance must be a finite non-negative number, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            goal:                  GridPoint::default(),
            max_distance:          DEFAULT_MAX_DISTANCE,
            seed:                  None,
            output_interval_steps: 1,
        }
    }
}
