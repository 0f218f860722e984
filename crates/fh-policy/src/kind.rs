//! Policy selection: `PolicyKind` names a strategy, `Policy` runs it.

use std::fmt;
use std::str::FromStr;

use fh_core::{GridPoint, RobotId, SimRng};

use crate::{HeuristicPolicy, MovePolicy, PolicyContext, PolicyError, RandomPolicy};

/// The recognised policy names.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PolicyKind {
    #[default]
    Random,
    Heuristic,
}

impl PolicyKind {
    /// Lenient lookup: unknown names fall back to [`PolicyKind::Random`]
    /// with a warning.
    ///
    /// Returns the fallback error alongside so callers can surface it.
    pub fn resolve(name: &str) -> (PolicyKind, Option<PolicyError>) {
        match name.parse::<PolicyKind>() {
            Ok(kind) => (kind, None),
            Err(e) => {
                tracing::warn!(policy = name, "unknown policy, falling back to random");
                (PolicyKind::Random, Some(e))
            }
        }
    }
}

/// Strict lookup (case-insensitive, surrounding whitespace ignored).
impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(PolicyKind::Random),
            "heuristic" => Ok(PolicyKind::Heuristic),
            _ => Err(PolicyError::UnknownPolicy(s.to_owned())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolicyKind::Random => "random",
            PolicyKind::Heuristic => "heuristic",
        })
    }
}

// ── Policy ────────────────────────────────────────────────────────────────────

/// Closed set of built-in policies, chosen once per mission.
#[derive(Copy, Clone, Debug)]
pub enum Policy {
    Random(RandomPolicy),
    Heuristic(HeuristicPolicy),
}

impl Policy {
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Random(_) => PolicyKind::Random,
            Policy::Heuristic(_) => PolicyKind::Heuristic,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Random(RandomPolicy)
    }
}

impl From<PolicyKind> for Policy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Random => Policy::Random(RandomPolicy),
            PolicyKind::Heuristic => Policy::Heuristic(HeuristicPolicy),
        }
    }
}

impl MovePolicy for Policy {
    #[inline]
    fn decide_move(
        &self,
        robot: RobotId,
        ctx:   &PolicyContext<'_>,
        rng:   &mut SimRng,
    ) -> GridPoint {
        match self {
            Policy::Random(p) => p.decide_move(robot, ctx, rng),
            Policy::Heuristic(p) => p.decide_move(robot, ctx, rng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Policy::Random(p) => p.name(),
            Policy::Heuristic(p) => p.name(),
        }
    }
}
