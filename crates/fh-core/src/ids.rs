//! Robot identifiers.

use std::fmt;

/// Index of a robot in the fleet.  Robots are updated in ascending
/// `RobotId` order within every step.
///
/// The inner integer is `pub`; prefer [`index`][Self::index] when slicing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotId(pub u32);

impl RobotId {
    /// Position in fleet-ordered slices.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RobotId({})", self.0)
    }
}

impl From<RobotId> for usize {
    #[inline(always)]
    fn from(id: RobotId) -> usize {
        id.index()
    }
}

impl TryFrom<usize> for RobotId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<RobotId, Self::Error> {
        u32::try_from(n).map(RobotId)
    }
}
