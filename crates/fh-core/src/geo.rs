//! Integer grid coordinates and the two distance metrics used by the
//! simulator.
//!
//! The grid is unbounded: any `(i32, i32)` pair is a valid cell.  Distances
//! are computed in 64-bit arithmetic so that cells near the `i32` extremes
//! never overflow.  A cell on the `i32` boundary simply has fewer than four
//! neighbours.

use std::fmt;
use std::str::FromStr;

use crate::FhError;

/// A cell on the unbounded integer grid.
///
/// Equality, ordering, and hashing are structural so points can be used
/// directly as set keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|`, the number of unit moves needed to reach `other`.
    #[inline]
    pub fn taxicab_distance(self, other: GridPoint) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn euclidean_distance(self, other: GridPoint) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// The axis-aligned neighbours in fixed order: left, right, bottom, top.
    /// Callers that pick by index rely on this order.
    ///
    /// Neighbours that would fall outside the `i32` range are skipped, so a
    /// cell on the boundary yields fewer than four.
    #[inline]
    pub fn neighbours(self) -> impl Iterator<Item = GridPoint> {
        let Self { x, y } = self;
        [
            x.checked_sub(1).map(|x| GridPoint::new(x, y)),
            x.checked_add(1).map(|x| GridPoint::new(x, y)),
            y.checked_sub(1).map(|y| GridPoint::new(x, y)),
            y.checked_add(1).map(|y| GridPoint::new(x, y)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(i32, i32)> for GridPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parse `"x,y"` (whitespace around either number is ignored).
impl FromStr for GridPoint {
    type Err = FhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| FhError::Parse(format!("invalid point {s:?}: expected \"x,y\"")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<i32>()
                .map_err(|e| FhError::Parse(format!("invalid coordinate {v:?} in {s:?}: {e}")))
        };
        Ok(GridPoint::new(parse(x)?, parse(y)?))
    }
}
