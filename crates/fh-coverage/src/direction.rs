//! Move direction and edge-set corners.

use std::fmt;

use fh_core::GridPoint;

/// Direction of a single robot move.
///
/// `Up` is `y + 1` and `Down` is `y - 1`.  Anything other than a unit step
/// along exactly one axis (including staying in place) is `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    None,
}

impl Direction {
    pub fn between(start: GridPoint, end: GridPoint) -> Direction {
        let dx = i64::from(end.x) - i64::from(start.x);
        let dy = i64::from(end.y) - i64::from(start.y);
        match (dx, dy) {
            (-1, 0) => Direction::Left,
            (1, 0)  => Direction::Right,
            (0, 1)  => Direction::Up,
            (0, -1) => Direction::Down,
            _       => Direction::None,
        }
    }

    /// Edge sets credited with the start cell and with the end cell.
    ///
    /// The start cell gets the two corners on the side it is leaving
    /// towards; the end cell gets the two corners facing back at the start.
    pub fn swept_corners(self) -> Option<([EdgeCorner; 2], [EdgeCorner; 2])> {
        use EdgeCorner::*;
        match self {
            Direction::Left  => Some(([LowerLeft, UpperLeft], [LowerRight, UpperRight])),
            Direction::Right => Some(([LowerRight, UpperRight], [LowerLeft, UpperLeft])),
            Direction::Up    => Some(([UpperLeft, UpperRight], [LowerLeft, LowerRight])),
            Direction::Down  => Some(([LowerLeft, LowerRight], [UpperLeft, UpperRight])),
            Direction::None  => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Left  => "left",
            Direction::Right => "right",
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::None  => "none",
        };
        f.write_str(s)
    }
}

/// One of the four corner slivers of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeCorner {
    UpperLeft  = 0,
    UpperRight = 1,
    LowerLeft  = 2,
    LowerRight = 3,
}

impl EdgeCorner {
    pub const ALL: [EdgeCorner; 4] = [
        EdgeCorner::UpperLeft,
        EdgeCorner::UpperRight,
        EdgeCorner::LowerLeft,
        EdgeCorner::LowerRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}
