//! `FleetState`: the position of every robot at the current moment.
//!
//! # Sequential update
//!
//! The driver overwrites one entry at a time while it walks the fleet in
//! ascending `RobotId` order.  During step `t`, robot `n` therefore sees
//! robots `0..n` already at their step-`t` positions and robots `n+1..` still
//! at their step-`t-1` positions.  Simulation results depend on this order.

use fh_core::{GridPoint, RobotId};

/// Ordered positions of all robots, indexed by `RobotId`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FleetState {
    positions: Vec<GridPoint>,
}

impl FleetState {
    pub fn new(positions: Vec<GridPoint>) -> Self {
        Self { positions }
    }

    /// Number of robots.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Current position of `robot`.
    ///
    /// # Panics
    /// Panics if `robot` is out of range.
    #[inline]
    pub fn position(&self, robot: RobotId) -> GridPoint {
        self.positions[robot.index()]
    }

    #[inline]
    pub fn set_position(&mut self, robot: RobotId, p: GridPoint) {
        self.positions[robot.index()] = p;
    }

    /// All positions in robot order.
    #[inline]
    pub fn positions(&self) -> &[GridPoint] {
        &self.positions
    }

    /// `(RobotId, position)` pairs in robot order.
    pub fn iter(&self) -> impl Iterator<Item = (RobotId, GridPoint)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &p)| (RobotId(i as u32), p))
    }

    /// Positions of every robot except `robot`, in robot order.
    pub fn others(&self, robot: RobotId) -> impl Iterator<Item = GridPoint> + '_ {
        self.iter()
            .filter(move |&(id, _)| id != robot)
            .map(|(_, p)| p)
    }
}
