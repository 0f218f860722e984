//! `TrajectoryStore`: every robot's position at every step.
//!
//! # Layout
//!
//! A single flat `Vec<i32>` of length `steps * robots * 2`, indexed as
//!
//! ```text
//! ((step * robots) + robot) * 2 + axis
//! ```
//!
//! so one step's fleet snapshot is contiguous.  Step 0 holds the initial
//! positions; the driver writes steps `1..steps` in order and never reads
//! ahead of the step it is simulating.

use fh_core::{GridPoint, RobotId, Step};

use crate::{FleetError, FleetResult};

/// Coordinate axis within a stored position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X = 0,
    Y = 1,
}

/// Dense `(steps, robots, 2)` trajectory storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrajectoryStore {
    steps:  usize,
    robots: usize,
    data:   Vec<i32>,
}

impl TrajectoryStore {
    /// Allocate a zero-filled store.
    pub fn new(steps: usize, robots: usize) -> Self {
        Self {
            steps,
            robots,
            data: vec![0; steps * robots * 2],
        }
    }

    /// Allocate a store of `steps` steps and write `initial` at step 0.
    ///
    /// The fleet size is `initial.len()`.  With `steps == 0` there is no
    /// step 0 to write and the store is empty.
    pub fn from_initial_positions(steps: usize, initial: &[GridPoint]) -> Self {
        let mut store = Self::new(steps, initial.len());
        if steps > 0 {
            for (i, &p) in initial.iter().enumerate() {
                store.set_position(Step::ZERO, RobotId(i as u32), p);
            }
        }
        store
    }

    /// Overwrite step 0 with `initial`.
    ///
    /// # Errors
    ///
    /// [`FleetError::RobotCountMismatch`] if `initial` does not hold exactly
    /// one position per robot.
    pub fn seed_initial_positions(&mut self, initial: &[GridPoint]) -> FleetResult<()> {
        if initial.len() != self.robots {
            return Err(FleetError::RobotCountMismatch {
                expected: self.robots,
                got:      initial.len(),
            });
        }
        for (i, &p) in initial.iter().enumerate() {
            self.set_position(Step::ZERO, RobotId(i as u32), p);
        }
        Ok(())
    }

    /// Total step count (size of the time axis).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Fleet size (size of the robot axis).
    #[inline]
    pub fn robots(&self) -> usize {
        self.robots
    }

    #[inline]
    fn offset(&self, step: Step, robot: RobotId, axis: Axis) -> usize {
        assert!(step.index() < self.steps, "step {step} out of range (steps = {})", self.steps);
        assert!(robot.index() < self.robots, "{robot} out of range (robots = {})", self.robots);
        (step.index() * self.robots + robot.index()) * 2 + axis as usize
    }

    /// Read one coordinate.
    ///
    /// # Panics
    /// Panics if `step` or `robot` is out of range.
    #[inline]
    pub fn get(&self, step: Step, robot: RobotId, axis: Axis) -> i32 {
        self.data[self.offset(step, robot, axis)]
    }

    /// Write one coordinate.
    ///
    /// # Panics
    /// Panics if `step` or `robot` is out of range.
    #[inline]
    pub fn set(&mut self, step: Step, robot: RobotId, axis: Axis, value: i32) {
        let i = self.offset(step, robot, axis);
        self.data[i] = value;
    }

    #[inline]
    pub fn position(&self, step: Step, robot: RobotId) -> GridPoint {
        GridPoint::new(self.get(step, robot, Axis::X), self.get(step, robot, Axis::Y))
    }

    #[inline]
    pub fn set_position(&mut self, step: Step, robot: RobotId, p: GridPoint) {
        self.set(step, robot, Axis::X, p.x);
        self.set(step, robot, Axis::Y, p.y);
    }

    /// The fleet snapshot stored at `step`, in robot order.
    pub fn snapshot(&self, step: Step) -> Vec<GridPoint> {
        (0..self.robots as u32)
            .map(|n| self.position(step, RobotId(n)))
            .collect()
    }

    /// Positions at step 0.  Empty if the store has no steps.
    pub fn initial_positions(&self) -> Vec<GridPoint> {
        if self.steps == 0 {
            return vec![];
        }
        self.snapshot(Step::ZERO)
    }

    /// One robot's full path, step 0 first.
    pub fn path(&self, robot: RobotId) -> Vec<GridPoint> {
        (0..self.steps as u64)
            .map(|t| self.position(Step(t), robot))
            .collect()
    }
}
