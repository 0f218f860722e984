//! Plain data row types written by output backends.

/// One robot's position at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRow {
    pub step:  u64,
    pub robot: u32,
    pub x:     i32,
    pub y:     i32,
}

/// Coverage progress after a given step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:           u64,
    /// Position-changing moves so far.
    pub traveled:       u64,
    pub visited_cells:  u64,
    pub estimated_area: f64,
}
