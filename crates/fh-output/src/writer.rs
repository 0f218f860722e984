//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PositionRow, StepSummaryRow};

/// A sink for mission output rows.
///
/// Errors surface through [`MissionOutputObserver::take_error`][crate::MissionOutputObserver::take_error]
/// when the writer is driven from the step loop.
pub trait OutputWriter {
    /// Write one fleet snapshot (one row per robot).
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
