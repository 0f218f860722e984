//! `MissionOutputObserver<W>`: bridges `MissionObserver` to an `OutputWriter`.

use fh_core::Step;
use fh_coverage::CoverageAccountant;
use fh_fleet::FleetState;
use fh_sim::{MissionObserver, MissionReport};

use crate::row::{PositionRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`MissionObserver`] that writes fleet snapshots and step summaries to
/// any [`OutputWriter`] backend.
///
/// Snapshots arrive at step 0 and then every `output_interval_steps`; each
/// produces one position row per robot plus one summary row.  Errors from the
/// writer are stored because observer methods have no return value.  After
/// `mission.run()` returns, check with [`take_error`][Self::take_error].
pub struct MissionOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> MissionOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `mission.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the mission).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> MissionObserver for MissionOutputObserver<W> {
    fn on_snapshot(
        &mut self,
        step:     Step,
        fleet:    &FleetState,
        coverage: &CoverageAccountant,
        traveled: u64,
    ) {
        let rows: Vec<PositionRow> = fleet
            .iter()
            .map(|(robot, p)| PositionRow { step: step.0, robot: robot.0, x: p.x, y: p.y })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }

        let summary = StepSummaryRow {
            step:           step.0,
            traveled,
            visited_cells:  coverage.visited_count() as u64,
            estimated_area: coverage.estimated_area(),
        };
        let result = self.writer.write_step_summary(&summary);
        self.store_err(result);
    }

    fn on_mission_end(&mut self, _report: &MissionReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
