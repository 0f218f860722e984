//! Mission observer trait for progress reporting and data collection.

use fh_core::{GridPoint, RobotId, Step};
use fh_coverage::CoverageAccountant;
use fh_fleet::FleetState;

use crate::MissionReport;

/// Callbacks invoked by [`Mission::run`][crate::Mission::run] at key points
/// in the step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl MissionObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, traveled: u64) {
///         if step.0 % self.interval == 0 {
///             println!("{step}: {traveled} moves so far");
///         }
///     }
/// }
/// ```
pub trait MissionObserver {
    /// Called at the very start of each simulated step.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called after each robot's move is applied.  `from == to` means the
    /// robot stayed in place.
    fn on_robot_moved(&mut self, _step: Step, _robot: RobotId, _from: GridPoint, _to: GridPoint) {}

    /// Called after every robot has moved in `step`.
    ///
    /// `traveled` is the running count of position-changing moves.
    fn on_step_end(&mut self, _step: Step, _traveled: u64) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`
    /// steps, plus once for step 0 before the first move).
    ///
    /// Provides read-only access to the fleet and coverage so output writers
    /// can record state without the mission knowing any output format.
    fn on_snapshot(
        &mut self,
        _step:     Step,
        _fleet:    &FleetState,
        _coverage: &CoverageAccountant,
        _traveled: u64,
    ) {}

    /// Called once after the final step completes.
    fn on_mission_end(&mut self, _report: &MissionReport) {}
}

/// A [`MissionObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl MissionObserver for NoopObserver {}
