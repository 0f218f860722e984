//! The `Mission` struct and its step loop.

use fh_core::{GridPoint, MissionConfig, RobotId, SimRng, Step};
use fh_coverage::CoverageAccountant;
use fh_fleet::{FleetState, TrajectoryStore};
use fh_policy::{MissionRules, MovePolicy, Policy, PolicyContext};

use crate::{MissionObserver, SimError, SimResult};

// ── Lifecycle and results ─────────────────────────────────────────────────────

/// Where a [`Mission`] is in its one-shot lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MissionPhase {
    /// Fleet loaded from step 0 and start cells marked visited.
    Initialized,
    /// Inside [`Mission::run`].
    Running,
    /// All steps simulated; results are final.
    Finished,
}

/// A recovered anomaly noticed while setting up a mission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// The requested policy name was not recognised; the random policy is
    /// used instead.
    PolicyFallback { requested: String },
}

/// Results of a finished (or partially run) mission.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MissionReport {
    pub policy:         &'static str,
    pub steps:          u64,
    pub robots:         usize,
    /// Robot-moves that changed position.
    pub traveled:       u64,
    /// Distinct cells any robot has occupied.
    pub visited_cells:  usize,
    /// Covered area in cell-area units.
    pub estimated_area: f64,
}

// ── Mission ───────────────────────────────────────────────────────────────────

/// The mission runner.
///
/// Owns the fleet, the coverage accountant, the trajectory store, the
/// policy, and the RNG.  The policy gets a read-only [`PolicyContext`] per
/// decision; all mutation happens here, one robot at a time.
///
/// Create via [`MissionBuilder`][crate::MissionBuilder].
pub struct Mission<P: MovePolicy = Policy> {
    pub(crate) config:       MissionConfig,
    pub(crate) rules:        MissionRules,
    pub(crate) total_steps:  u64,
    pub(crate) fleet:        FleetState,
    pub(crate) coverage:     CoverageAccountant,
    pub(crate) trajectories: TrajectoryStore,
    pub(crate) policy:       P,
    pub(crate) rng:          SimRng,
    pub(crate) traveled:     u64,
    pub(crate) phase:        MissionPhase,
    pub(crate) diagnostics:  Vec<Diagnostic>,
}

impl<P: MovePolicy> Mission<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Simulate steps `1..steps` and return the final report.
    ///
    /// # Errors
    ///
    /// [`SimError::AlreadyRun`] if called a second time.
    pub fn run<O: MissionObserver>(&mut self, observer: &mut O) -> SimResult<MissionReport> {
        if self.phase != MissionPhase::Initialized {
            return Err(SimError::AlreadyRun);
        }
        self.phase = MissionPhase::Running;

        tracing::info!(
            policy = self.policy.name(),
            steps  = self.total_steps,
            robots = self.fleet.len(),
            goal   = %self.rules.goal,
            "mission started"
        );

        let interval = self.config.output_interval_steps;
        if interval > 0 {
            observer.on_snapshot(Step::ZERO, &self.fleet, &self.coverage, self.traveled);
        }

        for t in 1..self.total_steps {
            let step = Step(t);
            observer.on_step_start(step);
            self.process_step(step, observer);
            observer.on_step_end(step, self.traveled);

            if interval > 0 && t % interval == 0 {
                observer.on_snapshot(step, &self.fleet, &self.coverage, self.traveled);
            }

            tracing::debug!(
                step = t,
                traveled = self.traveled,
                visited = self.coverage.visited_count(),
                "step complete"
            );
        }

        self.phase = MissionPhase::Finished;
        let report = self.report();
        tracing::info!(
            traveled       = report.traveled,
            visited_cells  = report.visited_cells,
            estimated_area = report.estimated_area,
            "mission finished"
        );
        observer.on_mission_end(&report);
        Ok(report)
    }

    /// Snapshot of the results so far.
    pub fn report(&self) -> MissionReport {
        MissionReport {
            policy:         self.policy.name(),
            steps:          self.total_steps,
            robots:         self.fleet.len(),
            traveled:       self.traveled,
            visited_cells:  self.coverage.visited_count(),
            estimated_area: self.coverage.estimated_area(),
        }
    }

    #[inline]
    pub fn traveled(&self) -> u64 {
        self.traveled
    }

    #[inline]
    pub fn visited_cells(&self) -> usize {
        self.coverage.visited_count()
    }

    #[inline]
    pub fn estimated_area(&self) -> f64 {
        self.coverage.estimated_area()
    }

    #[inline]
    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    pub fn rules(&self) -> &MissionRules {
        &self.rules
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    pub fn fleet(&self) -> &FleetState {
        &self.fleet
    }

    pub fn coverage(&self) -> &CoverageAccountant {
        &self.coverage
    }

    pub fn trajectories(&self) -> &TrajectoryStore {
        &self.trajectories
    }

    /// Hand back the trajectory store, e.g. to print or export it.
    pub fn into_trajectories(self) -> TrajectoryStore {
        self.trajectories
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Recovered anomalies from mission setup (empty when none).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn process_step<O: MissionObserver>(&mut self, step: Step, observer: &mut O) {
        let time_left = step.time_left(self.total_steps);
        for i in 0..self.fleet.len() {
            let robot = RobotId(i as u32);
            let from = self.fleet.position(robot);
            let to = self.advance_robot(robot, time_left);
            self.trajectories.set_position(step, robot, to);
            observer.on_robot_moved(step, robot, from, to);
        }
    }

    /// Decide, record, and apply one robot's move.  Returns the new position.
    fn advance_robot(&mut self, robot: RobotId, time_left: u64) -> GridPoint {
        let from = self.fleet.position(robot);
        let to = {
            let ctx = PolicyContext::new(time_left, &self.rules, &self.fleet, &self.coverage);
            self.policy.decide_move(robot, &ctx, &mut self.rng)
        };

        self.coverage.record_move(from, to);
        if to != from {
            self.traveled += 1;
        }
        self.fleet.set_position(robot, to);
        to
    }
}
