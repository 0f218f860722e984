//! Fluent builder for constructing a [`Mission`].

use fh_core::{GridPoint, MissionConfig, SimRng};
use fh_coverage::CoverageAccountant;
use fh_fleet::{FleetState, TrajectoryStore};
use fh_policy::{MissionRules, MovePolicy, Policy, PolicyKind};

use crate::{Diagnostic, Mission, MissionPhase, SimError, SimResult};

/// Fluent builder for [`Mission<P>`].
///
/// # Required inputs
///
/// - [`TrajectoryStore`]: its shape fixes the step count and fleet size;
///   step 0 must hold the initial positions.
/// - [`MissionConfig`]: goal, cohesion radius, seed, snapshot interval.
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                  |
/// |-----------------------|------------------------------------------|
/// | `.policy(p)`          | `Policy::Random`                         |
/// | `.policy_kind(k)`     | `PolicyKind::Random`                     |
/// | `.policy_name(s)`     | `"random"` (unknown names fall back)     |
/// | `.rng(r)`             | `SimRng` from `config.seed` or entropy   |
///
/// # Example
///
/// ```rust,ignore
/// let store = TrajectoryStore::from_initial_positions(steps, &positions);
/// let mut mission = MissionBuilder::new(store, config)
///     .policy_kind(PolicyKind::Heuristic)
///     .build()?;
/// mission.run(&mut NoopObserver)?;
/// ```
pub struct MissionBuilder<P: MovePolicy = Policy> {
    trajectories: TrajectoryStore,
    config:       MissionConfig,
    policy:       P,
    rng:          Option<SimRng>,
    diagnostics:  Vec<Diagnostic>,
}

impl MissionBuilder<Policy> {
    /// Create a builder with all required inputs and the random policy.
    pub fn new(trajectories: TrajectoryStore, config: MissionConfig) -> Self {
        Self {
            trajectories,
            config,
            policy:      Policy::default(),
            rng:         None,
            diagnostics: Vec::new(),
        }
    }

    /// Allocate a trajectory store of `steps` steps seeded with `initial`.
    pub fn from_initial_positions(steps: usize, initial: &[GridPoint], config: MissionConfig) -> Self {
        Self::new(TrajectoryStore::from_initial_positions(steps, initial), config)
    }

    /// Select a built-in policy.
    pub fn policy_kind(mut self, kind: PolicyKind) -> Self {
        self.policy = Policy::from(kind);
        self
    }

    /// Select a built-in policy by name.
    ///
    /// Unknown names select the random policy and leave a
    /// [`Diagnostic::PolicyFallback`] on the built mission.
    pub fn policy_name(mut self, name: &str) -> Self {
        let (kind, fallback) = PolicyKind::resolve(name);
        if fallback.is_some() {
            self.diagnostics.push(Diagnostic::PolicyFallback { requested: name.to_owned() });
        }
        self.policy = Policy::from(kind);
        self
    }
}

impl<P: MovePolicy> MissionBuilder<P> {
    /// Use a custom [`MovePolicy`].
    pub fn policy<Q: MovePolicy>(self, policy: Q) -> MissionBuilder<Q> {
        MissionBuilder {
            trajectories: self.trajectories,
            config:       self.config,
            policy,
            rng:          self.rng,
            diagnostics:  self.diagnostics,
        }
    }

    /// Inject the RNG, overriding `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, load the fleet from step 0, mark start cells
    /// visited, and return a ready-to-run [`Mission`].
    pub fn build(self) -> SimResult<Mission<P>> {
        self.config.validate()?;

        if self.trajectories.steps() == 0 {
            return Err(SimError::Config("trajectory store has no steps".into()));
        }
        if self.trajectories.robots() == 0 {
            return Err(SimError::EmptyFleet);
        }

        // ── Fleet and coverage from step 0 ────────────────────────────────
        let initial = self.trajectories.initial_positions();
        let coverage = CoverageAccountant::with_visited(initial.iter().copied());
        let fleet = FleetState::new(initial);

        let rng = self
            .rng
            .unwrap_or_else(|| SimRng::from_optional_seed(self.config.seed));

        Ok(Mission {
            rules:        MissionRules::from_config(&self.config),
            total_steps:  self.trajectories.steps() as u64,
            config:       self.config,
            fleet,
            coverage,
            trajectories: self.trajectories,
            policy:       self.policy,
            rng,
            traveled:     0,
            phase:        MissionPhase::Initialized,
            diagnostics:  self.diagnostics,
        })
    }
}
