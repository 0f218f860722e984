use std::path::PathBuf;

use clap::Parser;
use fh_core::GridPoint;

/// `fharvest` - run a robot-fleet coverage mission on the integer grid.
///
/// Loads initial robot positions, moves every robot once per step under the
/// chosen policy, and reports how much area the fleet covered.  Values given
/// here override the JSON config file.
#[derive(Parser, Debug)]
#[command(name = "fharvest", version, about, long_about = None)]
pub struct Cli {
    /// JSON run configuration.
    #[arg(long, short, env = "FHARVEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Initial positions: a robot count `N`, then `N` pairs of `x y`.
    #[arg(long, short, env = "FHARVEST_POSITIONS")]
    pub positions: Option<PathBuf>,

    /// Length of the time axis, including step 0.
    #[arg(long)]
    pub steps: Option<usize>,

    /// Shared goal as `x,y`.
    #[arg(long, allow_hyphen_values = true)]
    pub goal: Option<GridPoint>,

    /// `random` or `heuristic`; anything else falls back to `random`.
    #[arg(long, env = "FHARVEST_POLICY")]
    pub policy: Option<String>,

    /// RNG seed.  Omit for a non-reproducible run.
    #[arg(long, env = "FHARVEST_SEED")]
    pub seed: Option<u64>,

    /// Cohesion radius (Euclidean).
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Directory for `trajectories.csv` and `step_summaries.csv`.
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Snapshot every N steps (0 disables).
    #[arg(long)]
    pub output_interval: Option<u64>,

    /// Print every robot's trajectory to stdout.
    #[arg(long, default_value_t = false)]
    pub print: bool,
}
