//! Run configuration: an optional JSON file with command-line overrides.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fh_core::MissionConfig;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

pub const DEFAULT_STEPS: usize = 100;

/// Everything one `fharvest` invocation needs.
///
/// ```json
/// {
///   "positions": "data/positions.txt",
///   "steps": 60,
///   "policy": "heuristic",
///   "goal": { "x": 3, "y": 3 },
///   "max_distance": 8.0,
///   "seed": 42,
///   "output_interval_steps": 5
/// }
/// ```
///
/// Missing keys take their defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub positions:  Option<PathBuf>,
    /// Length of the time axis, including step 0.
    pub steps:      usize,
    pub policy:     String,
    pub output_dir: Option<PathBuf>,
    #[serde(flatten)]
    pub mission:    MissionConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            positions:  None,
            steps:      DEFAULT_STEPS,
            policy:     "random".to_owned(),
            output_dir: None,
            mission:    MissionConfig::default(),
        }
    }
}

impl RunConfig {
    /// Read `path` if given, else start from defaults.
    ///
    /// A relative `positions` path in the file is taken relative to the
    /// file's own directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let file = File::open(path)
            .with_context(|| format!("opening config file {}", path.display()))?;
        let mut cfg: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing config file {}", path.display()))?;

        if let (Some(positions), Some(base)) = (&cfg.positions, path.parent()) {
            if positions.is_relative() {
                cfg.positions = Some(base.join(positions));
            }
        }
        Ok(cfg)
    }

    /// Command-line values win over file values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(p) = &cli.positions {
            self.positions = Some(p.clone());
        }
        if let Some(steps) = cli.steps {
            self.steps = steps;
        }
        if let Some(policy) = &cli.policy {
            self.policy = policy.clone();
        }
        if let Some(dir) = &cli.output_dir {
            self.output_dir = Some(dir.clone());
        }
        if let Some(goal) = cli.goal {
            self.mission.goal = goal;
        }
        if let Some(d) = cli.max_distance {
            self.mission.max_distance = d;
        }
        if let Some(seed) = cli.seed {
            self.mission.seed = Some(seed);
        }
        if let Some(interval) = cli.output_interval {
            self.mission.output_interval_steps = interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use fh_core::GridPoint;

    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let cfg: RunConfig = serde_json::from_str(r#"{ "goal": { "x": 2, "y": -1 } }"#).unwrap();
        assert_eq!(cfg.steps, DEFAULT_STEPS);
        assert_eq!(cfg.policy, "random");
        assert_eq!(cfg.mission.goal, GridPoint::new(2, -1));
        assert_eq!(cfg.mission.max_distance, 200.0);
        assert_eq!(cfg.mission.seed, None);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "steps": 12, "policy": "heuristic", "seed": 9 }}"#).unwrap();
        let cfg = RunConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.steps, 12);
        assert_eq!(cfg.policy, "heuristic");
        assert_eq!(cfg.mission.seed, Some(9));
    }

    #[test]
    fn load_without_path_is_default() {
        let cfg = RunConfig::load(None).unwrap();
        assert_eq!(cfg.steps, DEFAULT_STEPS);
        assert!(cfg.positions.is_none());
    }

    #[test]
    fn positions_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mission.json");
        std::fs::write(&path, r#"{ "positions": "positions.txt" }"#).unwrap();
        let cfg = RunConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.positions, Some(dir.path().join("positions.txt")));
    }

    #[test]
    fn absolute_positions_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let positions = dir.path().join("elsewhere.txt");
        let path = dir.path().join("nested").join("mission.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let json = serde_json::json!({ "positions": &positions });
        std::fs::write(&path, json.to_string()).unwrap();
        let cfg = RunConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.positions, Some(positions));
    }

    #[test]
    fn cli_positions_are_not_rebased() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mission.json");
        std::fs::write(&path, r#"{ "positions": "positions.txt" }"#).unwrap();
        let mut cfg = RunConfig::load(Some(&path)).unwrap();
        cfg.apply_overrides(&Cli::parse_from(["fharvest", "--positions", "run/fleet.txt"]));
        assert_eq!(cfg.positions, Some(PathBuf::from("run/fleet.txt")));
    }

    #[test]
    fn bad_json_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ steps: }}").unwrap();
        assert!(RunConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn cli_overrides_file() {
        let mut cfg: RunConfig = serde_json::from_str(r#"{ "steps": 12, "seed": 9 }"#).unwrap();
        let cli = Cli::parse_from(["fharvest", "--steps", "30", "--goal", "-3,4", "--policy", "heuristic"]);
        cfg.apply_overrides(&cli);
        assert_eq!(cfg.steps, 30);
        assert_eq!(cfg.mission.goal, GridPoint::new(-3, 4));
        assert_eq!(cfg.policy, "heuristic");
        assert_eq!(cfg.mission.seed, Some(9));
    }
}
