//! fharvest: command-line driver for the coverage simulator.
//!
//! ```text
//! cargo run -p fharvest -- --config demos/fharvest/data/mission.json --print
//! RUST_LOG=debug cargo run -p fharvest -- -p demos/fharvest/data/positions.txt --steps 40 --goal 3,3
//! ```
//!
//! The final report is printed to stdout as JSON.  Logs go to stderr.

mod cli;
mod config;

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fh_fleet::load_positions_file;
use fh_output::{CsvWriter, MissionOutputObserver, format_trajectories};
use fh_sim::{Diagnostic, MissionBuilder, MissionObserver, NoopObserver};

use cli::Cli;
use config::RunConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = RunConfig::load(cli.config.as_deref())?;
    cfg.apply_overrides(&cli);
    tracing::debug!(config = ?cfg, "run configuration");

    // 1. Fleet.
    let Some(positions_path) = cfg.positions.clone() else {
        bail!("no positions file given (use --positions or set \"positions\" in the config file)");
    };
    let initial = load_positions_file(&positions_path)
        .with_context(|| format!("reading initial positions from {}", positions_path.display()))?;
    tracing::info!(robots = initial.len(), path = %positions_path.display(), "fleet loaded");

    // 2. Mission.
    let mut mission = MissionBuilder::from_initial_positions(cfg.steps, &initial, cfg.mission.clone())
        .policy_name(&cfg.policy)
        .build()
        .context("building mission")?;
    for diag in mission.diagnostics() {
        match diag {
            Diagnostic::PolicyFallback { requested } => {
                eprintln!("Invalid policy {requested:?}, falling back to random");
            }
        }
    }

    // 3. Run, with CSV output if requested.
    let t0 = Instant::now();
    let report = match &cfg.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(dir)?;
            let mut obs = MissionOutputObserver::new(writer);
            let report = run(&mut mission, &mut obs)?;
            if let Some(e) = obs.take_error() {
                tracing::error!(error = %e, "output incomplete");
            }
            report
        }
        None => run(&mut mission, &mut NoopObserver)?,
    };
    tracing::info!(elapsed_secs = t0.elapsed().as_secs_f64(), "run complete");

    // 4. Report.
    println!("{}", serde_json::to_string_pretty(&report)?);
    if cli.print {
        print!("{}", format_trajectories(mission.trajectories()));
    }

    Ok(())
}

fn run<O: MissionObserver>(
    mission:  &mut fh_sim::Mission,
    observer: &mut O,
) -> Result<fh_sim::MissionReport> {
    mission.run(observer).context("running mission")
}
