//! Iterated Prisoner's Dilemma Simulation
//!
//! Runs a mixed population of strategies for many generations and prints a
//! stats table every thousand generations. Between runs it can add more
//! agents and keep going.

use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dilemma_core::output::render_snapshot;
use dilemma_core::{
    ConfigError, EngineError, RunReport, SimEvent, Simulation, SimulationConfig,
};

mod cli;
mod prompt;

use cli::Args;
use prompt::Prompter;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("could not serialize stats: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything written by `--stats-json`
#[derive(Debug, Serialize)]
struct StatsExport {
    seed: u64,
    runs: Vec<RunReport>,
    extensions: Vec<SimEvent>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), AppError> {
    let config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => args.options.to_config(true)?,
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);

    println!("***STARTING THE SIMULATION***\n");

    let mut sim = Simulation::seeded(config, seed);
    let mut export = StatsExport {
        seed,
        runs: Vec::new(),
        extensions: Vec::new(),
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    loop {
        match sim.run_with(print_event) {
            Ok(report) => export.runs.push(report),
            Err(e) if !args.non_interactive => {
                warn!("Run skipped: {}", e);
                println!("{}", e);
            }
            Err(e) => return Err(e.into()),
        }

        println!("The simulation is finished.");
        if args.non_interactive || !prompter.confirm("Would you like to go again? (y/n): ")? {
            break;
        }

        let change = prompter
            .confirm("Do you wish to add more agents and/or a different generation count? (y/n): ")?;
        if change {
            let Some(config) = prompter.read_options()? else {
                break;
            };
            let added = sim.extend(config);
            export.extensions.push(SimEvent::PopulationExtended {
                generation: sim.generation(),
                added,
            });
        }
    }

    if let Some(path) = &args.stats_json {
        write_stats(path, &export)?;
        info!("Wrote stats to {}", path.display());
    }

    println!("\n***SIMULATION EXITED***");
    Ok(())
}

fn print_event(event: &SimEvent) {
    if let SimEvent::Snapshot(snapshot) = event {
        println!("{}", render_snapshot(snapshot));
    }
}

fn write_stats(path: &Path, export: &StatsExport) -> Result<(), AppError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(export)?;
    fs::write(path, json)?;
    Ok(())
}
