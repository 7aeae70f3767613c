//! Command line options.
//!
//! The same strategy/population/generation switches are accepted on the
//! command line and on the interactive "add agents" prompt.

use clap::Parser;
use std::path::PathBuf;

use dilemma_core::config::{
    parse_generations, parse_population_count, ConfigError, SimulationConfig,
    DEFAULT_GENERATIONS, DEFAULT_POPULATION_COUNT,
};
use dilemma_core::StrategyKind;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "dilemma_sim")]
#[command(about = "Iterated prisoner's dilemma across a population of strategies")]
pub struct Args {
    #[command(flatten)]
    pub options: RunOptions,

    /// Random seed for reproducibility (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load the population and generation count from a TOML file instead
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write every run's snapshots to this JSON file on exit
    #[arg(long)]
    pub stats_json: Option<PathBuf>,

    /// Run once and exit without prompting
    #[arg(long)]
    pub non_interactive: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Which strategies to add, how many of each, and how long to run
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Include agents that always cooperate
    #[arg(long)]
    pub sucker: bool,

    /// Include agents that always defect
    #[arg(long)]
    pub cheater: bool,

    /// Include agents that never forgive a defection
    #[arg(long)]
    pub grudger: bool,

    /// Include agents that mirror the last move they saw
    #[arg(long)]
    pub tit_for_tat: bool,

    /// Include agents that exploit cooperators
    #[arg(long)]
    pub traitor: bool,

    /// Include agents that defect until shown cooperation
    #[arg(long)]
    pub cynic: bool,

    /// Include win-stay, lose-shift agents
    #[arg(long)]
    pub pavlov: bool,

    /// Starting agents per included strategy
    #[arg(short = 'p', long, value_parser = parse_population_count, default_value_t = DEFAULT_POPULATION_COUNT)]
    pub population: u32,

    /// Generations to run (at least 1000)
    #[arg(short = 'g', long, value_parser = parse_generations, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u64,
}

impl RunOptions {
    /// Strategies switched on, in spawn order
    pub fn selected(&self) -> Vec<StrategyKind> {
        [
            (StrategyKind::Sucker, self.sucker),
            (StrategyKind::Cheater, self.cheater),
            (StrategyKind::Grudger, self.grudger),
            (StrategyKind::TitForTat, self.tit_for_tat),
            (StrategyKind::Traitor, self.traitor),
            (StrategyKind::Cynic, self.cynic),
            (StrategyKind::Pavlov, self.pavlov),
        ]
        .into_iter()
        .filter_map(|(kind, on)| on.then_some(kind))
        .collect()
    }

    /// Build a config. With no strategy switched on, `all_when_none` decides
    /// between every strategy and none.
    pub fn to_config(&self, all_when_none: bool) -> Result<SimulationConfig, ConfigError> {
        let mut kinds = self.selected();
        if kinds.is_empty() && all_when_none {
            kinds = StrategyKind::ALL.to_vec();
        }
        SimulationConfig::uniform(kinds, self.population, self.generations)
    }
}

/// Options typed on the interactive prompt
#[derive(Parser, Debug)]
#[command(name = "options", no_binary_name = true)]
pub struct PromptOptions {
    #[command(flatten)]
    pub options: RunOptions,
}

impl PromptOptions {
    /// Parse a whitespace separated option line into a config for new agents
    pub fn parse_line(line: &str) -> Result<SimulationConfig, String> {
        let parsed = Self::try_parse_from(line.split_whitespace()).map_err(|e| e.to_string())?;
        parsed.options.to_config(false).map_err(|e| e.to_string())
    }
}
