//! Configuration System
//!
//! Which strategies take part, how many agents each one starts with, and how
//! many generations to run. Values are validated when the config is built, so
//! a `SimulationConfig` that exists is always runnable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::strategies::StrategyKind;

/// Smallest generation count a run accepts, also the snapshot interval
pub const MIN_GENERATIONS: u64 = 1_000;

/// Generation count used when none is given
pub const DEFAULT_GENERATIONS: u64 = 10_000;

/// Per-strategy population used when none is given
pub const DEFAULT_POPULATION_COUNT: u32 = 150;

/// Errors raised while building a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("generation count {given} is below the minimum of {minimum}")]
    GenerationsBelowMinimum { given: u64, minimum: u64 },
    #[error("population count for {0} must be at least 1")]
    ZeroPopulation(String),
    #[error("unknown strategy `{0}`")]
    UnknownStrategy(String),
    #[error("{field} value `{value}` is not a valid number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Population composition and run length for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    populations: BTreeMap<StrategyKind, u32>,
    generations: u64,
}

impl SimulationConfig {
    /// A config with no agents, only a run length
    pub fn new(generations: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            populations: BTreeMap::new(),
            generations: validate_generations(generations)?,
        })
    }

    /// Every strategy in `kinds` with the same starting count
    pub fn uniform(
        kinds: impl IntoIterator<Item = StrategyKind>,
        count: u32,
        generations: u64,
    ) -> Result<Self, ConfigError> {
        kinds
            .into_iter()
            .try_fold(Self::new(generations)?, |config, kind| config.with_strategy(kind, count))
    }

    /// Include `kind` with `count` starting agents, replacing any earlier count
    pub fn with_strategy(mut self, kind: StrategyKind, count: u32) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::ZeroPopulation(kind.key().to_string()));
        }
        self.populations.insert(kind, count);
        Ok(self)
    }

    /// Parse configuration from a TOML string.
    ///
    /// ```toml
    /// generations = 5000
    ///
    /// [population]
    /// sucker = 100
    /// tit_for_tat = 150
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.population.iter().try_fold(
            Self::new(file.generations)?,
            |config, (name, &count)| config.with_strategy(name.parse()?, count),
        )
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Starting count for `kind`, zero when not included
    pub fn population_of(&self, kind: StrategyKind) -> u32 {
        self.populations.get(&kind).copied().unwrap_or(0)
    }

    /// Included strategies with their counts, in spawn order
    pub fn strategies(&self) -> impl Iterator<Item = (StrategyKind, u32)> + '_ {
        self.populations.iter().map(|(&kind, &count)| (kind, count))
    }

    /// Number of agents this config spawns
    pub fn total_agents(&self) -> u64 {
        self.populations.values().map(|&count| u64::from(count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.populations.is_empty()
    }
}

impl Default for SimulationConfig {
    /// All seven strategies, 150 agents each, 10 000 generations
    fn default() -> Self {
        Self {
            populations: StrategyKind::ALL
                .into_iter()
                .map(|kind| (kind, DEFAULT_POPULATION_COUNT))
                .collect(),
            generations: DEFAULT_GENERATIONS,
        }
    }
}

/// On-disk shape of a config file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default = "default_generations")]
    generations: u64,
    #[serde(default)]
    population: BTreeMap<String, u32>,
}

fn default_generations() -> u64 {
    DEFAULT_GENERATIONS
}

fn validate_generations(generations: u64) -> Result<u64, ConfigError> {
    if generations < MIN_GENERATIONS {
        return Err(ConfigError::GenerationsBelowMinimum {
            given: generations,
            minimum: MIN_GENERATIONS,
        });
    }
    Ok(generations)
}

/// Parse a generation count argument, rejecting values below the minimum
pub fn parse_generations(value: &str) -> Result<u64, ConfigError> {
    let generations = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        field: "generations",
        value: value.to_string(),
    })?;
    validate_generations(generations)
}

/// Parse a per-strategy population count argument, rejecting zero
pub fn parse_population_count(value: &str) -> Result<u32, ConfigError> {
    let count = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        field: "population",
        value: value.to_string(),
    })?;
    if count == 0 {
        return Err(ConfigError::ZeroPopulation("every strategy".to_string()));
    }
    Ok(count)
}
