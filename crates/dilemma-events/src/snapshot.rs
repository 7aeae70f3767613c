//! Generation snapshots: per-strategy population counts and mean points.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why a snapshot was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotReason {
    /// Taken before the first generation of a run
    RunStart,
    /// Taken on a generation that is a multiple of the snapshot interval
    Periodic,
    /// Taken after the last generation of a run that missed the interval
    RunEnd,
    /// The population died out on this generation
    Extinction,
}

/// Aggregated figures for one strategy type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrategyStats {
    /// Number of live agents of this type
    pub population: usize,
    /// Mean points, truncated toward zero
    pub average_points: i64,
}

/// Stats for the whole population at a given generation.
///
/// Strategies are keyed by display name, so iteration is always in name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub generation: u64,
    pub reason: SnapshotReason,
    pub strategies: BTreeMap<String, StrategyStats>,
}

impl GenerationSnapshot {
    pub fn new(generation: u64, reason: SnapshotReason) -> Self {
        Self {
            generation,
            reason,
            strategies: BTreeMap::new(),
        }
    }

    /// Set the stats row for a strategy
    pub fn with_strategy(mut self, name: impl Into<String>, stats: StrategyStats) -> Self {
        self.strategies.insert(name.into(), stats);
        self
    }

    /// Look up the stats row for a strategy by display name
    pub fn get(&self, name: &str) -> Option<&StrategyStats> {
        self.strategies.get(name)
    }

    /// Population count for a strategy, zero when absent
    pub fn population_of(&self, name: &str) -> usize {
        self.get(name).map_or(0, |s| s.population)
    }

    /// Total number of live agents across all strategies
    pub fn total_population(&self) -> usize {
        self.strategies.values().map(|s| s.population).sum()
    }

    /// True when no agent is alive
    pub fn is_extinct(&self) -> bool {
        self.total_population() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_iterate_in_name_order() {
        let snapshot = GenerationSnapshot::new(1000, SnapshotReason::Periodic)
            .with_strategy("TRAITOR", StrategyStats { population: 3, average_points: 10 })
            .with_strategy("CHEATER", StrategyStats { population: 1, average_points: 7 })
            .with_strategy("PAVLOV", StrategyStats { population: 2, average_points: 9 });

        let names: Vec<&str> = snapshot.strategies.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["CHEATER", "PAVLOV", "TRAITOR"]);
        assert_eq!(snapshot.total_population(), 6);
        assert_eq!(snapshot.population_of("PAVLOV"), 2);
        assert_eq!(snapshot.population_of("SUCKER"), 0);
    }

    #[test]
    fn test_empty_snapshot_is_extinct() {
        let snapshot = GenerationSnapshot::new(12, SnapshotReason::Extinction);
        assert!(snapshot.is_extinct());
        assert_eq!(snapshot.total_population(), 0);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = GenerationSnapshot::new(2000, SnapshotReason::RunEnd)
            .with_strategy("GRUDGER", StrategyStats { population: 4, average_points: 5120 });

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["generation"], 2000);
        assert_eq!(json["reason"], "run_end");
        assert_eq!(json["strategies"]["GRUDGER"]["population"], 4);
        assert_eq!(json["strategies"]["GRUDGER"]["average_points"], 5120);
    }
}
