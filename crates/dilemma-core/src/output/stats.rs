//! Statistics
//!
//! Aggregates a population into per-strategy counts and mean points.

use std::collections::BTreeMap;

use dilemma_events::{GenerationSnapshot, SnapshotReason, StrategyStats};

use crate::agent::Agent;

/// Running totals for one strategy
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    population: usize,
    total_points: i64,
}

impl Tally {
    fn average(&self) -> i64 {
        if self.population == 0 {
            0
        } else {
            // integer division truncates toward zero
            self.total_points / self.population as i64
        }
    }
}

/// Build a snapshot of `agents` at `generation`
pub fn snapshot_of<'a>(
    agents: impl IntoIterator<Item = &'a Agent>,
    generation: u64,
    reason: SnapshotReason,
) -> GenerationSnapshot {
    let mut tallies: BTreeMap<&'static str, Tally> = BTreeMap::new();
    for agent in agents {
        let tally = tallies.entry(agent.kind().name()).or_default();
        tally.population += 1;
        tally.total_points += agent.points();
    }

    tallies.into_iter().fold(
        GenerationSnapshot::new(generation, reason),
        |snapshot, (name, tally)| {
            snapshot.with_strategy(
                name,
                StrategyStats {
                    population: tally.population,
                    average_points: tally.average(),
                },
            )
        },
    )
}
