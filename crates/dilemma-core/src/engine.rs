//! Generation Engine
//!
//! Owns the population and drives it generation by generation:
//! shuffle, pair, interact, wear out, cull. A run reports stats snapshots at
//! the start, every `SNAPSHOT_INTERVAL` generations and at the end.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info, trace};

use dilemma_events::{GenerationSnapshot, RunOutcome, RunReport, SimEvent, SnapshotReason};

use crate::agent::IdSequence;
use crate::config::{SimulationConfig, MIN_GENERATIONS};
use crate::output::snapshot_of;
use crate::population::Population;

/// Generations between periodic snapshots
pub const SNAPSHOT_INTERVAL: u64 = MIN_GENERATIONS;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no population for the simulation to run at generation {generation}")]
    EmptyPopulation { generation: u64 },
}

/// What a single generation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStep {
    pub generation: u64,
    pub encounters: usize,
    pub culled: usize,
    pub survivors: usize,
}

/// A running simulation.
///
/// The generation counter keeps counting across runs; extending the
/// population never resets it or touches existing agents.
#[derive(Debug)]
pub struct Simulation<R = SmallRng> {
    config: SimulationConfig,
    population: Population,
    ids: IdSequence,
    generation: u64,
    rng: R,
}

impl Simulation<SmallRng> {
    /// Create a simulation whose shuffles are reproducible from `seed`
    pub fn seeded(config: SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Create a simulation drawing shuffles from `rng`
    pub fn with_rng(config: SimulationConfig, rng: R) -> Self {
        let mut ids = IdSequence::new();
        let population = Population::spawn(&config, &mut ids);
        info!(
            "Spawned {} agents across {} strategies",
            population.len(),
            config.strategies().count()
        );

        Self {
            config,
            population,
            ids,
            generation: 0,
            rng,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Last completed generation, zero before the first run
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total agents ever created by this simulation
    pub fn agents_spawned(&self) -> u64 {
        self.ids.issued()
    }

    /// Stats for the current population
    pub fn snapshot(&self, reason: SnapshotReason) -> GenerationSnapshot {
        snapshot_of(self.population.iter(), self.generation, reason)
    }

    /// Append a fresh batch from `config` and make it the config for the next
    /// run. Returns the number of agents added.
    pub fn extend(&mut self, config: SimulationConfig) -> usize {
        let added = self.population.extend_from(&config, &mut self.ids);
        info!(
            "Added {} agents at generation {} ({} alive)",
            added,
            self.generation,
            self.population.len()
        );
        self.config = config;
        added
    }

    /// Run one generation
    pub fn step(&mut self) -> GenerationStep {
        self.generation += 1;

        self.population.shuffle(&mut self.rng);
        let encounters = self.population.run_encounters();
        let culled = self.population.cull();

        trace!(
            "Generation {}: {} encounters, {} culled, {} alive",
            self.generation,
            encounters,
            culled,
            self.population.len()
        );

        GenerationStep {
            generation: self.generation,
            encounters,
            culled,
            survivors: self.population.len(),
        }
    }

    /// Run the configured number of generations
    pub fn run(&mut self) -> Result<RunReport, EngineError> {
        self.run_with(|_| {})
    }

    /// Run the configured number of generations, passing every event to
    /// `on_event` as it happens.
    ///
    /// Stops early, without error, if the population dies out.
    pub fn run_with<F>(&mut self, mut on_event: F) -> Result<RunReport, EngineError>
    where
        F: FnMut(&SimEvent),
    {
        if self.population.is_empty() {
            return Err(EngineError::EmptyPopulation {
                generation: self.generation,
            });
        }

        info!(
            "Running {} generations from generation {} with {} agents",
            self.config.generations(),
            self.generation,
            self.population.len()
        );

        let mut snapshots = Vec::new();
        self.record(SnapshotReason::RunStart, &mut snapshots, &mut on_event);

        for _ in 0..self.config.generations() {
            let step = self.step();

            if step.survivors == 0 {
                info!("No survivors left on generation {}", step.generation);
                on_event(&SimEvent::Extinction {
                    generation: step.generation,
                });
                self.record(SnapshotReason::Extinction, &mut snapshots, &mut on_event);
                return Ok(RunReport {
                    outcome: RunOutcome::Extinct {
                        generation: step.generation,
                    },
                    snapshots,
                });
            }

            if step.generation % SNAPSHOT_INTERVAL == 0 {
                self.record(SnapshotReason::Periodic, &mut snapshots, &mut on_event);
            }
        }

        if self.generation % SNAPSHOT_INTERVAL != 0 {
            self.record(SnapshotReason::RunEnd, &mut snapshots, &mut on_event);
        }

        info!(
            "Run finished at generation {} with {} survivors",
            self.generation,
            self.population.len()
        );

        Ok(RunReport {
            outcome: RunOutcome::Completed {
                generation: self.generation,
            },
            snapshots,
        })
    }

    fn record<F>(
        &self,
        reason: SnapshotReason,
        snapshots: &mut Vec<GenerationSnapshot>,
        on_event: &mut F,
    ) where
        F: FnMut(&SimEvent),
    {
        let snapshot = self.snapshot(reason);
        debug!(
            "Snapshot at generation {}: {} agents",
            snapshot.generation,
            snapshot.total_population()
        );
        on_event(&SimEvent::Snapshot(snapshot.clone()));
        snapshots.push(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{STARTING_POINTS, WEAR_OUT_COST};
    use crate::strategies::StrategyKind;

    fn config(kinds: &[(StrategyKind, u32)], generations: u64) -> SimulationConfig {
        kinds.iter().fold(SimulationConfig::new(generations).unwrap(), |config, &(kind, count)| {
            config.with_strategy(kind, count).unwrap()
        })
    }

    #[test]
    fn test_empty_population_rejected() {
        let mut sim = Simulation::seeded(SimulationConfig::new(1000).unwrap(), 1);
        let result = sim.run();

        assert!(matches!(result, Err(EngineError::EmptyPopulation { generation: 0 })));
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_step_two_cheaters() {
        let mut sim = Simulation::seeded(config(&[(StrategyKind::Cheater, 2)], 1000), 3);
        let step = sim.step();

        assert_eq!(step.generation, 1);
        assert_eq!(step.encounters, 1);
        assert_eq!(step.culled, 0);
        for agent in sim.population().iter() {
            assert_eq!(agent.points(), STARTING_POINTS + 1 - WEAR_OUT_COST);
        }
    }

    #[test]
    fn test_snapshots_on_interval() {
        let mut sim = Simulation::seeded(config(&[(StrategyKind::TitForTat, 3)], 3000), 11);
        let report = sim.run().unwrap();

        let generations: Vec<u64> = report.snapshots.iter().map(|s| s.generation).collect();
        assert_eq!(generations, vec![0, 1000, 2000, 3000]);
        assert_eq!(report.snapshots[0].reason, SnapshotReason::RunStart);
        assert!(report.snapshots[1..]
            .iter()
            .all(|s| s.reason == SnapshotReason::Periodic));
        assert_eq!(report.outcome, RunOutcome::Completed { generation: 3000 });
    }

    #[test]
    fn test_final_snapshot_off_interval() {
        let mut sim = Simulation::seeded(config(&[(StrategyKind::Sucker, 4)], 1500), 11);
        let report = sim.run().unwrap();

        let generations: Vec<u64> = report.snapshots.iter().map(|s| s.generation).collect();
        assert_eq!(generations, vec![0, 1000, 1500]);
        assert_eq!(report.final_snapshot().unwrap().reason, SnapshotReason::RunEnd);
    }

    #[test]
    fn test_extinction_stops_run() {
        // a lone agent only wears out: 5000 / 5 = 1000 generations
        let mut sim = Simulation::seeded(config(&[(StrategyKind::Grudger, 1)], 5000), 5);
        let mut events = Vec::new();
        let report = sim.run_with(|event| events.push(event.clone())).unwrap();

        assert_eq!(report.outcome, RunOutcome::Extinct { generation: 1000 });
        assert_eq!(sim.generation(), 1000);
        assert!(sim.population().is_empty());

        let last = report.final_snapshot().unwrap();
        assert_eq!(last.reason, SnapshotReason::Extinction);
        assert!(last.is_extinct());

        assert!(events.contains(&SimEvent::Extinction { generation: 1000 }));
        // the periodic snapshot is skipped on the extinction generation
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_extend_keeps_existing_agents() {
        let mut sim = Simulation::seeded(config(&[(StrategyKind::Pavlov, 2)], 1000), 9);
        sim.run().unwrap();
        let before: Vec<_> = sim.population().iter().cloned().collect();

        let added = sim.extend(config(&[(StrategyKind::Cynic, 3)], 2000));
        assert_eq!(added, 3);
        assert_eq!(sim.population().len(), 5);
        assert_eq!(sim.generation(), 1000);
        assert_eq!(sim.config().generations(), 2000);
        assert_eq!(sim.agents_spawned(), 5);

        for agent in &before {
            assert_eq!(sim.population().get(agent.id()), Some(agent));
        }
        for agent in sim.population().iter().filter(|a| a.kind() == StrategyKind::Cynic) {
            assert_eq!(agent.points(), STARTING_POINTS);
        }
    }

    #[test]
    fn test_generation_counter_continues_across_runs() {
        // two TitForTats lose 2 points each per generation
        let mut sim = Simulation::seeded(config(&[(StrategyKind::TitForTat, 2)], 1000), 2);
        sim.run().unwrap();
        let report = sim.run().unwrap();

        assert_eq!(report.snapshots[0].generation, 1000);
        assert_eq!(report.outcome.generation(), 2000);
    }
}
