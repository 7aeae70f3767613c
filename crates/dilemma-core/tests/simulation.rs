//! End-to-end simulation scenarios

use dilemma_core::{
    Agent, RunOutcome, Simulation, SimulationConfig, SnapshotReason, StrategyKind,
    STARTING_POINTS, WEAR_OUT_COST,
};

fn config_of(kinds: &[(StrategyKind, u32)], generations: u64) -> SimulationConfig {
    kinds
        .iter()
        .fold(SimulationConfig::new(generations).unwrap(), |config, &(kind, count)| {
            config.with_strategy(kind, count).unwrap()
        })
}

/// Two Cheaters meet once per generation for +1 each and each wear out once
#[test]
fn test_two_cheaters() {
    let mut sim = Simulation::seeded(config_of(&[(StrategyKind::Cheater, 2)], 1000), 42);

    sim.step();
    for agent in sim.population().iter() {
        assert_eq!(agent.points(), 5000 + 1 - 5);
    }

    // 4 points lost per generation, 1000 generations in total
    let report = sim.run().unwrap();
    assert_eq!(report.outcome, RunOutcome::Completed { generation: 1001 });
    for agent in sim.population().iter() {
        assert_eq!(agent.points(), STARTING_POINTS - 4 * 1001);
    }

    let last = report.final_snapshot().unwrap();
    assert_eq!(last.reason, SnapshotReason::RunEnd);
    assert_eq!(last.population_of("CHEATER"), 2);
    assert_eq!(last.get("CHEATER").unwrap().average_points, STARTING_POINTS - 4 * 1001);
}

/// Sucker gains nothing from a Cheater and dies on generation 5000 / 5
#[test]
fn test_sucker_exploited_by_cheater() {
    let mut sim = Simulation::seeded(
        config_of(&[(StrategyKind::Sucker, 1), (StrategyKind::Cheater, 1)], 1000),
        7,
    );

    let sucker_points = |sim: &Simulation| {
        sim.population()
            .iter()
            .find(|a| a.kind() == StrategyKind::Sucker)
            .map(Agent::points)
    };

    let mut previous = STARTING_POINTS;
    for generation in 1..1000 {
        sim.step();
        let points = sucker_points(&sim).unwrap();
        assert!(points < previous);
        assert_eq!(points, STARTING_POINTS - WEAR_OUT_COST * generation);
        previous = points;
    }

    let step = sim.step();
    assert_eq!(step.generation, 1000);
    assert_eq!(step.culled, 1);
    assert_eq!(sucker_points(&sim), None);

    let cheater = &sim.population().agents()[0];
    assert_eq!(cheater.kind(), StrategyKind::Cheater);
    assert_eq!(cheater.points(), STARTING_POINTS);
}

/// Extending by nobody and running again only adds the new generations
#[test]
fn test_extending_by_nobody_has_no_hidden_reset() {
    let config = config_of(&[(StrategyKind::TitForTat, 2), (StrategyKind::Grudger, 2)], 1000);

    let mut extended = Simulation::seeded(config.clone(), 99);
    extended.run().unwrap();
    assert_eq!(extended.extend(SimulationConfig::new(1000).unwrap()), 0);
    extended.run().unwrap();

    let mut straight = Simulation::seeded(config, 99);
    straight.run().unwrap();
    straight.run().unwrap();

    assert_eq!(extended.generation(), 2000);
    assert_eq!(extended.population().agents(), straight.population().agents());
}

/// Natural extinction ends the run cleanly and a later run is rejected
#[test]
fn test_extinction_then_empty_rerun() {
    let mut sim = Simulation::seeded(config_of(&[(StrategyKind::Cheater, 3)], 10_000), 1);
    let report = sim.run().unwrap();

    assert!(report.outcome.is_extinct());
    assert!(report.outcome.generation() < 10_000);
    assert!(report.final_snapshot().unwrap().is_extinct());
    assert!(sim.run().is_err());

    sim.extend(config_of(&[(StrategyKind::Sucker, 2)], 1000));
    let rerun = sim.run().unwrap();
    assert_eq!(rerun.snapshots[0].population_of("SUCKER"), 2);
    assert_eq!(rerun.snapshots[0].generation, report.outcome.generation());
}

/// Every live agent ends a generation with the expected upkeep applied
#[test]
fn test_mixed_population_keeps_invariants() {
    let config = SimulationConfig::uniform(StrategyKind::ALL, 10, 2000).unwrap();
    let mut sim = Simulation::seeded(config, 2024);
    let report = sim.run().unwrap();

    for snapshot in &report.snapshots {
        let names: Vec<&String> = snapshot.strategies.keys().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(snapshot.strategies.values().all(|s| s.population > 0));
    }
    assert!(sim.population().iter().all(Agent::survives));
    assert_eq!(sim.agents_spawned(), 70);
}
