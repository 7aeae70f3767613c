//! Iterated prisoner's dilemma simulation engine.
//!
//! A population of strategy-driven agents meets pairwise every generation,
//! trades points through the classic payoff table, pays a fixed upkeep and is
//! culled once it runs out of points.

pub mod action;
pub mod agent;
pub mod config;
pub mod engine;
pub mod interaction;
pub mod output;
pub mod population;
pub mod strategies;

pub use action::Action;
pub use agent::{Agent, AgentId, IdSequence, STARTING_POINTS, WEAR_OUT_COST};
pub use config::{ConfigError, SimulationConfig, MIN_GENERATIONS};
pub use engine::{EngineError, GenerationStep, Simulation, SNAPSHOT_INTERVAL};
pub use interaction::{interact, Encounter, Payoff};
pub use population::Population;
pub use strategies::{Behavior, Strategy, StrategyKind};

pub use dilemma_events::{
    GenerationSnapshot, RunOutcome, RunReport, SimEvent, SnapshotReason, StrategyStats,
};
