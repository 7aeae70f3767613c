//! Shared report types for the prisoner's dilemma simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The engine produces them; drivers (CLI, JSON export) consume them.

pub mod event;
pub mod snapshot;

// Re-export snapshot types
pub use snapshot::{GenerationSnapshot, SnapshotReason, StrategyStats};

// Re-export event types
pub use event::{RunOutcome, RunReport, SimEvent};
