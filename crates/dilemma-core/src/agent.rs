//! Agents: an identity, a points balance and a strategy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::action::Action;
use crate::strategies::{Behavior, Strategy, StrategyKind};

/// Points every agent is created with
pub const STARTING_POINTS: i64 = 5_000;

/// Points an agent loses to wear every generation
pub const WEAR_OUT_COST: i64 = 5;

/// Unique identifier for an agent, never reused within an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent_{:06}", self.0)
    }
}

/// Hands out agent ids in increasing order
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> AgentId {
        let id = AgentId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}

/// A single member of the population
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    id: AgentId,
    points: i64,
    behavior: Behavior,
}

impl Agent {
    /// Create an agent with a fresh id, starting points and empty memory
    pub fn new(kind: StrategyKind, ids: &mut IdSequence) -> Self {
        Self {
            id: ids.next_id(),
            points: STARTING_POINTS,
            behavior: kind.spawn(),
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn kind(&self) -> StrategyKind {
        self.behavior.kind()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Action this agent takes against `other`, from current memory only
    pub fn decide(&self, other: AgentId) -> Action {
        self.behavior.decide(other)
    }

    /// Let the strategy observe the counterpart's action
    pub fn react(&mut self, other: AgentId, other_action: Action) {
        self.behavior.react(other, other_action);
    }

    pub(crate) fn award(&mut self, points: i64) {
        self.points += points;
    }

    /// Pay the per-generation upkeep, even if it drives points below zero
    pub fn wear_out(&mut self) {
        self.points -= WEAR_OUT_COST;
    }

    pub fn survives(&self) -> bool {
        self.points > 0
    }
}
