//! Strategies
//!
//! The decision/memory contract every agent follows, and the closed set of
//! seven strategies that implement it.

pub mod cheater;
pub mod cynic;
pub mod grudger;
pub mod pavlov;
pub mod sucker;
pub mod tit_for_tat;
pub mod traitor;

pub use cheater::Cheater;
pub use cynic::Cynic;
pub use grudger::Grudger;
pub use pavlov::Pavlov;
pub use sucker::Sucker;
pub use tit_for_tat::TitForTat;
pub use traitor::{Traitor, TraitorMemory, MAX_DEFECTS_FROM_OTHER};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::action::Action;
use crate::agent::AgentId;
use crate::config::ConfigError;

/// Decision and memory of a single agent.
///
/// `decide` must not change any state: both sides of an encounter decide from
/// their pre-encounter memory. `react` is the only place memory is written and
/// is called once per encounter, after both actions are known.
pub trait Strategy {
    /// Choose an action against the agent `other`
    fn decide(&self, other: AgentId) -> Action;

    /// Observe what `other` did in the encounter that just finished
    fn react(&mut self, other: AgentId, other_action: Action);
}

/// Identifies one of the seven strategies.
///
/// Variant order is the order in which a configuration spawns its batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Sucker,
    Cheater,
    Grudger,
    TitForTat,
    Traitor,
    Cynic,
    Pavlov,
}

impl StrategyKind {
    /// All strategies in spawn order
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::Sucker,
        StrategyKind::Cheater,
        StrategyKind::Grudger,
        StrategyKind::TitForTat,
        StrategyKind::Traitor,
        StrategyKind::Cynic,
        StrategyKind::Pavlov,
    ];

    /// Upper-case display name used in stats
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Sucker => "SUCKER",
            StrategyKind::Cheater => "CHEATER",
            StrategyKind::Grudger => "GRUDGER",
            StrategyKind::TitForTat => "TITFORTAT",
            StrategyKind::Traitor => "TRAITOR",
            StrategyKind::Cynic => "CYNIC",
            StrategyKind::Pavlov => "PAVLOV",
        }
    }

    /// snake_case key used in config files
    pub fn key(self) -> &'static str {
        match self {
            StrategyKind::Sucker => "sucker",
            StrategyKind::Cheater => "cheater",
            StrategyKind::Grudger => "grudger",
            StrategyKind::TitForTat => "tit_for_tat",
            StrategyKind::Traitor => "traitor",
            StrategyKind::Cynic => "cynic",
            StrategyKind::Pavlov => "pavlov",
        }
    }

    /// A fresh behavior of this kind with empty memory
    pub fn spawn(self) -> Behavior {
        match self {
            StrategyKind::Sucker => Behavior::Sucker(Sucker),
            StrategyKind::Cheater => Behavior::Cheater(Cheater),
            StrategyKind::Grudger => Behavior::Grudger(Grudger::default()),
            StrategyKind::TitForTat => Behavior::TitForTat(TitForTat::default()),
            StrategyKind::Traitor => Behavior::Traitor(Traitor::default()),
            StrategyKind::Cynic => Behavior::Cynic(Cynic::default()),
            StrategyKind::Pavlov => Behavior::Pavlov(Pavlov::default()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    /// Accepts the config key or the display name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted || kind.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

/// A strategy together with its memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    Sucker(Sucker),
    Cheater(Cheater),
    Grudger(Grudger),
    TitForTat(TitForTat),
    Traitor(Traitor),
    Cynic(Cynic),
    Pavlov(Pavlov),
}

impl Behavior {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Behavior::Sucker(_) => StrategyKind::Sucker,
            Behavior::Cheater(_) => StrategyKind::Cheater,
            Behavior::Grudger(_) => StrategyKind::Grudger,
            Behavior::TitForTat(_) => StrategyKind::TitForTat,
            Behavior::Traitor(_) => StrategyKind::Traitor,
            Behavior::Cynic(_) => StrategyKind::Cynic,
            Behavior::Pavlov(_) => StrategyKind::Pavlov,
        }
    }

    fn as_strategy(&self) -> &dyn Strategy {
        match self {
            Behavior::Sucker(s) => s,
            Behavior::Cheater(s) => s,
            Behavior::Grudger(s) => s,
            Behavior::TitForTat(s) => s,
            Behavior::Traitor(s) => s,
            Behavior::Cynic(s) => s,
            Behavior::Pavlov(s) => s,
        }
    }

    fn as_strategy_mut(&mut self) -> &mut dyn Strategy {
        match self {
            Behavior::Sucker(s) => s,
            Behavior::Cheater(s) => s,
            Behavior::Grudger(s) => s,
            Behavior::TitForTat(s) => s,
            Behavior::Traitor(s) => s,
            Behavior::Cynic(s) => s,
            Behavior::Pavlov(s) => s,
        }
    }
}

impl Strategy for Behavior {
    fn decide(&self, other: AgentId) -> Action {
        self.as_strategy().decide(other)
    }

    fn react(&mut self, other: AgentId, other_action: Action) {
        self.as_strategy_mut().react(other, other_action)
    }
}
