//! Traitor: exploits cooperators, but gives defectors a couple of chances.
//!
//! Opens with cooperation. After a counterpart cooperates, Traitor defects
//! to cash in. After a counterpart defects, Traitor cooperates again until the
//! counterpart has defected `MAX_DEFECTS_FROM_OTHER` times in a row, at which
//! point it writes them off and defects.

use std::collections::HashMap;

use crate::action::Action;
use crate::agent::AgentId;

use super::Strategy;

/// Consecutive defections after which Traitor stops offering cooperation
pub const MAX_DEFECTS_FROM_OTHER: u64 = 2;

/// What Traitor remembers about a single counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitorMemory {
    pub last_action: Action,
    pub consecutive_defects: u64,
}

impl TraitorMemory {
    fn record(&mut self, action: Action) {
        self.last_action = action;
        match action {
            Action::Cooperate => self.consecutive_defects = 0,
            Action::Defect => self.consecutive_defects = self.consecutive_defects.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Traitor {
    memory: HashMap<AgentId, TraitorMemory>,
}

impl Traitor {
    pub fn memory_of(&self, other: AgentId) -> Option<&TraitorMemory> {
        self.memory.get(&other)
    }
}

impl Strategy for Traitor {
    fn decide(&self, other: AgentId) -> Action {
        let Some(memory) = self.memory.get(&other) else {
            return Action::Cooperate;
        };

        if memory.last_action != Action::Cooperate
            && memory.consecutive_defects < MAX_DEFECTS_FROM_OTHER
        {
            return Action::Cooperate;
        }

        Action::Defect
    }

    fn react(&mut self, other: AgentId, other_action: Action) {
        self.memory
            .entry(other)
            .or_insert(TraitorMemory {
                last_action: other_action,
                consecutive_defects: 0,
            })
            .record(other_action);
    }
}
