//! Grudger: cooperates until betrayed, then never forgives.

use std::collections::HashSet;

use crate::action::Action;
use crate::agent::AgentId;

use super::Strategy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grudger {
    distrusted: HashSet<AgentId>,
}

impl Grudger {
    pub fn distrusts(&self, other: AgentId) -> bool {
        self.distrusted.contains(&other)
    }
}

impl Strategy for Grudger {
    fn decide(&self, other: AgentId) -> Action {
        if self.distrusts(other) {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }

    fn react(&mut self, other: AgentId, other_action: Action) {
        if other_action == Action::Defect {
            self.distrusted.insert(other);
        }
    }
}
