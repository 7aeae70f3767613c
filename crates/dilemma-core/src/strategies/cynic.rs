//! Cynic: defects until shown cooperation, then trusts for good.

use std::collections::HashSet;

use crate::action::Action;
use crate::agent::AgentId;

use super::Strategy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cynic {
    trusted: HashSet<AgentId>,
}

impl Cynic {
    pub fn trusts(&self, other: AgentId) -> bool {
        self.trusted.contains(&other)
    }
}

impl Strategy for Cynic {
    fn decide(&self, other: AgentId) -> Action {
        if self.trusts(other) {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }

    fn react(&mut self, other: AgentId, other_action: Action) {
        if other_action == Action::Cooperate {
            self.trusted.insert(other);
        }
    }
}
