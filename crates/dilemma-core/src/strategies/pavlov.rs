//! Pavlov: win-stay, lose-shift.
//!
//! Any encounter where the counterpart defects is a bad payoff, so Pavlov
//! switches its move against that counterpart. A cooperating counterpart is a
//! good payoff and the move is kept.

use std::collections::HashMap;

use crate::action::Action;
use crate::agent::AgentId;

use super::Strategy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pavlov {
    own_moves: HashMap<AgentId, Action>,
}

impl Strategy for Pavlov {
    fn decide(&self, other: AgentId) -> Action {
        self.own_moves.get(&other).copied().unwrap_or(Action::Cooperate)
    }

    fn react(&mut self, other: AgentId, other_action: Action) {
        let own = self.own_moves.entry(other).or_insert(Action::Cooperate);
        if other_action == Action::Defect {
            *own = !*own;
        }
    }
}
