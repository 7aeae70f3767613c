//! TitForTat: opens with cooperation, then mirrors the counterpart's last move.

use std::collections::HashMap;

use crate::action::Action;
use crate::agent::AgentId;

use super::Strategy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitForTat {
    last_seen: HashMap<AgentId, Action>,
}

impl Strategy for TitForTat {
    fn decide(&self, other: AgentId) -> Action {
        self.last_seen.get(&other).copied().unwrap_or(Action::Cooperate)
    }

    fn react(&mut self, other: AgentId, other_action: Action) {
        self.last_seen.insert(other, other_action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_with_cooperation() {
        let tft = TitForTat::default();
        assert_eq!(tft.decide(AgentId(1)), Action::Cooperate);
    }

    #[test]
    fn test_mirrors_most_recent_action() {
        let mut tft = TitForTat::default();
        let moves = [
            Action::Defect,
            Action::Defect,
            Action::Cooperate,
            Action::Defect,
            Action::Cooperate,
        ];

        for action in moves {
            tft.react(AgentId(1), action);
            assert_eq!(tft.decide(AgentId(1)), action);
        }
        assert_eq!(tft.decide(AgentId(2)), Action::Cooperate);
    }
}
