//! Sucker: cooperates with everyone, no matter what.

use crate::action::Action;
use crate::agent::AgentId;

use super::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sucker;

impl Strategy for Sucker {
    fn decide(&self, _other: AgentId) -> Action {
        Action::Cooperate
    }

    fn react(&mut self, _other: AgentId, _other_action: Action) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_cooperates() {
        let mut sucker = Sucker;
        assert_eq!(sucker.decide(AgentId(1)), Action::Cooperate);

        sucker.react(AgentId(1), Action::Defect);
        sucker.react(AgentId(1), Action::Defect);
        assert_eq!(sucker.decide(AgentId(1)), Action::Cooperate);
    }
}
