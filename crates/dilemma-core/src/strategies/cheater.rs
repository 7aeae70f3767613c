//! Cheater: defects against everyone, no matter what.

use crate::action::Action;
use crate::agent::AgentId;

use super::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cheater;

impl Strategy for Cheater {
    fn decide(&self, _other: AgentId) -> Action {
        Action::Defect
    }

    fn react(&mut self, _other: AgentId, _other_action: Action) {}
}
