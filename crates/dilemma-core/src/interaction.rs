//! Interaction Protocol
//!
//! One prisoner's dilemma encounter between two agents.

use crate::action::Action;
use crate::agent::Agent;

/// Points awarded to each side of an encounter
pub mod payoff {
    /// Both cooperate
    pub const MUTUAL_COOPERATION: i64 = 3;
    /// Both defect
    pub const MUTUAL_DEFECTION: i64 = 1;
    /// Defecting against a cooperator
    pub const TEMPTATION: i64 = 5;
    /// Cooperating with a defector
    pub const SUCKER: i64 = 0;
}

/// Points awarded to (first, second) for an action pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payoff {
    pub first: i64,
    pub second: i64,
}

impl Payoff {
    /// Look up the payoff table for the ordered pair of actions
    pub fn for_actions(first: Action, second: Action) -> Self {
        let (first, second) = match (first, second) {
            (Action::Cooperate, Action::Cooperate) => {
                (payoff::MUTUAL_COOPERATION, payoff::MUTUAL_COOPERATION)
            }
            (Action::Cooperate, Action::Defect) => (payoff::SUCKER, payoff::TEMPTATION),
            (Action::Defect, Action::Cooperate) => (payoff::TEMPTATION, payoff::SUCKER),
            (Action::Defect, Action::Defect) => {
                (payoff::MUTUAL_DEFECTION, payoff::MUTUAL_DEFECTION)
            }
        };
        Self { first, second }
    }
}

/// Record of what happened in one encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encounter {
    pub first_action: Action,
    pub second_action: Action,
    pub payoff: Payoff,
}

/// Run one encounter between `first` and `second`.
///
/// Both actions are chosen before either agent reacts, so neither side sees
/// anything from the current encounter when deciding.
pub fn interact(first: &mut Agent, second: &mut Agent) -> Encounter {
    let first_action = first.decide(second.id());
    let second_action = second.decide(first.id());

    let payoff = Payoff::for_actions(first_action, second_action);
    first.award(payoff.first);
    second.award(payoff.second);

    first.react(second.id(), second_action);
    second.react(first.id(), first_action);

    Encounter {
        first_action,
        second_action,
        payoff,
    }
}
