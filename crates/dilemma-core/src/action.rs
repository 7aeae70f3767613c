//! The two moves available in every encounter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

/// A move in a single prisoner's dilemma encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Cooperate,
    Defect,
}

impl Not for Action {
    type Output = Action;

    fn not(self) -> Action {
        match self {
            Action::Cooperate => Action::Defect,
            Action::Defect => Action::Cooperate,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Cooperate => write!(f, "COOPERATE"),
            Action::Defect => write!(f, "DEFECT"),
        }
    }
}
