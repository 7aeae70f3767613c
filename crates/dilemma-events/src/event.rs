//! Events emitted while a run is in progress, and the report of a finished run.

use serde::{Deserialize, Serialize};

use crate::snapshot::GenerationSnapshot;

/// Something observable that happened during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    /// A stats snapshot was taken
    Snapshot(GenerationSnapshot),
    /// The last agents were culled on this generation
    Extinction { generation: u64 },
    /// A new batch of agents joined the population
    PopulationExtended { generation: u64, added: usize },
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// All configured generations ran; `generation` is the last one
    Completed { generation: u64 },
    /// The population died out on `generation`
    Extinct { generation: u64 },
}

impl RunOutcome {
    /// The generation the run stopped on
    pub fn generation(&self) -> u64 {
        match self {
            RunOutcome::Completed { generation } | RunOutcome::Extinct { generation } => {
                *generation
            }
        }
    }

    pub fn is_extinct(&self) -> bool {
        matches!(self, RunOutcome::Extinct { .. })
    }
}

/// Everything a single run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub snapshots: Vec<GenerationSnapshot>,
}

impl RunReport {
    /// The last snapshot taken during the run
    pub fn final_snapshot(&self) -> Option<&GenerationSnapshot> {
        self.snapshots.last()
    }
}
