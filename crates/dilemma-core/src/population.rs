//! Population
//!
//! The ordered collection of live agents and the per-generation passes over it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::agent::{Agent, AgentId, IdSequence};
use crate::config::SimulationConfig;
use crate::interaction::interact;

#[derive(Debug, Clone, Default)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a population from a config, strategy batches in spawn order
    pub fn spawn(config: &SimulationConfig, ids: &mut IdSequence) -> Self {
        let mut population = Self::new();
        population.extend_from(config, ids);
        population
    }

    /// Append a fresh batch for every strategy in `config`.
    ///
    /// Existing agents keep their points and memory. Returns the number added.
    pub fn extend_from(&mut self, config: &SimulationConfig, ids: &mut IdSequence) -> usize {
        let before = self.agents.len();
        for (kind, count) in config.strategies() {
            self.agents.extend((0..count).map(|_| Agent::new(kind, ids)));
        }
        self.agents.len() - before
    }

    /// Add a single agent
    pub fn push(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id() == id)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.agents.shuffle(rng);
    }

    /// Let every adjacent pair meet once, then wear everyone out once.
    ///
    /// Agent `i` meets `i + 1` and then pays its upkeep, so inner agents meet
    /// both neighbours while the ends meet one. The last agent has no right
    /// neighbour and pays its upkeep after the loop. Returns the number of
    /// encounters.
    pub fn run_encounters(&mut self) -> usize {
        let mut encounters = 0;
        for i in 1..self.agents.len() {
            let (left, right) = self.agents.split_at_mut(i);
            let first = &mut left[i - 1];
            interact(first, &mut right[0]);
            first.wear_out();
            encounters += 1;
        }
        if let Some(last) = self.agents.last_mut() {
            last.wear_out();
        }
        encounters
    }

    /// Remove every agent that ran out of points. Returns the number removed.
    pub fn cull(&mut self) -> usize {
        let before = self.agents.len();
        self.agents.retain(Agent::survives);
        before - self.agents.len()
    }
}
