//! Uniform random agent.

use crate::core::{AgentConfig, AgentError, AgentRng, Result};
use crate::rules::WorldModel;

use super::Agent;

/// Picks uniformly among the legal actions. Never touches the successor budget.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: AgentRng,
}

impl RandomAgent {
    /// Create a random agent with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: AgentRng::new(seed),
        }
    }

    /// Create a random agent seeded from `config`.
    #[must_use]
    pub fn with_config(config: &AgentConfig) -> Self {
        Self::new(config.seed)
    }
}

impl<M: WorldModel> Agent<M> for RandomAgent {
    fn name(&self) -> &str {
        "RandomAgent"
    }

    fn get_action(&mut self, model: &mut M, state: &M::State) -> Result<M::Action> {
        let legal = model.legal_actions(state);
        self.rng
            .choose(&legal)
            .cloned()
            .ok_or(AgentError::NoLegalActions)
    }
}
