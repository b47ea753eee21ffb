//! One-ply greedy lookahead agent.

use tracing::debug;

use crate::core::{AgentConfig, AgentError, AgentRng, Result};
use crate::rules::{Heuristic, Successor, WorldModel};

use super::search_agent::empty_pool_action;
use super::Agent;

/// Scores the successor of every legal action with the heuristic and picks
/// uniformly among the lowest-scoring actions.
///
/// Actions whose successor request comes back depleted are not candidates.
/// If every request is depleted, the configured empty-pool policy decides.
#[derive(Clone, Debug)]
pub struct OneStepLookaheadAgent<H> {
    heuristic: H,
    config: AgentConfig,
    rng: AgentRng,
}

impl<H> OneStepLookaheadAgent<H> {
    /// Create a lookahead agent with the default configuration.
    pub fn new(heuristic: H) -> Self {
        Self::with_config(heuristic, AgentConfig::default())
    }

    /// Create a lookahead agent with a custom configuration.
    pub fn with_config(heuristic: H, config: AgentConfig) -> Self {
        Self {
            heuristic,
            rng: AgentRng::new(config.seed),
            config,
        }
    }
}

impl<M, H> Agent<M> for OneStepLookaheadAgent<H>
where
    M: WorldModel,
    H: Heuristic<M::State>,
{
    fn name(&self) -> &str {
        "OneStepLookAheadAgent"
    }

    fn get_action(&mut self, model: &mut M, state: &M::State) -> Result<M::Action> {
        let legal = model.legal_actions(state);
        if legal.is_empty() {
            return Err(AgentError::NoLegalActions);
        }

        let mut scored = Vec::with_capacity(legal.len());
        for (index, action) in legal.iter().enumerate() {
            if let Successor::State(next) = model.generate_successor(state, action) {
                scored.push((self.heuristic.evaluate(&next), index));
            }
        }

        let Some(best) = scored
            .iter()
            .map(|&(score, _)| score)
            .min_by(f64::total_cmp)
        else {
            debug!("every successor request depleted, using empty-pool policy");
            return empty_pool_action(legal, self.config.empty_pool, &mut self.rng);
        };

        let best_actions: Vec<usize> = scored
            .iter()
            .filter(|&&(score, _)| score == best)
            .map(|&(_, index)| index)
            .collect();

        self.rng
            .choose(&best_actions)
            .map(|&index| legal[index].clone())
            .ok_or(AgentError::NoLegalActions)
    }
}
