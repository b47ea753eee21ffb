//! Frontier-generic tree-search agent.
//!
//! `SearchAgent` ties a heuristic, a frontier type and a `DriverPolicy`
//! together and turns a finished search into a concrete action. The
//! breadth-first, depth-first and best-first agents are instantiations of it
//! (see the sibling modules).

use std::marker::PhantomData;

use tracing::debug;

use crate::core::{AgentConfig, AgentError, AgentRng, EmptyPoolPolicy, Result};
use crate::rules::{Heuristic, WorldModel};
use crate::search::{run_search, DriverPolicy, Frontier, SearchOutcome, SearchStats};

use super::Agent;

/// Tree-search agent over frontier type `F`.
#[derive(Clone, Debug)]
pub struct SearchAgent<H, F> {
    name: &'static str,
    heuristic: H,
    policy: DriverPolicy,
    config: AgentConfig,
    rng: AgentRng,
    stats: SearchStats,
    frontier: PhantomData<F>,
}

impl<H, F> SearchAgent<H, F> {
    pub(crate) fn build(
        name: &'static str,
        heuristic: H,
        policy: DriverPolicy,
        config: AgentConfig,
    ) -> Self {
        Self {
            name,
            heuristic,
            policy,
            rng: AgentRng::new(config.seed),
            config,
            stats: SearchStats::default(),
            frontier: PhantomData,
        }
    }

    /// Statistics of the most recent decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The agent's configuration.
    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The heuristic used for node costs.
    #[must_use]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// The driver policy this agent searches with.
    #[must_use]
    pub fn policy(&self) -> DriverPolicy {
        self.policy
    }
}

impl<M, H, F> Agent<M> for SearchAgent<H, F>
where
    M: WorldModel,
    H: Heuristic<M::State>,
    F: Frontier + Default,
{
    fn name(&self) -> &str {
        self.name
    }

    fn get_action(&mut self, model: &mut M, state: &M::State) -> Result<M::Action> {
        let legal = model.legal_actions(state);
        if legal.is_empty() {
            return Err(AgentError::NoLegalActions);
        }

        let result = run_search(
            model,
            &self.heuristic,
            state.clone(),
            F::default(),
            self.policy,
            self.config.arena_capacity,
        );
        self.stats = result.stats.clone();

        if let Some(action) = result.first_action() {
            debug!(
                agent = self.name,
                ?action,
                outcome = ?self.stats.outcome,
                expansions = self.stats.expansions,
                removed = self.stats.nodes_removed,
                "decision made"
            );
            return Ok(action.clone());
        }

        self.stats.outcome = SearchOutcome::EmptyPool;
        let action = empty_pool_action(legal, self.config.empty_pool, &mut self.rng)?;
        debug!(
            agent = self.name,
            ?action,
            policy = ?self.config.empty_pool,
            "fallback pool empty, using empty-pool policy"
        );
        Ok(action)
    }
}

/// Resolve an action from the root's legal actions when the search produced nothing.
pub(crate) fn empty_pool_action<A: Clone>(
    legal: Vec<A>,
    policy: EmptyPoolPolicy,
    rng: &mut AgentRng,
) -> Result<A> {
    let action = match policy {
        EmptyPoolPolicy::FirstLegal => legal.into_iter().next(),
        EmptyPoolPolicy::Random => rng.choose(&legal).cloned(),
    };
    action.ok_or(AgentError::NoLegalActions)
}
