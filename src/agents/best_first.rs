//! Best-first (heuristic-ordered) search agent.

use crate::core::AgentConfig;
use crate::search::{CostQueue, DriverPolicy};

use super::search_agent::SearchAgent;

/// Best-first agent: always expands the globally cheapest known node.
///
/// Cost is `heuristic(state) + depth`. A depletion while expanding a node
/// abandons that node's remaining actions and ends the search.
pub type BestFirstAgent<H> = SearchAgent<H, CostQueue>;

impl<H> SearchAgent<H, CostQueue> {
    /// Create a best-first agent with the default configuration.
    pub fn new(heuristic: H) -> Self {
        Self::with_config(heuristic, AgentConfig::default())
    }

    /// Create a best-first agent with a custom configuration.
    pub fn with_config(heuristic: H, config: AgentConfig) -> Self {
        Self::build("AStarAgent", heuristic, DriverPolicy::BEST_FIRST, config)
    }
}
