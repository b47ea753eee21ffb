//! Breadth-first search agent.

use crate::core::AgentConfig;
use crate::search::{DriverPolicy, FifoQueue};

use super::search_agent::SearchAgent;

/// Breadth-first agent: expands shallow nodes first.
///
/// Children structurally equal to an already removed node are dropped. A
/// losing node that reaches the front of the queue is recorded but not
/// expanded.
pub type BfsAgent<H> = SearchAgent<H, FifoQueue>;

impl<H> SearchAgent<H, FifoQueue> {
    /// Create a breadth-first agent with the default configuration.
    pub fn new(heuristic: H) -> Self {
        Self::with_config(heuristic, AgentConfig::default())
    }

    /// Create a breadth-first agent with a custom configuration.
    pub fn with_config(heuristic: H, config: AgentConfig) -> Self {
        Self::build("BFSAgent", heuristic, DriverPolicy::BREADTH_FIRST, config)
    }
}
