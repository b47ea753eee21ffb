//! Depth-first search agent.

use crate::core::AgentConfig;
use crate::search::{DriverPolicy, LifoStack};

use super::search_agent::SearchAgent;

/// Depth-first agent: follows the most recently generated child first.
///
/// Children are pushed in legal-action order, so the last enumerated action
/// is explored first. No duplicate suppression; losing nodes are skipped
/// without being recorded.
pub type DfsAgent<H> = SearchAgent<H, LifoStack>;

impl<H> SearchAgent<H, LifoStack> {
    /// Create a depth-first agent with the default configuration.
    pub fn new(heuristic: H) -> Self {
        Self::with_config(heuristic, AgentConfig::default())
    }

    /// Create a depth-first agent with a custom configuration.
    pub fn with_config(heuristic: H, config: AgentConfig) -> Self {
        Self::build("DFSAgent", heuristic, DriverPolicy::DEPTH_FIRST, config)
    }
}
