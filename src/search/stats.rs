//! Per-decision search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// How a decision's action was resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A winning node was generated; its first step was returned.
    Goal,
    /// No winning node; the lowest-cost removed node was used.
    #[default]
    Fallback,
    /// Nothing usable was found; the empty-pool policy picked the action.
    EmptyPool,
}

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Child nodes allocated (root excluded).
    pub nodes_generated: u32,

    /// Nodes expanded.
    pub expansions: u32,

    /// Size of the removed-node collection at the end of the search,
    /// drained frontier nodes included.
    pub nodes_removed: u32,

    /// Maximum depth reached.
    pub max_depth: u32,

    /// Whether the oracle signalled depletion.
    pub depleted: bool,

    /// How the action was resolved.
    pub outcome: SearchOutcome,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Average children per expansion.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expansions == 0 {
            0.0
        } else {
            f64::from(self.nodes_generated) / f64::from(self.expansions)
        }
    }
}
