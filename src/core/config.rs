//! Agent configuration parameters.

use serde::{Deserialize, Serialize};

/// What an agent returns when a search ends with nothing to choose from.
///
/// This happens when the removed-node collection holds only the root (for
/// example the very first successor request was already depleted) or when
/// the chosen node turns out to be the root itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyPoolPolicy {
    /// The first action in the root's legal-action enumeration.
    #[default]
    FirstLegal,
    /// A uniformly chosen legal action, drawn from the agent's seeded RNG.
    Random,
}

/// Agent configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Seed for the agent's RNG.
    /// Same seed produces the same decisions.
    pub seed: u64,

    /// Resolution used when the fallback pool is empty.
    pub empty_pool: EmptyPoolPolicy,

    /// Initial capacity of the per-decision node arena.
    pub arena_capacity: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            empty_pool: EmptyPoolPolicy::FirstLegal,
            arena_capacity: 4096,
        }
    }
}

impl AgentConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom empty-pool policy.
    pub fn with_empty_pool(mut self, policy: EmptyPoolPolicy) -> Self {
        self.empty_pool = policy;
        self
    }

    /// Create a new config with a custom arena capacity.
    pub fn with_arena_capacity(mut self, capacity: usize) -> Self {
        self.arena_capacity = capacity;
        self
    }
}
