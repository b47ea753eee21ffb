//! Seeded randomness for agents.
//!
//! Uniform choice, tie-breaking and the random empty-pool fallback all draw
//! from an `AgentRng` built from `AgentConfig::seed`, so an episode replays
//! identically from the same seed.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// ChaCha8-backed RNG that remembers its seed.
#[derive(Clone, Debug)]
pub struct AgentRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl AgentRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick one element uniformly. `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
