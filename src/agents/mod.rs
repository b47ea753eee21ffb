//! Decision-making agents.
//!
//! ## Overview
//!
//! Every agent answers one question per turn: which legal action to take
//! from the current state. The search agents build a fresh tree for each
//! decision against a budgeted `WorldModel`:
//!
//! - **`BfsAgent`**: breadth-first, FIFO frontier, duplicate suppression
//! - **`DfsAgent`**: depth-first, LIFO frontier
//! - **`BestFirstAgent`**: lowest `heuristic + depth` first
//!
//! All three return the first step toward a winning node when one is
//! generated, and otherwise the first step toward the cheapest node they
//! removed from the frontier. The trivial agents (`RandomAgent`,
//! `OneStepLookaheadAgent`) do no tree search.
//!
//! ## Usage
//!
//! ```rust
//! use search_agents::agents::{Agent, BestFirstAgent};
//! use search_agents::games::grid::{GridGame, PelletHeuristic};
//! use search_agents::rules::{BudgetedModel, WorldModel};
//!
//! let (game, state) = GridGame::parse("%%%%%\n%P..%\n%%%%%").unwrap();
//! let mut model = BudgetedModel::new(game, 100);
//! let mut agent = BestFirstAgent::new(PelletHeuristic::default());
//!
//! model.begin_decision();
//! let action = agent.get_action(&mut model, &state).unwrap();
//! assert!(model.legal_actions(&state).contains(&action));
//! ```

pub mod best_first;
pub mod bfs;
pub mod dfs;
pub mod lookahead;
pub mod random;
pub mod search_agent;

pub use best_first::BestFirstAgent;
pub use bfs::BfsAgent;
pub use dfs::DfsAgent;
pub use lookahead::OneStepLookaheadAgent;
pub use random::RandomAgent;
pub use search_agent::SearchAgent;

use crate::core::Result;
use crate::rules::WorldModel;

/// An agent the game loop asks for one action per turn.
pub trait Agent<M: WorldModel> {
    /// Display name used in logs.
    fn name(&self) -> &str;

    /// Called once before the first decision of a game.
    ///
    /// None of the bundled agents carry state between decisions.
    fn register_initial_state(&mut self, _state: &M::State) {}

    /// Choose an action for `state`.
    ///
    /// The returned action is always a member of `model.legal_actions(state)`.
    /// Fails only when that set is empty.
    fn get_action(&mut self, model: &mut M, state: &M::State) -> Result<M::Action>;
}
