//! # rust-search-agents
//!
//! Budgeted tree-search agents for turn-based grid worlds.
//!
//! ## Design Principles
//!
//! 1. **Oracle-Owned Budget**: Agents never count successor calls themselves.
//!    The world model answers `Successor::Depleted` once the per-decision
//!    budget is spent, and every driver falls back to its best removed node.
//!
//! 2. **One Loop, Three Frontiers**: Breadth-first, depth-first and
//!    best-first search share a single driver; only the frontier type and a
//!    small `DriverPolicy` differ.
//!
//! 3. **Per-Decision Arena**: Each decision builds a fresh `SearchTree` with
//!    index parent links, dropped when the action is returned.
//!
//! ## Modules
//!
//! - `core`: Directions, RNG, configuration, errors
//! - `rules`: `Rules` and `WorldModel` traits, budgeted oracle, heuristics
//! - `search`: Nodes, arena, frontiers, expansion, fallback, the driver loop
//! - `agents`: The `Agent` trait and the search, random and lookahead agents
//! - `games`: Pellet maze and a scripted table world
//! - `play`: Episode runner

pub mod core;
pub mod rules;
pub mod search;
pub mod agents;
pub mod games;
pub mod play;

// Re-export commonly used types
pub use crate::core::{AgentConfig, AgentError, AgentRng, Direction, EmptyPoolPolicy, Result};

pub use crate::rules::{BudgetedModel, Heuristic, Rules, Successor, WorldModel, ZeroHeuristic};

pub use crate::search::{
    run_search, CostQueue, DepletionMode, DriverPolicy, FifoQueue, Frontier, LifoStack, NodeId,
    SearchNode, SearchOutcome, SearchResult, SearchStats, SearchTree,
};

pub use crate::agents::{
    Agent, BestFirstAgent, BfsAgent, DfsAgent, OneStepLookaheadAgent, RandomAgent, SearchAgent,
};

pub use crate::games::grid::{
    GhostAwareHeuristic, GridGame, GridState, LayoutError, PelletHeuristic, Pos,
};
pub use crate::games::table::{TableGame, TableHeuristic};

pub use crate::play::{play_episode, EpisodeConfig, EpisodeOutcome, EpisodeReport};
