//! Budgeted tree search.
//!
//! ## Overview
//!
//! One decision builds one `SearchTree` arena rooted at the current state
//! and walks it with a `Frontier`:
//!
//! - **Nodes**: state, producing action, parent index, `heuristic + depth` cost, depth
//! - **Frontiers**: FIFO queue, LIFO stack, cost-sorted queue
//! - **Expansion**: one child per successor the oracle hands back
//! - **Driver**: pop, classify, expand, push, react to depletion
//! - **Fallback**: cheapest removed node when no winning node appeared
//!
//! Everything here is dropped when the decision returns.
//!
//! ## Usage
//!
//! ```rust
//! use search_agents::games::table::TableGame;
//! use search_agents::rules::BudgetedModel;
//! use search_agents::search::{run_search, DriverPolicy, FifoQueue};
//!
//! let game = TableGame::new().edge(0, 'a', 1).edge(1, 'b', 2).win(2);
//! let heuristic = game.heuristic();
//! let mut model = BudgetedModel::unlimited(game);
//!
//! let result = run_search(
//!     &mut model,
//!     &heuristic,
//!     0,
//!     FifoQueue::new(),
//!     DriverPolicy::BREADTH_FIRST,
//!     64,
//! );
//! assert_eq!(result.first_action(), Some(&'a'));
//! ```

pub mod driver;
pub mod expand;
pub mod fallback;
pub mod frontier;
pub mod node;
pub mod stats;
pub mod tree;

pub use driver::{run_search, DriverPolicy, SearchResult};
pub use expand::{expand, DepletionMode, Expansion};
pub use fallback::select_fallback;
pub use frontier::{CostQueue, FifoQueue, Frontier, LifoStack};
pub use node::{NodeId, SearchNode};
pub use stats::{SearchOutcome, SearchStats};
pub use tree::SearchTree;
