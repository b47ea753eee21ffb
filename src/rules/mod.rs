//! World-model traits, the successor budget, and heuristics.

mod budget;
mod engine;
mod heuristic;

pub use budget::BudgetedModel;
pub use engine::{Rules, Successor, WorldModel};
pub use heuristic::{Heuristic, ZeroHeuristic};
