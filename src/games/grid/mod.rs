//! Pellet maze for exercising the agents.
//!
//! A small adversarial grid world:
//! - The player moves one cell per turn (or stops)
//! - Eating every pellet wins
//! - Ghosts chase the player after each move; being caught loses
//!
//! Layouts are plain ASCII, see [`GridGame::parse`].

mod game;
mod heuristic;
mod layout;

pub use game::{GridGame, GridState, Pos, LOSE_SCORE, PELLET_SCORE, TIME_PENALTY, WIN_SCORE};
pub use heuristic::{GhostAwareHeuristic, PelletHeuristic};
pub use layout::LayoutError;
