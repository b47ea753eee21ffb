//! Heuristics for the pellet maze.

use serde::{Deserialize, Serialize};

use crate::rules::Heuristic;

use super::game::GridState;

/// Pellets left (weighted) plus the distance to the nearest pellet.
///
/// Zero once the maze is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PelletHeuristic {
    /// Cost per remaining pellet.
    pub pellet_weight: f64,
}

impl Default for PelletHeuristic {
    fn default() -> Self {
        Self { pellet_weight: 10.0 }
    }
}

impl Heuristic<GridState> for PelletHeuristic {
    fn evaluate(&self, state: &GridState) -> f64 {
        match state.nearest_pellet_distance() {
            Some(distance) => {
                state.pellets_left() as f64 * self.pellet_weight + f64::from(distance)
            }
            None => 0.0,
        }
    }
}

/// `PelletHeuristic` plus a flat penalty while a ghost is close.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GhostAwareHeuristic {
    /// Pellet component.
    pub pellets: PelletHeuristic,

    /// Manhattan distance at or below which a ghost counts as close.
    pub radius: u32,

    /// Penalty added while a ghost is close.
    pub penalty: f64,
}

impl Default for GhostAwareHeuristic {
    fn default() -> Self {
        Self {
            pellets: PelletHeuristic::default(),
            radius: 1,
            penalty: 100.0,
        }
    }
}

impl Heuristic<GridState> for GhostAwareHeuristic {
    fn evaluate(&self, state: &GridState) -> f64 {
        let base = self.pellets.evaluate(state);
        match state.nearest_ghost_distance() {
            Some(distance) if distance <= self.radius => base + self.penalty,
            _ => base,
        }
    }
}
