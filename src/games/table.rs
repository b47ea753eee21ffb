//! Scripted world given as an explicit tree.
//!
//! States are `u32` labels and actions are `char` labels. Edges, winning and
//! losing states, and per-state heuristic values are declared up front,
//! which makes the expansion order of every agent fully predictable. Used by
//! tests and benchmarks.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::rules::{Heuristic, Rules};

/// Explicit-tree world.
#[derive(Clone, Debug, Default)]
pub struct TableGame {
    edges: FxHashMap<u32, Vec<(char, u32)>>,
    wins: FxHashSet<u32>,
    loses: FxHashSet<u32>,
    costs: FxHashMap<u32, f64>,
}

impl TableGame {
    /// Create an empty world: every state is a dead end with no actions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge `from --action--> to`. Actions are enumerated in the
    /// order their edges were added.
    #[must_use]
    pub fn edge(mut self, from: u32, action: char, to: u32) -> Self {
        self.edges.entry(from).or_default().push((action, to));
        self
    }

    /// Mark a state as a win.
    #[must_use]
    pub fn win(mut self, state: u32) -> Self {
        self.wins.insert(state);
        self
    }

    /// Mark a state as a loss.
    #[must_use]
    pub fn lose(mut self, state: u32) -> Self {
        self.loses.insert(state);
        self
    }

    /// Set the heuristic value of a state (default 0).
    #[must_use]
    pub fn cost(mut self, state: u32, value: f64) -> Self {
        self.costs.insert(state, value);
        self
    }

    /// Heuristic reading the declared per-state values.
    #[must_use]
    pub fn heuristic(&self) -> TableHeuristic {
        TableHeuristic {
            costs: self.costs.clone(),
        }
    }
}

impl Rules for TableGame {
    type State = u32;
    type Action = char;

    fn legal_actions(&self, state: &u32) -> Vec<char> {
        self.edges
            .get(state)
            .map(|edges| edges.iter().map(|&(action, _)| action).collect())
            .unwrap_or_default()
    }

    /// Unknown actions leave the state unchanged.
    fn apply(&self, state: &u32, action: &char) -> u32 {
        self.edges
            .get(state)
            .and_then(|edges| edges.iter().find(|(a, _)| a == action))
            .map_or(*state, |&(_, to)| to)
    }

    fn is_win(&self, state: &u32) -> bool {
        self.wins.contains(state)
    }

    fn is_lose(&self, state: &u32) -> bool {
        self.loses.contains(state)
    }
}

/// Per-state heuristic table for `TableGame`.
#[derive(Clone, Debug, Default)]
pub struct TableHeuristic {
    costs: FxHashMap<u32, f64>,
}

impl Heuristic<u32> for TableHeuristic {
    fn evaluate(&self, state: &u32) -> f64 {
        self.costs.get(state).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_in_declaration_order() {
        let game = TableGame::new().edge(0, 'z', 1).edge(0, 'a', 2).edge(1, 'b', 3);

        assert_eq!(game.legal_actions(&0), vec!['z', 'a']);
        assert_eq!(game.apply(&0, &'a'), 2);
        assert_eq!(game.apply(&1, &'b'), 3);
        assert!(game.legal_actions(&3).is_empty());
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let game = TableGame::new().edge(0, 'a', 1);
        assert_eq!(game.apply(&0, &'q'), 0);
        assert_eq!(game.apply(&5, &'a'), 5);
    }

    #[test]
    fn test_terminals_and_heuristic() {
        let game = TableGame::new().win(4).lose(5).cost(2, 3.5);
        let h = game.heuristic();

        assert!(game.is_win(&4));
        assert!(game.is_lose(&5));
        assert!(!game.is_terminal(&2));
        assert_eq!(h.evaluate(&2), 3.5);
        assert_eq!(h.evaluate(&9), 0.0);
    }
}
