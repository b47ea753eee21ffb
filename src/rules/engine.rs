//! World-model traits consumed by the agents.
//!
//! Games implement `Rules` to define the world:
//! - What actions are legal
//! - How an action transforms a state
//! - Win/loss conditions
//!
//! Agents never see `Rules` directly. They talk to a `WorldModel`, which
//! adds the per-decision successor budget on top (see
//! [`BudgetedModel`](super::BudgetedModel)).

use std::fmt::Debug;

/// Outcome of a successor request.
///
/// Depletion is a regular control signal, not an error: once the oracle's
/// budget for the current decision runs out, every further request answers
/// `Depleted` until the next decision begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Successor<S> {
    /// The state reached by applying the action.
    State(S),
    /// The successor budget for this decision is exhausted.
    Depleted,
}

impl<S> Successor<S> {
    /// Check if this is the depletion signal.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        matches!(self, Successor::Depleted)
    }

    /// Convert into an `Option`, mapping `Depleted` to `None`.
    pub fn into_state(self) -> Option<S> {
        match self {
            Successor::State(state) => Some(state),
            Successor::Depleted => None,
        }
    }
}

/// Pure game rules.
///
/// ## Implementation Notes
///
/// - `legal_actions`: enumeration order matters, agents push children in it
/// - `apply`: must be deterministic, the same inputs always give the same state
/// - `is_win` / `is_lose`: mutually exclusive
pub trait Rules {
    /// World state. Equality is full structural equality.
    type State: Clone + PartialEq + Debug;

    /// Action applied by the controlled actor.
    type Action: Clone + PartialEq + Debug;

    /// Legal actions for the controlled actor in `state`.
    ///
    /// Returns empty if the actor can't act.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action, including any adversary response, and return the resulting state.
    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Favorable terminal state.
    fn is_win(&self, state: &Self::State) -> bool;

    /// Unfavorable terminal state.
    fn is_lose(&self, state: &Self::State) -> bool;

    /// Check if the game is over either way.
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.is_win(state) || self.is_lose(state)
    }
}

/// Budgeted oracle the search agents expand against.
pub trait WorldModel {
    /// World state. Equality is full structural equality.
    type State: Clone + PartialEq + Debug;

    /// Action applied by the controlled actor.
    type Action: Clone + PartialEq + Debug;

    /// Legal actions for the controlled actor in `state`.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Request the successor of `state` under `action`, consuming budget.
    fn generate_successor(
        &mut self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Successor<Self::State>;

    /// Favorable terminal state.
    fn is_win(&self, state: &Self::State) -> bool;

    /// Unfavorable terminal state.
    fn is_lose(&self, state: &Self::State) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_accessors() {
        let found: Successor<u32> = Successor::State(7);
        assert!(!found.is_depleted());
        assert_eq!(found.into_state(), Some(7));

        let depleted: Successor<u32> = Successor::Depleted;
        assert!(depleted.is_depleted());
        assert_eq!(depleted.into_state(), None);
    }
}
