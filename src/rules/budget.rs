//! Per-decision successor budget.
//!
//! `BudgetedModel` wraps a pure `Rules` implementation and turns it into a
//! `WorldModel`: each `generate_successor` call spends one unit, and once the
//! allowance is gone every request answers `Successor::Depleted` until the
//! surrounding game loop calls [`BudgetedModel::begin_decision`].

use super::engine::{Rules, Successor, WorldModel};

/// A `Rules` implementation with a per-decision successor budget.
#[derive(Clone, Debug)]
pub struct BudgetedModel<R> {
    rules: R,
    budget: Option<u32>,
    calls: u32,
}

impl<R: Rules> BudgetedModel<R> {
    /// Wrap `rules` with `budget` successor requests per decision.
    pub fn new(rules: R, budget: u32) -> Self {
        Self {
            rules,
            budget: Some(budget),
            calls: 0,
        }
    }

    /// Wrap `rules` without any budget. Never depletes.
    pub fn unlimited(rules: R) -> Self {
        Self {
            rules,
            budget: None,
            calls: 0,
        }
    }

    /// Reset the allowance for a new decision.
    pub fn begin_decision(&mut self) {
        self.calls = 0;
    }

    /// Successor requests made since the last `begin_decision`.
    ///
    /// Requests answered with `Depleted` are not counted.
    #[must_use]
    pub fn calls(&self) -> u32 {
        self.calls
    }

    /// Requests left in this decision (`None` when unlimited).
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.budget.map(|b| b.saturating_sub(self.calls))
    }

    /// The configured per-decision budget (`None` when unlimited).
    #[must_use]
    pub fn budget(&self) -> Option<u32> {
        self.budget
    }

    /// The wrapped rules.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }
}

impl<R: Rules> WorldModel for BudgetedModel<R> {
    type State = R::State;
    type Action = R::Action;

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.rules.legal_actions(state)
    }

    fn generate_successor(
        &mut self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Successor<Self::State> {
        if self.remaining() == Some(0) {
            return Successor::Depleted;
        }
        self.calls += 1;
        Successor::State(self.rules.apply(state, action))
    }

    fn is_win(&self, state: &Self::State) -> bool {
        self.rules.is_win(state)
    }

    fn is_lose(&self, state: &Self::State) -> bool {
        self.rules.is_lose(state)
    }
}
