//! Episode runner.
//!
//! Drives one agent against a `Rules` implementation until the game is won,
//! lost or the turn limit is reached. Every turn gets a fresh successor
//! budget; the agent searches through a `BudgetedModel`, and the chosen
//! action is applied to the real state with `Rules::apply`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agents::Agent;
use crate::core::Result;
use crate::rules::{BudgetedModel, Rules};

/// Configuration for one episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeConfig {
    /// Turns before the episode is cut off.
    pub max_turns: u32,

    /// Successor requests allowed per decision.
    pub successor_budget: u32,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            max_turns: 500,
            successor_budget: 100,
        }
    }
}

impl EpisodeConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn limit.
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Set the per-decision successor budget.
    pub fn with_successor_budget(mut self, budget: u32) -> Self {
        self.successor_budget = budget;
        self
    }
}

/// How an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    /// The final state is a win.
    Win,
    /// The final state is a loss.
    Lose,
    /// `max_turns` reached with the game still running.
    TurnLimit,
}

/// Result of one episode.
#[derive(Clone, Debug)]
pub struct EpisodeReport<S, A> {
    /// Turns played.
    pub turns: u32,

    /// How the episode ended.
    pub outcome: EpisodeOutcome,

    /// Actions taken, in order.
    pub actions: Vec<A>,

    /// State when the episode ended.
    pub final_state: S,
}

/// Play one episode of `rules` from `initial` with `agent`.
///
/// Fails only if the agent does, i.e. a non-terminal state offers no legal
/// actions.
pub fn play_episode<R, G>(
    rules: R,
    agent: &mut G,
    initial: R::State,
    config: &EpisodeConfig,
) -> Result<EpisodeReport<R::State, R::Action>>
where
    R: Rules,
    G: Agent<BudgetedModel<R>> + ?Sized,
{
    let mut model = BudgetedModel::new(rules, config.successor_budget);
    let mut state = initial;
    let mut actions = Vec::new();

    agent.register_initial_state(&state);

    let outcome = loop {
        if model.rules().is_win(&state) {
            break EpisodeOutcome::Win;
        }
        if model.rules().is_lose(&state) {
            break EpisodeOutcome::Lose;
        }
        if actions.len() as u32 >= config.max_turns {
            break EpisodeOutcome::TurnLimit;
        }

        model.begin_decision();
        let action = agent.get_action(&mut model, &state)?;
        debug!(
            agent = agent.name(),
            turn = actions.len(),
            ?action,
            calls = model.calls(),
            "turn played"
        );

        state = model.rules().apply(&state, &action);
        actions.push(action);
    };

    debug!(agent = agent.name(), ?outcome, turns = actions.len(), "episode finished");

    Ok(EpisodeReport {
        turns: actions.len() as u32,
        outcome,
        actions,
        final_state: state,
    })
}
