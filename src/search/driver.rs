//! The search loop shared by the breadth-first, depth-first and best-first
//! drivers.
//!
//! A driver owns one frontier and one removed-node collection. It alternates
//! between removing a node, classifying it, expanding it and checking for
//! depletion, and stops on the first winning child, on an empty frontier, or
//! on depletion (after draining the frontier into the removed collection).
//! The three strategies differ only in the frontier they hand in and in the
//! `DriverPolicy` flags below.

use tracing::{debug, trace};

use crate::rules::{Heuristic, WorldModel};

use super::expand::{expand, DepletionMode};
use super::fallback::select_fallback;
use super::frontier::Frontier;
use super::node::NodeId;
use super::stats::{SearchOutcome, SearchStats};
use super::tree::SearchTree;

/// Per-strategy behaviour switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverPolicy {
    /// Record a removed losing node in the removed collection before
    /// skipping it. When false, losing nodes are skipped without a trace.
    pub record_unfavorable: bool,

    /// Drop children structurally equal to a node already removed.
    pub skip_duplicates: bool,

    /// Expansion behaviour on depletion.
    pub depletion: DepletionMode,
}

impl DriverPolicy {
    /// Breadth-first: record losing nodes, suppress duplicates, keep asking after depletion.
    pub const BREADTH_FIRST: Self = Self {
        record_unfavorable: true,
        skip_duplicates: true,
        depletion: DepletionMode::RecordAndContinue,
    };

    /// Depth-first: skip losing nodes entirely, no duplicate suppression.
    pub const DEPTH_FIRST: Self = Self {
        record_unfavorable: false,
        skip_duplicates: false,
        depletion: DepletionMode::RecordAndContinue,
    };

    /// Best-first: like depth-first, but stop a node's expansion at the first depletion.
    pub const BEST_FIRST: Self = Self {
        record_unfavorable: false,
        skip_duplicates: false,
        depletion: DepletionMode::StopOnFirst,
    };
}

/// Everything a finished search leaves behind.
#[derive(Clone, Debug)]
pub struct SearchResult<S, A> {
    /// The decision's node arena.
    pub tree: SearchTree<S, A>,

    /// Nodes removed from the frontier, in removal order, followed by any
    /// frontier nodes drained after depletion.
    pub removed: Vec<NodeId>,

    /// Winning child, if one was generated.
    pub goal: Option<NodeId>,

    /// Search statistics. `outcome` is `Goal` or `Fallback` here; callers
    /// downgrade it to `EmptyPool` if the chosen node yields no action.
    pub stats: SearchStats,
}

impl<S, A> SearchResult<S, A> {
    /// The node the returned action should lead to: the goal if found,
    /// otherwise the fallback choice.
    #[must_use]
    pub fn chosen(&self) -> Option<NodeId> {
        self.goal
            .or_else(|| select_fallback(&self.tree, &self.removed))
    }

    /// First action on the path to the chosen node.
    ///
    /// `None` when nothing was chosen or the chosen node is the root.
    #[must_use]
    pub fn first_action(&self) -> Option<&A> {
        self.chosen().and_then(|id| self.tree.first_action(id))
    }
}

/// Run one search from `root_state` with the given frontier and policy.
pub fn run_search<M, H, F>(
    model: &mut M,
    heuristic: &H,
    root_state: M::State,
    mut frontier: F,
    policy: DriverPolicy,
    arena_capacity: usize,
) -> SearchResult<M::State, M::Action>
where
    M: WorldModel,
    H: Heuristic<M::State> + ?Sized,
    F: Frontier,
{
    let mut tree = SearchTree::with_capacity(root_state, arena_capacity);
    let mut removed: Vec<NodeId> = Vec::new();
    let mut goal = None;
    let mut stats = SearchStats::new();

    trace!(?policy, "search started");
    frontier.push(tree.root(), tree.get(tree.root()).cost);

    'search: while let Some(current) = frontier.pop() {
        let unfavorable = model.is_lose(&tree.get(current).state);
        if unfavorable && !policy.record_unfavorable {
            continue;
        }
        removed.push(current);
        if unfavorable {
            continue;
        }

        let expansion = expand(&mut tree, model, heuristic, current, policy.depletion);
        stats.expansions += 1;
        stats.nodes_generated += expansion.children.len() as u32;

        for &child in &expansion.children {
            if policy.skip_duplicates
                && removed.iter().any(|&seen| tree.structurally_equal(seen, child))
            {
                continue;
            }

            let state = &tree.get(child).state;
            if model.is_win(state) {
                debug!(depth = tree.get(child).depth, "goal generated");
                goal = Some(child);
                break 'search;
            }
            if model.is_lose(state) {
                continue;
            }
            frontier.push(child, tree.get(child).cost);
        }

        if expansion.depleted {
            stats.depleted = true;
            debug!(
                drained = frontier.len(),
                removed = removed.len(),
                "successor budget depleted, draining frontier"
            );
            frontier.drain_into(&mut removed);
            break;
        }
    }

    stats.nodes_removed = removed.len() as u32;
    stats.max_depth = tree.max_depth();
    stats.outcome = if goal.is_some() {
        SearchOutcome::Goal
    } else {
        SearchOutcome::Fallback
    };

    SearchResult {
        tree,
        removed,
        goal,
        stats,
    }
}
