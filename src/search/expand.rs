//! Shared expansion step.
//!
//! Expanding a node asks the oracle for the successor under every legal
//! action and allocates one child per state it hands back. All three drivers
//! expand the same way; they only differ in what they do after depletion.

use tracing::trace;

use crate::rules::{Heuristic, Successor, WorldModel};

use super::node::{NodeId, SearchNode};
use super::tree::SearchTree;

/// How an expansion reacts to the oracle running out of budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepletionMode {
    /// Stop requesting successors for the node at the first `Depleted`.
    StopOnFirst,
    /// Keep requesting the node's remaining actions, only recording the flag.
    RecordAndContinue,
}

/// Result of expanding one node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Children allocated, in legal-action order.
    pub children: Vec<NodeId>,
    /// Whether the oracle signalled depletion during this expansion.
    pub depleted: bool,
}

/// Expand `node`: one child per successor the oracle produces.
///
/// Child cost is `heuristic(child) + node.depth + 1`.
pub fn expand<M, H>(
    tree: &mut SearchTree<M::State, M::Action>,
    model: &mut M,
    heuristic: &H,
    node: NodeId,
    mode: DepletionMode,
) -> Expansion
where
    M: WorldModel,
    H: Heuristic<M::State> + ?Sized,
{
    let depth = tree.get(node).depth;
    let actions = model.legal_actions(&tree.get(node).state);
    let mut expansion = Expansion {
        children: Vec::with_capacity(actions.len()),
        depleted: false,
    };

    for action in actions {
        match model.generate_successor(&tree.get(node).state, &action) {
            Successor::State(state) => {
                let h = heuristic.evaluate(&state);
                let child = tree.alloc(SearchNode::child(state, action, node, depth, h));
                expansion.children.push(child);
            }
            Successor::Depleted => {
                trace!(%node, ?action, "successor request depleted");
                expansion.depleted = true;
                if mode == DepletionMode::StopOnFirst {
                    break;
                }
            }
        }
    }

    expansion
}
