//! Fallback selection when no winning node was reached.

use super::node::NodeId;
use super::tree::SearchTree;

/// Pick the lowest-cost node among `removed`, ignoring its first entry.
///
/// The first entry is the first node the driver removed from its frontier,
/// normally the root. Ties go to the earliest entry. Returns `None` when
/// nothing is left after the exclusion.
#[must_use]
pub fn select_fallback<S, A>(tree: &SearchTree<S, A>, removed: &[NodeId]) -> Option<NodeId> {
    removed
        .iter()
        .skip(1)
        .copied()
        .min_by(|&a, &b| tree.get(a).cmp_cost(tree.get(b)))
}
