//! Search node structure.
//!
//! Nodes live in a per-decision arena (`SearchTree`) and point at their
//! parent through a `NodeId` index, so a path never owns its ancestors.

use std::cmp::Ordering;

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node (the root's parent).
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the search tree.
///
/// `cost` is the heuristic value of `state` plus the node's depth. The
/// heuristic is evaluated afresh at every depth rather than accumulated
/// along the path, so this is not a classical `g + h` path cost.
#[derive(Clone, Debug)]
pub struct SearchNode<S, A> {
    /// World state at this node.
    pub state: S,

    /// Action applied to the parent's state (None for root).
    pub action: Option<A>,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Ordering and fallback key.
    pub cost: f64,

    /// Depth in tree (root = 0).
    pub depth: u32,
}

impl<S, A> SearchNode<S, A> {
    /// Create the root node for a decision.
    pub fn root(state: S) -> Self {
        Self {
            state,
            action: None,
            parent: NodeId::NONE,
            cost: 0.0,
            depth: 0,
        }
    }

    /// Create a child of `parent` (at `parent_depth`) reached by `action`.
    ///
    /// `heuristic` is the evaluation of `state`.
    pub fn child(state: S, action: A, parent: NodeId, parent_depth: u32, heuristic: f64) -> Self {
        let depth = parent_depth + 1;
        Self {
            state,
            action: Some(action),
            parent,
            cost: heuristic + f64::from(depth),
            depth,
        }
    }

    /// Check if this node is a root (has no parent).
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Total order on cost. NaN sorts last.
    #[must_use]
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}
