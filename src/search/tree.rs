//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based parent links. One tree is
//! built per decision and dropped as a whole once the action is chosen.

use super::node::{NodeId, SearchNode};

/// Arena-based search tree for a single decision.
#[derive(Clone, Debug)]
pub struct SearchTree<S, A> {
    /// All nodes, root at index 0.
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> SearchTree<S, A> {
    /// Create a tree holding only the root.
    pub fn new(root_state: S) -> Self {
        Self::with_capacity(root_state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(root_state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::root(root_state));
        Self { nodes }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<S, A>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree (root included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest node depth in the tree.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Walk back from `id` to the node whose parent is the root and return
    /// the action that node was reached by: the first step on the path.
    ///
    /// Returns `None` when `id` is the root itself.
    #[must_use]
    pub fn first_action(&self, id: NodeId) -> Option<&A> {
        let mut current = self.get(id);
        if current.is_root() {
            return None;
        }
        while !self.get(current.parent).is_root() {
            current = self.get(current.parent);
        }
        current.action.as_ref()
    }

    /// Actions from the root down to `id`, in order.
    #[must_use]
    pub fn path_actions(&self, id: NodeId) -> Vec<&A> {
        let mut actions = Vec::with_capacity(self.get(id).depth as usize);
        let mut current = id;
        while !current.is_none() {
            let node = self.get(current);
            if let Some(action) = node.action.as_ref() {
                actions.push(action);
            }
            current = node.parent;
        }
        actions.reverse();
        actions
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S, A>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

impl<S: PartialEq, A: PartialEq> SearchTree<S, A> {
    /// Full structural equality of two nodes: state, action, cost, depth,
    /// and the same comparison applied to their ancestries.
    ///
    /// Two different paths reaching the same world state are not equal.
    #[must_use]
    pub fn structurally_equal(&self, a: NodeId, b: NodeId) -> bool {
        let (mut a, mut b) = (a, b);
        loop {
            if a == b {
                return true;
            }
            if a.is_none() || b.is_none() {
                return false;
            }
            let (na, nb) = (self.get(a), self.get(b));
            if na.depth != nb.depth
                || na.cost != nb.cost
                || na.action != nb.action
                || na.state != nb.state
            {
                return false;
            }
            a = na.parent;
            b = nb.parent;
        }
    }
}
