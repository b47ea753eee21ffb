//! Frontier containers.
//!
//! The frontier decides expansion order, and it is the only thing that
//! differs in how the three drivers walk the tree:
//! - `FifoQueue`: breadth-first, strict arrival order
//! - `LifoStack`: depth-first, most recently pushed first
//! - `CostQueue`: best-first, lowest cost first, ties in arrival order

use std::collections::VecDeque;

use super::node::NodeId;

/// Ordered container of not-yet-expanded nodes.
pub trait Frontier {
    /// Add a node. `cost` is the node's ordering key; order-agnostic
    /// containers ignore it.
    fn push(&mut self, node: NodeId, cost: f64);

    /// Remove and return the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// Number of nodes waiting.
    fn len(&self) -> usize;

    /// Whether the frontier is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pop every remaining node, in pop order, onto `out`.
    fn drain_into(&mut self, out: &mut Vec<NodeId>) {
        out.reserve(self.len());
        while let Some(node) = self.pop() {
            out.push(node);
        }
    }
}

/// First-in, first-out queue for breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct FifoQueue {
    items: VecDeque<NodeId>,
}

impl FifoQueue {
    /// Create a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoQueue {
    fn push(&mut self, node: NodeId, _cost: f64) {
        self.items.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Last-in, first-out stack for depth-first search.
#[derive(Clone, Debug, Default)]
pub struct LifoStack {
    items: Vec<NodeId>,
}

impl LifoStack {
    /// Create a new empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoStack {
    fn push(&mut self, node: NodeId, _cost: f64) {
        self.items.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Cost-sorted queue for best-first search.
///
/// Kept sorted ascending by cost at all times. A new node is inserted after
/// every node of equal cost, which is exactly what a stable re-sort after
/// appending would produce, so pops come out in `(cost, insertion index)`
/// order.
#[derive(Clone, Debug, Default)]
pub struct CostQueue {
    items: VecDeque<(f64, NodeId)>,
}

impl CostQueue {
    /// Create a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost of the node that would pop next.
    #[must_use]
    pub fn peek_cost(&self) -> Option<f64> {
        self.items.front().map(|&(cost, _)| cost)
    }
}

impl Frontier for CostQueue {
    fn push(&mut self, node: NodeId, cost: f64) {
        let at = self
            .items
            .partition_point(|&(queued, _)| queued.total_cmp(&cost).is_le());
        self.items.insert(at, (cost, node));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.items.pop_front().map(|(_, node)| node)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
