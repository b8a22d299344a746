//! Open-set data structures.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::{NodeId, SearchNode};

/// The set of discovered but not yet expanded nodes.
///
/// Frontiers are insert-only: a revised cell gets a fresh entry and the
/// engine discards the outdated one when it is popped.
pub trait Frontier {
    /// Queue `id`, whose contents are `node`.
    fn push(&mut self, id: NodeId, node: &SearchNode);

    /// Remove and return the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// FIFO
// ---------------------------------------------------------------------------

/// First-in first-out frontier for breadth-first search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _node: &SearchNode) {
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Heap entry, ordered by `(priority, tie_break, seq)` ascending.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    priority: u64,
    tie_break: u64,
    seq: u64,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        (other.priority, other.tie_break, other.seq).cmp(&(self.priority, self.tie_break, self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier for best-first search.
///
/// Entries with equal priority and tie-breaker come out in insertion order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, node: &SearchNode) {
        self.heap.push(Entry {
            priority: node.priority,
            tie_break: node.tie_break,
            seq: self.seq,
            id,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeArena;
    use maze_core::Point;

    fn node(priority: u64, tie_break: u64) -> SearchNode {
        SearchNode {
            priority,
            tie_break,
            ..SearchNode::root(Point::ZERO)
        }
    }

    fn drain(f: &mut impl Frontier) -> Vec<usize> {
        std::iter::from_fn(|| f.pop()).map(NodeId::index).collect()
    }

    #[test]
    fn fifo_preserves_insertion_order() {
        let mut arena = NodeArena::new();
        let mut f = FifoFrontier::new();
        for p in [5, 1, 3] {
            let n = node(p, 0);
            f.push(arena.push(n), &n);
        }
        assert_eq!(f.len(), 3);
        assert_eq!(drain(&mut f), vec![0, 1, 2]);
        assert!(f.is_empty());
    }

    #[test]
    fn priority_orders_by_cost_then_tie_then_insertion() {
        let mut arena = NodeArena::new();
        let mut f = PriorityFrontier::new();
        let nodes = [node(4, 9), node(3, 5), node(4, 1), node(3, 5), node(2, 100)];
        for n in nodes {
            f.push(arena.push(n), &n);
        }
        assert_eq!(drain(&mut f), vec![4, 1, 3, 2, 0]);
    }
}
