use maze_core::Point;

use crate::frontier::FifoFrontier;
use crate::node::{NodeId, SearchNode};
use crate::traits::Expansion;

/// Breadth-first expansion.
///
/// Every step costs 1 and nodes come out in discovery order, so the first
/// time the goal is popped its depth is minimal. A cell is opened at most
/// once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Expansion for BreadthFirst {
    type Frontier = FifoFrontier;

    fn frontier(&self) -> FifoFrontier {
        FifoFrontier::new()
    }

    fn node(&self, pos: Point, parent: Option<(NodeId, &SearchNode)>) -> SearchNode {
        match parent {
            Some((id, p)) => SearchNode::child(pos, id, p),
            None => SearchNode::root(pos),
        }
    }

    fn accepts(&self, _current: &SearchNode, _existing: Option<&SearchNode>, seen: bool) -> bool {
        !seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeArena;

    #[test]
    fn depth_is_back_cost() {
        let mut arena = NodeArena::new();
        let root = BreadthFirst.node(Point::new(0, 0), None);
        let rid = arena.push(root);
        let child = BreadthFirst.node(Point::new(0, 1), Some((rid, &root)));
        assert_eq!(root.back_cost, 0);
        assert_eq!(child.back_cost, 1);
        assert_eq!(child.priority, 0);
    }

    #[test]
    fn never_reopens() {
        let n = SearchNode::root(Point::ZERO);
        assert!(BreadthFirst.accepts(&n, None, false));
        assert!(!BreadthFirst.accepts(&n, None, true));
        let far = SearchNode { back_cost: 10, ..n };
        assert!(!BreadthFirst.accepts(&n, Some(&far), true));
    }
}
