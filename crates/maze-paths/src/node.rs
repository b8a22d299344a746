use std::ops::Index;

use maze_core::Point;

/// Handle to a [`SearchNode`] stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A discovered cell together with the costs it was discovered at.
///
/// Nodes are immutable once stored. Revising a cell's cost stores a fresh
/// node and repoints the cell at it; the old node stays in the arena so
/// parent chains that go through it remain intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Point,
    /// Steps from the start along the path that discovered this node.
    pub back_cost: u32,
    /// Heuristic estimate of the remaining steps to the goal.
    pub forward_cost: u32,
    /// Secondary ordering key among equal priorities; lower is better.
    pub tie_break: u64,
    /// Primary ordering key: `back_cost + weight * forward_cost`.
    pub priority: u64,
    pub parent: Option<NodeId>,
    /// The cell's revision when this node was opened.
    pub revision: u32,
}

impl SearchNode {
    /// A root node: zero backward cost, no parent.
    pub fn root(pos: Point) -> Self {
        Self {
            pos,
            back_cost: 0,
            forward_cost: 0,
            tie_break: 0,
            priority: 0,
            parent: None,
            revision: 0,
        }
    }

    /// A node one step further than `parent`.
    pub fn child(pos: Point, parent_id: NodeId, parent: &SearchNode) -> Self {
        Self {
            pos,
            back_cost: parent.back_cost + 1,
            parent: Some(parent_id),
            ..Self::root(pos)
        }
    }

    /// Set heuristic costs and derive the priority under `weight`.
    ///
    /// Computed in `u64`: `u32::MAX * u32::MAX + u32::MAX` still fits.
    pub fn with_estimate(mut self, forward_cost: u32, tie_break: u64, weight: u32) -> Self {
        self.forward_cost = forward_cost;
        self.tie_break = tie_break;
        self.priority = u64::from(self.back_cost) + u64::from(weight) * u64::from(forward_cost);
        self
    }
}

/// Append-only storage for search nodes.
///
/// A parent always has a smaller [`NodeId`] than its children, so the
/// parent relation is a tree rooted at the start node.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

#[allow(clippy::len_without_is_empty)]
impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and return its handle.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(node.parent.is_none_or(|p| p.0 < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Number of nodes stored, revisions included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}
