use maze_core::Point;

use crate::frontier::Frontier;
use crate::node::{NodeId, SearchNode};

/// A search strategy as seen by the engine loop.
///
/// The engine owns the bookkeeping (marks, node slots, explored order) and
/// asks the expansion how to order the frontier, what costs a node carries
/// and whether a walkable neighbour should be (re)opened.
pub trait Expansion {
    type Frontier: Frontier;

    /// An empty frontier for a new search.
    fn frontier(&self) -> Self::Frontier;

    /// The node for `pos`, reached from `parent` or the root if `None`.
    fn node(&self, pos: Point, parent: Option<(NodeId, &SearchNode)>) -> SearchNode;

    /// Whether a walkable neighbour reached from `current` should be opened.
    ///
    /// `seen` tells whether the cell was ever queued or visited; `existing`
    /// is its current node if it has one.
    fn accepts(&self, current: &SearchNode, existing: Option<&SearchNode>, seen: bool) -> bool;
}
