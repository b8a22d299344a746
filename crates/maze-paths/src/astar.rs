use std::fmt;

use maze_core::Point;

use crate::distance::{manhattan, squared_euclidean};
use crate::frontier::PriorityFrontier;
use crate::node::{NodeId, SearchNode};
use crate::traits::Expansion;

/// How strongly the heuristic is weighted against the backward cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weighting {
    /// `back + forward`: admissible, paths are optimal.
    #[default]
    Plain,
    /// `back + factor * forward`: greedier and usually faster, but paths are
    /// not guaranteed to be shortest.
    Inflated { factor: u32 },
}

impl Weighting {
    /// The common greedy variant, `back + 2 * forward`.
    pub const GREEDY: Weighting = Weighting::Inflated { factor: 2 };

    /// Largest factor accepted when parsing a strategy name.
    pub const MAX_FACTOR: u32 = 1024;

    /// Multiplier applied to the forward cost.
    pub fn weight(self) -> u32 {
        match self {
            Weighting::Plain => 1,
            Weighting::Inflated { factor } => factor,
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weighting::Plain => f.write_str("plain"),
            Weighting::Inflated { factor } => write!(f, "weighted:{factor}"),
        }
    }
}

/// Best-first (A*) expansion towards a fixed goal.
///
/// Nodes are ordered by `back_cost + weight * manhattan(goal)` and then by
/// squared Euclidean distance to the goal. A cell that was already queued or
/// visited is opened again whenever a strictly cheaper backward cost to it
/// is found.
#[derive(Debug, Clone, Copy)]
pub struct BestFirst {
    goal: Point,
    weighting: Weighting,
}

impl BestFirst {
    pub fn new(goal: Point, weighting: Weighting) -> Self {
        Self { goal, weighting }
    }

    /// Heuristic estimate of the steps left from `p`.
    #[inline]
    pub fn forward_cost(&self, p: Point) -> u32 {
        manhattan(self.goal, p)
    }

    /// Secondary ordering key for `p`; lower is preferred.
    #[inline]
    pub fn tie_breaker(&self, p: Point) -> u64 {
        squared_euclidean(self.goal, p)
    }
}

impl Expansion for BestFirst {
    type Frontier = PriorityFrontier;

    fn frontier(&self) -> PriorityFrontier {
        PriorityFrontier::new()
    }

    fn node(&self, pos: Point, parent: Option<(NodeId, &SearchNode)>) -> SearchNode {
        let node = match parent {
            Some((id, p)) => SearchNode::child(pos, id, p),
            None => SearchNode::root(pos),
        };
        node.with_estimate(
            self.forward_cost(pos),
            self.tie_breaker(pos),
            self.weighting.weight(),
        )
    }

    fn accepts(&self, current: &SearchNode, existing: Option<&SearchNode>, seen: bool) -> bool {
        if !seen {
            return true;
        }
        existing.is_none_or(|n| current.back_cost + 1 < n.back_cost)
    }
}
