use maze_core::Point;

use crate::node::{NodeArena, NodeId};

impl NodeArena {
    /// Walk parent links from `id` back to the root and return the
    /// coordinates in root-to-`id` order, both ends inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = &self[ci];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}
