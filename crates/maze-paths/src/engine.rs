use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use maze_core::{GridMap, Point};

use crate::astar::{BestFirst, Weighting};
use crate::bfs::BreadthFirst;
use crate::frontier::Frontier;
use crate::marks::Marks;
use crate::neighbors::Neighbors;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::traits::Expansion;

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Uninformed FIFO search.
    BreadthFirst,
    /// Heuristic best-first search.
    AStar(Weighting),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::AStar(Weighting::Plain)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => f.write_str("bfs"),
            Strategy::AStar(Weighting::Plain) => f.write_str("astar"),
            Strategy::AStar(w) => write!(f, "{w}"),
        }
    }
}

/// Error returned when a strategy name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?} (expected bfs, astar, greedy or weighted:<k> with 1 <= k <= {})",
            self.0,
            Weighting::MAX_FACTOR
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Accepts `bfs`, `astar`, `greedy` (weight 2) and `weighted:<k>` with
    /// `1 <= k <= Weighting::MAX_FACTOR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseStrategyError(s.to_string());
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::BreadthFirst),
            "astar" | "a*" => Ok(Strategy::AStar(Weighting::Plain)),
            "greedy" => Ok(Strategy::AStar(Weighting::GREEDY)),
            other => {
                let k: u32 = other
                    .strip_prefix("weighted:")
                    .and_then(|k| k.parse().ok())
                    .ok_or_else(err)?;
                match k {
                    1 => Ok(Strategy::AStar(Weighting::Plain)),
                    factor if (2..=Weighting::MAX_FACTOR).contains(&factor) => {
                        Ok(Strategy::AStar(Weighting::Inflated { factor }))
                    }
                    _ => Err(err()),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Cells in the order they were expanded, start first, goal last.
    pub explored: Vec<Point>,
    /// Cells from start to goal inclusive.
    pub path: Vec<Point>,
}

impl Solution {
    /// Number of steps along the path.
    pub fn cost(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Found(Solution),
    /// The frontier emptied without reaching the goal.
    NotFound { explored: Vec<Point> },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Cells in the order they were expanded.
    pub fn explored(&self) -> &[Point] {
        match self {
            SearchOutcome::Found(s) => &s.explored,
            SearchOutcome::NotFound { explored } => explored,
        }
    }

    /// The path from start to goal, or an empty slice if none was found.
    pub fn path(&self) -> &[Point] {
        match self {
            SearchOutcome::Found(s) => &s.path,
            SearchOutcome::NotFound { .. } => &[],
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Found(s) => Some(s),
            SearchOutcome::NotFound { .. } => None,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Entries pushed onto the frontier.
    pub pushed: usize,
    /// Cells whose backward cost was lowered after first discovery.
    pub revised: usize,
    /// Revisions of cells that had already been expanded.
    pub reopened: usize,
    /// Outdated frontier entries discarded on pop.
    pub stale: usize,
}

/// Outcome and counters of a finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Single-use search state for one maze.
///
/// The engine owns every piece of mutable state a search needs (visited and
/// queued marks, the node arena, the per-cell node slots and the explored
/// order). [`run`](Self::run) consumes it, so each search starts from a
/// freshly initialised engine.
pub struct SearchEngine<'a> {
    grid: &'a GridMap,
    strategy: Strategy,
    marks: Marks,
    // Current node of every cell that has been opened.
    slots: Vec<Option<NodeId>>,
    arena: NodeArena,
    explored: Vec<Point>,
    stats: SearchStats,
    neighbors: Neighbors,
}

impl<'a> SearchEngine<'a> {
    /// Prepare a search of `grid` from its start to its goal.
    pub fn new(grid: &'a GridMap, strategy: Strategy) -> Self {
        let len = grid.len();
        Self {
            grid,
            strategy,
            marks: Marks::new(len),
            slots: vec![None; len],
            arena: NodeArena::new(),
            explored: Vec::new(),
            stats: SearchStats::default(),
            neighbors: Neighbors::new(),
        }
    }

    /// Run the configured strategy to completion.
    pub fn run(self) -> SearchReport {
        let strategy = self.strategy;
        match strategy {
            Strategy::BreadthFirst => self.run_with(BreadthFirst),
            Strategy::AStar(weighting) => {
                let expansion = BestFirst::new(self.grid.goal(), weighting);
                self.run_with(expansion)
            }
        }
    }

    /// Run the search loop with an explicit expansion policy.
    pub fn run_with<E: Expansion>(mut self, expansion: E) -> SearchReport {
        let grid = self.grid;
        let (start, goal) = (grid.start(), grid.goal());
        debug!(
            "{}: {} -> {} on {}x{}",
            self.strategy,
            start,
            goal,
            grid.height(),
            grid.width()
        );

        let mut frontier = expansion.frontier();
        let root = expansion.node(start, None);
        self.open(&mut frontier, root);

        let mut neighbors = std::mem::take(&mut self.neighbors);

        let found = 'search: loop {
            let Some(id) = frontier.pop() else {
                break 'search None;
            };
            let current = self.arena[id];
            let Some(ci) = grid.idx(current.pos) else {
                continue;
            };

            // Superseded by a cheaper revision of the same cell.
            if current.revision != self.marks.revision(ci) {
                self.stats.stale += 1;
                continue;
            }

            self.marks.visit(ci);
            self.explored.push(current.pos);
            self.stats.expanded += 1;
            trace!(
                "expand {} back={} forward={}",
                current.pos, current.back_cost, current.forward_cost
            );

            if current.pos == goal {
                break 'search Some(id);
            }

            for &np in neighbors.cardinal(current.pos, |p| grid.is_road(p)) {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                let existing = self.slots[ni].map(|n| &self.arena[n]);
                if !expansion.accepts(&current, existing, self.marks.is_seen(ni)) {
                    continue;
                }
                if existing.is_some() {
                    self.stats.revised += 1;
                    if self.marks.is_visited(ni) {
                        self.stats.reopened += 1;
                        debug!("reopening {} at back cost {}", np, current.back_cost + 1);
                    }
                }
                let child = expansion.node(np, Some((id, &current)));
                self.open(&mut frontier, child);
            }
        };

        self.neighbors = neighbors;

        let explored = std::mem::take(&mut self.explored);
        let outcome = match found {
            Some(id) => SearchOutcome::Found(Solution {
                explored,
                path: self.arena.path_to(id),
            }),
            None => SearchOutcome::NotFound { explored },
        };
        debug!(
            "{}: {} after {} expansions ({} nodes, {} stale, {} reopened)",
            self.strategy,
            if outcome.is_found() { "found" } else { "not found" },
            self.stats.expanded,
            self.arena.len(),
            self.stats.stale,
            self.stats.reopened
        );
        SearchReport {
            outcome,
            stats: self.stats,
        }
    }

    /// Store `node` as its cell's current node, queue it and mark the cell
    /// queued.
    fn open<F: Frontier>(&mut self, frontier: &mut F, mut node: SearchNode) {
        let Some(i) = self.grid.idx(node.pos) else {
            return;
        };
        node.revision = self.marks.bump(i);
        let id = self.arena.push(node);
        self.slots[i] = Some(id);
        self.marks.queue(i);
        frontier.push(id, &node);
        self.stats.pushed += 1;
    }
}
