/// Per-cell search bookkeeping: the visited and queued sets plus a
/// revision counter used to recognise outdated frontier entries.
///
/// All grids are flat, row-major and sized to the map.
#[derive(Debug, Clone)]
pub(crate) struct Marks {
    visited: Vec<bool>,
    queued: Vec<bool>,
    revision: Vec<u32>,
}

impl Marks {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            visited: vec![false; len],
            queued: vec![false; len],
            revision: vec![0; len],
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, i: usize) -> bool {
        self.visited[i]
    }

    /// Whether the cell was ever queued or expanded.
    #[inline]
    pub(crate) fn is_seen(&self, i: usize) -> bool {
        self.visited[i] || self.queued[i]
    }

    #[inline]
    pub(crate) fn visit(&mut self, i: usize) {
        self.visited[i] = true;
    }

    #[inline]
    pub(crate) fn queue(&mut self, i: usize) {
        self.queued[i] = true;
    }

    #[inline]
    pub(crate) fn revision(&self, i: usize) -> u32 {
        self.revision[i]
    }

    /// Advance the cell's revision and return the new value.
    #[inline]
    pub(crate) fn bump(&mut self, i: usize) -> u32 {
        self.revision[i] += 1;
        self.revision[i]
    }
}
