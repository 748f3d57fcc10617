//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root successors included.
    pub nodes: u64,

    /// Leaves scored by `utility` or an evaluation function.
    pub leaf_evaluations: u64,

    /// Times the remaining siblings of a node were skipped by an
    /// alpha-beta bound.
    pub prunes: u64,

    /// Deepest ply reached below the root.
    pub depth_reached: usize,

    /// True if no non-terminal node was cut off by the depth limit, so a
    /// deeper search would explore the same tree.
    pub exhausted: bool,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    pub(crate) fn visit(&mut self, ply: usize) {
        self.nodes += 1;
        self.depth_reached = self.depth_reached.max(ply);
    }
}
