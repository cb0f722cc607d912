use tilepath_core::Point;

/// Accumulated path length. Wider than a single cell's
/// [`Cost`](tilepath_core::Cost), so summing any realistic number of
/// maximum-cost steps stays below [`UNREACHABLE`].
pub type Distance = u64;

/// Sentinel distance meaning "not reached by the current search".
pub const UNREACHABLE: Distance = Distance::MAX;

/// A position with an associated cost, as recorded in the expansion log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: Distance,
}

/// Per-cell search bookkeeping, kept apart from the cell's terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scratch {
    pub(crate) visited: bool,
    pub(crate) best: Distance,
    pub(crate) came_from: Option<usize>,
    pub(crate) on_path: bool,
}

impl Default for Scratch {
    fn default() -> Self {
        Self {
            visited: false,
            best: UNREACHABLE,
            came_from: None,
            on_path: false,
        }
    }
}

impl Scratch {
    /// Whether the last search enqueued this cell.
    #[inline]
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Best known distance from the search origin, `None` if unreached.
    #[inline]
    pub fn best_cost(&self) -> Option<Distance> {
        (self.best != UNREACHABLE).then_some(self.best)
    }

    /// Whether the cell belongs to the last path found.
    #[inline]
    pub fn on_path(&self) -> bool {
        self.on_path
    }
}

/// All mutable state a search leaves behind on a grid.
///
/// Both algorithms write into the same structure; [`clear`](Self::clear) is
/// the one place it gets wiped.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    pub(crate) cells: Vec<Scratch>,
    pub(crate) expanded: Vec<PathNode>,
    /// Set once a search gets past validation; cleared by `clear`.
    pub(crate) dirty: bool,
}

impl SearchState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            cells: vec![Scratch::default(); len],
            expanded: Vec::new(),
            dirty: false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Scratch::default());
        self.expanded.clear();
        self.dirty = false;
    }

    /// Dijkstra's own initialization: distances back to the sentinel and
    /// back-links dropped. Visited flags are left alone.
    pub(crate) fn prime_costs(&mut self) {
        for s in self.cells.iter_mut() {
            s.best = UNREACHABLE;
            s.came_from = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scratch_is_unreached() {
        let s = Scratch::default();
        assert!(!s.visited());
        assert_eq!(s.best_cost(), None);
        assert!(!s.on_path());
    }

    #[test]
    fn clear_wipes_everything() {
        let mut st = SearchState::new(4);
        st.cells[2] = Scratch {
            visited: true,
            best: 3,
            came_from: Some(1),
            on_path: true,
        };
        st.expanded.push(PathNode {
            pos: Point::ZERO,
            cost: 0,
        });
        st.dirty = true;
        st.clear();
        assert!(st.cells.iter().all(|s| *s == Scratch::default()));
        assert!(st.expanded.is_empty());
        assert!(!st.dirty);
    }

    #[test]
    fn prime_costs_keeps_visited() {
        let mut st = SearchState::new(2);
        st.cells[0] = Scratch {
            visited: true,
            best: 7,
            came_from: Some(1),
            on_path: false,
        };
        st.prime_costs();
        assert!(st.cells[0].visited());
        assert_eq!(st.cells[0].best_cost(), None);
        assert_eq!(st.cells[0].came_from, None);
    }
}
