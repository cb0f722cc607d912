//! Search outcomes and back-link reconstruction.

use std::fmt;

use tilepath_core::Point;

use crate::grid::Grid;
use crate::scratch::Distance;

/// An ordered route from start to goal, both endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Point>,
    cost: Distance,
}

impl Path {
    pub(crate) fn new(cells: Vec<Point>, cost: Distance) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells, cost }
    }

    /// Every cell of the route, start first.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    pub fn start(&self) -> Point {
        self.cells[0]
    }

    pub fn goal(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }

    /// Number of moves along the route.
    #[inline]
    pub fn hops(&self) -> usize {
        self.cells.len() - 1
    }

    /// Total cost in the model of the algorithm that produced the path:
    /// hop count for reverse BFS, summed cell costs for Dijkstra.
    #[inline]
    pub fn cost(&self) -> Distance {
        self.cost
    }

    /// The cells strictly between start and goal.
    pub fn intermediate(&self) -> &[Point] {
        match self.cells.len() {
            0..=2 => &[],
            n => &self.cells[1..n - 1],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Why a search did not produce a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoPath {
    /// Start or goal is outside the grid or cannot be entered.
    InvalidEndpoint,
    /// The frontier ran dry before reaching the other endpoint.
    Unreachable,
    /// A previous search left state behind; call
    /// [`Grid::reset_all`] first.
    StaleState,
}

impl fmt::Display for NoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint => f.write_str("start or goal is missing or not walkable"),
            Self::Unreachable => f.write_str("goal is unreachable from start"),
            Self::StaleState => f.write_str("grid holds state from a previous search; reset it first"),
        }
    }
}

impl std::error::Error for NoPath {}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum PathResult {
    Found(Path),
    NotFound(NoPath),
}

impl PathResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound(_) => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound(_) => None,
        }
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<Path, NoPath> {
        match self {
            Self::Found(p) => Ok(p),
            Self::NotFound(e) => Err(e),
        }
    }
}

impl From<PathResult> for Result<Path, NoPath> {
    fn from(r: PathResult) -> Self {
        r.into_result()
    }
}

impl Grid {
    /// Follow `came_from` links from `from` until `to` is reached.
    ///
    /// Returns every cell visited along the way, `from` first and `to` last.
    /// Only meaningful right after a search succeeded: reverse BFS leaves
    /// links pointing start to goal, Dijkstra goal to start.
    ///
    /// # Panics
    ///
    /// Panics if either point is outside the grid, if the chain breaks before
    /// reaching `to`, or if it is longer than the grid has cells (a cycle).
    /// Each of these means the search state is corrupt.
    pub fn reconstruct(&self, from: Point, to: Point) -> Vec<Point> {
        let (Some(mut ci), Some(ti)) = (self.idx(from), self.idx(to)) else {
            panic!("reconstruct: endpoint outside grid ({from} -> {to})");
        };
        let mut cells = vec![from];
        while ci != ti {
            assert!(
                cells.len() <= self.len(),
                "reconstruct: back-link cycle detected from {from} toward {to}"
            );
            let Some(next) = self.state.cells[ci].came_from else {
                panic!(
                    "reconstruct: chain broken at {} before reaching {to}",
                    self.point(ci)
                );
            };
            ci = next;
            let p = self.point(ci);
            log::trace!("path cell {p}");
            cells.push(p);
        }
        cells
    }

    /// Flag every cell of `path` in the scratch state.
    pub(crate) fn mark_path(&mut self, path: &[Point]) {
        for &p in path {
            if let Some(i) = self.idx(p) {
                self.state.cells[i].on_path = true;
            }
        }
    }
}
