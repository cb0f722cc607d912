//! The [`Grid`] arena: every [`Cell`] of a fixed-size rectangle, plus the
//! scratch state searches leave behind.

use tilepath_core::{Cell, Cost, Point, Range, Terrain};

use crate::config::GridConfig;
use crate::scratch::{Distance, PathNode, Scratch, SearchState};

/// A fixed-size rectangular grid of cells stored row-major.
///
/// The grid owns all cells for its whole lifetime. Searches borrow it
/// mutably, which is what guarantees at most one search per grid at a time.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) bounds: Range,
    pub(crate) width: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) state: SearchState,
}

impl Grid {
    /// Create a grid of open cells with the default cost.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_config(&GridConfig {
            width,
            height,
            ..GridConfig::default()
        })
    }

    /// Create a grid of open cells from a configuration.
    pub fn from_config(cfg: &GridConfig) -> Self {
        let bounds = Range::sized(cfg.width, cfg.height);
        let cells: Vec<Cell> = bounds
            .iter()
            .map(|p| Cell::new(p).with_cost(cfg.default_cost))
            .collect();
        let len = cells.len();
        Self {
            bounds,
            width: bounds.width() as usize,
            cells,
            state: SearchState::new(len),
        }
    }

    // -----------------------------------------------------------------------
    // Dimensions
    // -----------------------------------------------------------------------

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at (`row`, `col`), or `None` outside the grid.
    #[inline]
    pub fn lookup(&self, row: i32, col: i32) -> Option<&Cell> {
        self.at(Point::from_row_col(row, col))
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Set the terrain at `p`. Does nothing if out of bounds.
    pub fn set_terrain(&mut self, p: Point, terrain: Terrain) {
        if let Some(i) = self.idx(p) {
            self.cells[i].set_terrain(terrain);
        }
    }

    /// Set the movement cost at `p`. Does nothing if out of bounds.
    pub fn set_cost(&mut self, p: Point, cost: Cost) {
        if let Some(i) = self.idx(p) {
            self.cells[i].set_cost(cost);
        }
    }

    /// Make `p` impassable. Does nothing if out of bounds.
    pub fn block(&mut self, p: Point) {
        self.set_terrain(p, Terrain::Blocked);
    }

    /// Move the start marker to `p`, turning the previous start cell (if
    /// any) back into open terrain. Does nothing if `p` is out of bounds.
    pub fn place_start(&mut self, p: Point) {
        self.place_marker(p, Terrain::Start);
    }

    /// Move the goal marker to `p`, turning the previous goal cell (if any)
    /// back into open terrain. Does nothing if `p` is out of bounds.
    pub fn place_goal(&mut self, p: Point) {
        self.place_marker(p, Terrain::Goal);
    }

    fn place_marker(&mut self, p: Point, marker: Terrain) {
        let Some(i) = self.idx(p) else {
            return;
        };
        for c in self.cells.iter_mut().filter(|c| c.terrain() == marker) {
            c.set_terrain(Terrain::Open);
        }
        self.cells[i].set_terrain(marker);
    }

    /// Position of the start marker, if one is placed.
    pub fn start(&self) -> Option<Point> {
        self.find_terrain(Terrain::Start)
    }

    /// Position of the goal marker, if one is placed.
    pub fn goal(&self) -> Option<Point> {
        self.find_terrain(Terrain::Goal)
    }

    fn find_terrain(&self, terrain: Terrain) -> Option<Point> {
        self.cells
            .iter()
            .find(|c| c.terrain() == terrain)
            .map(Cell::pos)
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    /// Clear everything previous searches recorded.
    ///
    /// Terrain and costs are untouched: searches never write them. Must be
    /// called between two searches on the same grid.
    pub fn reset_all(&mut self) {
        self.state.clear();
    }

    /// Whether a search ran since the last [`reset_all`](Self::reset_all).
    #[inline]
    pub fn needs_reset(&self) -> bool {
        self.state.dirty
    }

    /// Search bookkeeping for the cell at `p`.
    #[inline]
    pub fn scratch(&self, p: Point) -> Option<&Scratch> {
        self.idx(p).map(|i| &self.state.cells[i])
    }

    pub fn visited(&self, p: Point) -> bool {
        self.scratch(p).is_some_and(Scratch::visited)
    }

    /// Distance from the last search's origin, `None` if unreached.
    pub fn best_cost(&self, p: Point) -> Option<Distance> {
        self.scratch(p).and_then(Scratch::best_cost)
    }

    /// The cell `p` was reached from during the last search.
    pub fn came_from(&self, p: Point) -> Option<Point> {
        let i = self.idx(p)?;
        self.state.cells[i].came_from.map(|j| self.point(j))
    }

    pub fn on_path(&self, p: Point) -> bool {
        self.scratch(p).is_some_and(Scratch::on_path)
    }

    /// Cells in the order the last search took them off its frontier.
    pub fn expansions(&self) -> &[PathNode] {
        &self.state.expanded
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
