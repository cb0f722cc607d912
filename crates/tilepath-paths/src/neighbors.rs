use tilepath_core::Point;

use crate::grid::Grid;
use crate::walkable::Walkability;

/// Reusable buffer for cardinal neighbour queries.
///
/// Diagonal moves are not supported.
pub(crate) struct Neighbors {
    buf: Vec<usize>,
}

impl Neighbors {
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Flat indices of the neighbours of `p` that `walk` allows entering,
    /// in north, south, east, west order.
    pub(crate) fn walkable(&mut self, grid: &Grid, p: Point, walk: &Walkability) -> &[usize] {
        self.buf.clear();
        for n in p.neighbors_4() {
            let Some(ni) = grid.idx(n) else {
                continue;
            };
            if walk.can_enter(Some(&grid.cells[ni])) {
                self.buf.push(ni);
            }
        }
        &self.buf
    }
}
