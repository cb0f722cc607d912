use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tilepath_core::Point;

use crate::grid::Grid;
use crate::neighbors::Neighbors;
use crate::path::{NoPath, PathResult};
use crate::scratch::{Distance, PathNode, UNREACHABLE};
use crate::walkable::Walkability;

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first and, among equal costs, the earliest pushed.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    cost: Distance,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Grid {
    /// Minimum-cost path from `start` to `goal`.
    ///
    /// Moving between two adjacent cells costs the sum of both cells'
    /// movement costs, so on uniform cost-1 terrain every step costs 2.
    /// Costs are unsigned, which is what Dijkstra's correctness relies on,
    /// and are summed as [`Distance`], so even `Cost::MAX` cells add up
    /// without reaching [`UNREACHABLE`].
    ///
    /// The queue may hold several entries for one cell; an outdated entry is
    /// expanded like any other, using the cell's current best cost. `visited`
    /// is set on every relaxed cell but does not stop re-expansion.
    ///
    /// `agent` and the reset requirement behave as in
    /// [`reverse_bfs`](Self::reverse_bfs).
    pub fn dijkstra(&mut self, start: Point, goal: Point, agent: Option<Point>) -> PathResult {
        log::debug!("dijkstra: {start} -> {goal}");
        let walk = Walkability::new(agent, start, goal);
        let (si, gi) = match self.begin_search(start, goal, &walk) {
            Ok(ends) => ends,
            Err(e) => return PathResult::NotFound(e),
        };

        if si == gi {
            self.state.cells[si].best = 0;
            self.state.cells[si].visited = true;
            return self.finish(vec![start], 0);
        }

        self.state.prime_costs();
        self.state.cells[si].best = 0;
        self.state.cells[si].visited = true;

        let mut open: BinaryHeap<Entry> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(Entry {
            cost: 0,
            seq,
            idx: si,
        });
        let mut nb = Neighbors::new();

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cp = self.point(ci);
            self.state.expanded.push(PathNode {
                pos: cp,
                cost: current.cost,
            });
            if ci == gi {
                log::debug!("dijkstra: reached goal {goal}");
                break;
            }

            let current_best = self.state.cells[ci].best;
            let current_cost = Distance::from(self.cells[ci].cost());
            for &ni in nb.walkable(self, cp, &walk) {
                let tentative = current_best
                    .saturating_add(current_cost)
                    .saturating_add(Distance::from(self.cells[ni].cost()));
                let n = &mut self.state.cells[ni];
                if tentative >= n.best {
                    continue;
                }
                n.best = tentative;
                n.came_from = Some(ci);
                n.visited = true;
                seq += 1;
                open.push(Entry {
                    cost: tentative,
                    seq,
                    idx: ni,
                });
            }
        }

        let total = self.state.cells[gi].best;
        if total == UNREACHABLE {
            log::debug!("dijkstra: no path from {start} to {goal}");
            return PathResult::NotFound(NoPath::Unreachable);
        }
        let mut cells = self.reconstruct(goal, start);
        cells.reverse();
        self.finish(cells, total)
    }
}
