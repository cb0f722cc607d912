use std::collections::VecDeque;

use tilepath_core::Point;

use crate::grid::Grid;
use crate::neighbors::Neighbors;
use crate::path::{NoPath, Path, PathResult};
use crate::scratch::{Distance, PathNode};
use crate::walkable::Walkability;

impl Grid {
    /// Shortest hop-count path from `start` to `goal`, searching outward from
    /// the goal.
    ///
    /// Every move costs 1. Because the search grows from the goal, back-links
    /// already point from start toward goal when the start is reached. Ties
    /// between equally short routes go to whichever neighbour was enqueued
    /// first (north, south, east, west).
    ///
    /// `agent` is the cell currently occupied by the moving agent, treated as
    /// an obstacle unless it is one of the endpoints. The grid must have been
    /// [reset](Self::reset_all) since the last search.
    pub fn reverse_bfs(&mut self, start: Point, goal: Point, agent: Option<Point>) -> PathResult {
        log::debug!("reverse bfs: {start} <- {goal}");
        let walk = Walkability::new(agent, start, goal);
        let (si, gi) = match self.begin_search(start, goal, &walk) {
            Ok(ends) => ends,
            Err(e) => return PathResult::NotFound(e),
        };

        self.state.cells[gi].visited = true;
        self.state.cells[gi].best = 0;

        if si == gi {
            return self.finish(vec![start], 0);
        }

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(gi);
        let mut nb = Neighbors::new();

        let reached = loop {
            let Some(ci) = queue.pop_front() else {
                break false;
            };
            let hops = self.state.cells[ci].best;
            let cp = self.point(ci);
            self.state.expanded.push(PathNode { pos: cp, cost: hops });
            if ci == si {
                break true;
            }

            for &ni in nb.walkable(self, cp, &walk) {
                let n = &mut self.state.cells[ni];
                if n.visited {
                    continue;
                }
                n.visited = true;
                n.came_from = Some(ci);
                n.best = hops + 1;
                queue.push_back(ni);
            }
        };

        if !reached {
            log::debug!("reverse bfs: no path from {start} to {goal}");
            return PathResult::NotFound(NoPath::Unreachable);
        }
        log::debug!("reverse bfs: reached start {start}");
        let hops = self.state.cells[si].best;
        let cells = self.reconstruct(start, goal);
        self.finish(cells, hops)
    }

    /// Shared validation for both algorithms. On success the grid is marked
    /// as needing a reset and the flat indices of (start, goal) are returned.
    pub(crate) fn begin_search(
        &mut self,
        start: Point,
        goal: Point,
        walk: &Walkability,
    ) -> Result<(usize, usize), NoPath> {
        if self.state.dirty {
            log::warn!("search requested on a grid that was not reset");
            return Err(NoPath::StaleState);
        }
        let (Some(si), Some(gi)) = (self.idx(start), self.idx(goal)) else {
            return Err(NoPath::InvalidEndpoint);
        };
        if !walk.can_enter(Some(&self.cells[si])) || !walk.can_enter(Some(&self.cells[gi])) {
            return Err(NoPath::InvalidEndpoint);
        }
        self.state.dirty = true;
        Ok((si, gi))
    }

    pub(crate) fn finish(&mut self, cells: Vec<Point>, cost: Distance) -> PathResult {
        self.mark_path(&cells);
        PathResult::Found(Path::new(cells, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use tilepath_core::Terrain;

    fn rc(row: i32, col: i32) -> Point {
        Point::from_row_col(row, col)
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let mut g = Grid::new(5, 5);
        let path = g.reverse_bfs(rc(0, 0), rc(4, 4), None).into_path().unwrap();
        assert_eq!(path.hops(), 8);
        assert_eq!(path.cost(), 8);
        assert_eq!(path.start(), rc(0, 0));
        assert_eq!(path.goal(), rc(4, 4));
        // monotonic staircase
        for w in path.cells().windows(2) {
            assert!(w[1].row() >= w[0].row() && w[1].col() >= w[0].col());
            assert!(w[0].is_adjacent(w[1]));
        }
    }

    #[test]
    fn hop_counts_are_distances_to_goal() {
        let mut g = Grid::new(5, 5);
        let _ = g.reverse_bfs(rc(0, 0), rc(4, 4), None);
        assert_eq!(g.best_cost(rc(4, 4)), Some(0));
        assert_eq!(g.best_cost(rc(0, 0)), Some(8));
        assert_eq!(g.came_from(rc(4, 4)), None);
    }

    #[test]
    fn path_cells_are_flagged() {
        let mut g = Grid::new(4, 4);
        let path = g.reverse_bfs(rc(0, 0), rc(3, 0), None).into_path().unwrap();
        for p in g.bounds() {
            assert_eq!(g.on_path(p), path.cells().contains(&p));
        }
    }

    #[test]
    fn start_equals_goal() {
        let mut g = Grid::new(5, 5);
        let path = g.reverse_bfs(rc(2, 2), rc(2, 2), None).into_path().unwrap();
        assert_eq!(path.cells(), &[rc(2, 2)]);
        assert!(path.intermediate().is_empty());
        assert_eq!(path.cost(), 0);
        assert_eq!(g.expansions().len(), 0);
    }

    #[test]
    fn invalid_endpoints_do_not_mutate() {
        let mut g = Grid::new(3, 3);
        g.block(rc(2, 2));
        assert_eq!(
            g.reverse_bfs(rc(0, 0), rc(2, 2), None),
            PathResult::NotFound(NoPath::InvalidEndpoint)
        );
        assert_eq!(
            g.reverse_bfs(rc(0, 0), rc(3, 3), None),
            PathResult::NotFound(NoPath::InvalidEndpoint)
        );
        assert_eq!(
            g.reverse_bfs(rc(-1, 0), rc(1, 1), None),
            PathResult::NotFound(NoPath::InvalidEndpoint)
        );
        assert!(!g.needs_reset());
        assert!(g.bounds().iter().all(|p| !g.visited(p)));
    }

    #[test]
    fn blocked_row_separates() {
        let mut g = Grid::new(5, 5);
        for col in 0..5 {
            g.block(rc(2, col));
        }
        assert_eq!(
            g.reverse_bfs(rc(0, 0), rc(4, 4), None),
            PathResult::NotFound(NoPath::Unreachable)
        );
        for p in g.bounds() {
            if let Some(prev) = g.came_from(p) {
                assert!(p.row() > 2 && prev.row() > 2, "{p} linked across the wall");
            }
            assert!(!g.on_path(p));
        }
        assert_eq!(g.best_cost(rc(0, 0)), None);
    }

    #[test]
    fn agent_blocks_corridor() {
        let mut g = Grid::new(5, 3);
        for col in 0..5 {
            g.block(rc(0, col));
            g.block(rc(2, col));
        }
        let (start, goal) = (rc(1, 0), rc(1, 4));
        assert!(g.reverse_bfs(start, goal, None).is_found());
        g.reset_all();
        assert_eq!(
            g.reverse_bfs(start, goal, Some(rc(1, 2))),
            PathResult::NotFound(NoPath::Unreachable)
        );
    }

    #[test]
    fn agent_on_start_is_fine() {
        let mut g = Grid::new(4, 4);
        let path = g
            .reverse_bfs(rc(0, 0), rc(3, 3), Some(rc(0, 0)))
            .into_path()
            .unwrap();
        assert_eq!(path.hops(), 6);
    }

    #[test]
    fn routes_around_walls() {
        let mut g = Grid::new(5, 5);
        // wall with a single gap at the right edge
        for col in 0..4 {
            g.block(rc(2, col));
        }
        let path = g.reverse_bfs(rc(0, 0), rc(4, 0), None).into_path().unwrap();
        assert_eq!(path.hops(), 12);
        assert!(path.cells().contains(&rc(2, 4)));
        for p in path.cells() {
            assert_ne!(g.at(*p).unwrap().terrain(), Terrain::Blocked);
        }
    }

    #[test]
    fn second_search_without_reset_is_rejected() {
        let mut g = Grid::new(3, 3);
        assert!(g.reverse_bfs(rc(0, 0), rc(2, 2), None).is_found());
        assert_eq!(
            g.reverse_bfs(rc(0, 0), rc(2, 2), None),
            PathResult::NotFound(NoPath::StaleState)
        );
        g.reset_all();
        assert!(g.reverse_bfs(rc(0, 0), rc(2, 2), None).is_found());
    }

    #[test]
    fn terrain_costs_do_not_matter() {
        let mut g = Grid::new(3, 1);
        g.set_cost(rc(0, 1), 50);
        let path = g.reverse_bfs(rc(0, 0), rc(0, 2), None).into_path().unwrap();
        assert_eq!(path.cost(), 2);
    }

    #[test]
    fn hop_count_equals_manhattan_on_open_grids() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let w = rng.random_range(1..12);
            let h = rng.random_range(1..12);
            let mut g = Grid::new(w, h);
            let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            let goal = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            let path = g.reverse_bfs(start, goal, None).into_path().unwrap();
            assert_eq!(path.hops() as i32, manhattan(start, goal));
            assert_eq!(path.cost() as i32, manhattan(start, goal));
        }
    }

    #[test]
    fn paths_are_cardinal_chains_around_obstacles() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut g = Grid::new(10, 10);
            for p in g.bounds() {
                if rng.random_range(0..4) == 0 {
                    g.block(p);
                }
            }
            let start = Point::new(0, 0);
            let goal = Point::new(9, 9);
            g.set_terrain(start, Terrain::Open);
            g.set_terrain(goal, Terrain::Open);
            if let PathResult::Found(path) = g.reverse_bfs(start, goal, None) {
                assert_eq!(path.start(), start);
                assert_eq!(path.goal(), goal);
                for w in path.cells().windows(2) {
                    assert!(w[0].is_adjacent(w[1]));
                }
                assert!(path.cells().iter().all(|p| !g.at(*p).unwrap().terrain().is_blocked()));
                assert!(path.hops() as i32 >= manhattan(start, goal));
            }
        }
    }
}
