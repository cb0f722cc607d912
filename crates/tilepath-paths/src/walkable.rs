use tilepath_core::{Cell, Point};

/// Decides whether a cell may be entered during one search.
///
/// Blocked terrain is never walkable. The dynamic agent, when present, is an
/// obstacle everywhere except on the search's own endpoints, since the agent
/// usually stands on the cell the search starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walkability {
    agent: Option<Point>,
    endpoints: [Point; 2],
}

impl Walkability {
    pub fn new(agent: Option<Point>, start: Point, goal: Point) -> Self {
        Self {
            agent,
            endpoints: [start, goal],
        }
    }

    /// Whether `cell` may currently be entered. `None` (outside the grid)
    /// is never enterable.
    pub fn can_enter(&self, cell: Option<&Cell>) -> bool {
        let Some(cell) = cell else {
            return false;
        };
        if cell.terrain().is_blocked() {
            return false;
        }
        match self.agent {
            Some(a) if a == cell.pos() => self.endpoints.contains(&a),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::Terrain;

    fn cell(row: i32, col: i32) -> Cell {
        Cell::new(Point::from_row_col(row, col))
    }

    #[test]
    fn missing_or_blocked_is_not_walkable() {
        let w = Walkability::new(None, Point::ZERO, Point::new(3, 3));
        assert!(!w.can_enter(None));
        assert!(!w.can_enter(Some(&cell(1, 1).with_terrain(Terrain::Blocked))));
        assert!(w.can_enter(Some(&cell(1, 1))));
    }

    #[test]
    fn blocked_endpoint_stays_blocked() {
        let goal = Point::new(3, 3);
        let w = Walkability::new(None, Point::ZERO, goal);
        assert!(!w.can_enter(Some(&Cell::new(goal).with_terrain(Terrain::Blocked))));
    }

    #[test]
    fn agent_blocks_intermediate_cells() {
        let agent = Point::from_row_col(2, 2);
        let w = Walkability::new(Some(agent), Point::ZERO, Point::new(4, 4));
        assert!(!w.can_enter(Some(&Cell::new(agent))));
        assert!(w.can_enter(Some(&cell(2, 3))));
    }

    #[test]
    fn agent_on_endpoint_is_allowed() {
        let start = Point::from_row_col(0, 0);
        let goal = Point::from_row_col(4, 4);
        let on_start = Walkability::new(Some(start), start, goal);
        assert!(on_start.can_enter(Some(&Cell::new(start))));
        let on_goal = Walkability::new(Some(goal), start, goal);
        assert!(on_goal.can_enter(Some(&Cell::new(goal))));
    }
}
