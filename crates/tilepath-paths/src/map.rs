//! Text maps: building a [`Grid`] from ASCII art and drawing it back.
//!
//! One line per row, all the same width. `.` is open ground, `#` blocked,
//! `S` and `G` the start and goal markers, and a digit is open ground with
//! that movement cost. Rendering adds `*` for cells on the last path found
//! and `A` for the agent.
//!
//! Only costs 0 through 9 have a glyph. Costlier open cells render as `+`,
//! which [`Grid::parse`] rejects, so such grids do not survive a round trip.

use std::fmt;
use std::str::FromStr;

use tilepath_core::{Cost, DEFAULT_COST, Point, Terrain};

use crate::grid::Grid;

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Row `line` is not as wide as the first row.
    InconsistentWidth { line: usize },
    /// A character with no meaning in the map format.
    InvalidGlyph { ch: char, pos: Point },
    /// More than one start or goal marker.
    DuplicateMarker { ch: char },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth { line } => {
                write!(f, "map: line {line} differs in width from the first line")
            }
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "map: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch } => write!(f, "map: more than one \u{201c}{ch}\u{201d} marker"),
        }
    }
}

impl std::error::Error for MapError {}

impl Grid {
    /// Build a grid from a text map. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = s.trim().lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Grid::new(width as i32, rows.len() as i32);
        let mut seen_start = false;
        let mut seen_goal = false;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MapError::InconsistentWidth { line: y });
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let (terrain, cost) = match ch {
                    '0'..='9' => (Terrain::Open, ch as Cost - '0' as Cost),
                    _ => match Terrain::from_glyph(ch) {
                        Some(t) => (t, DEFAULT_COST),
                        None => return Err(MapError::InvalidGlyph { ch, pos: p }),
                    },
                };
                let seen = match terrain {
                    Terrain::Start => Some(&mut seen_start),
                    Terrain::Goal => Some(&mut seen_goal),
                    _ => None,
                };
                if let Some(seen) = seen {
                    if *seen {
                        return Err(MapError::DuplicateMarker { ch });
                    }
                    *seen = true;
                }
                grid.set_terrain(p, terrain);
                grid.set_cost(p, cost);
            }
        }
        Ok(grid)
    }

    /// Draw the grid in the text map format, overlaying the last path found
    /// and, if given, the agent.
    pub fn render(&self, agent: Option<Point>) -> String {
        let mut out = String::with_capacity(self.len() + self.height().max(0) as usize);
        for y in 0..self.height() {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width() {
                out.push(self.glyph_at(Point::new(x, y), agent));
            }
        }
        out
    }

    fn glyph_at(&self, p: Point, agent: Option<Point>) -> char {
        if agent == Some(p) {
            return 'A';
        }
        let Some(cell) = self.at(p) else {
            return ' ';
        };
        match cell.terrain() {
            Terrain::Open if self.on_path(p) => '*',
            Terrain::Open if cell.cost() != DEFAULT_COST => {
                char::from_digit(cell.cost(), 10).unwrap_or('+')
            }
            t => t.glyph(),
        }
    }
}

impl FromStr for Grid {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
