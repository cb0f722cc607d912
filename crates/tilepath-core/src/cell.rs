//! The static terrain model: [`Terrain`] and [`Cell`].
//!
//! A [`Cell`] only carries data that changes through explicit edits. Search
//! bookkeeping (visited flags, distances, back-links) lives elsewhere so that
//! clearing it never touches terrain.

use crate::geom::Point;

/// Movement cost of entering a cell. Unsigned, so costs are never negative.
pub type Cost = u32;

/// Cost of a freshly created cell.
pub const DEFAULT_COST: Cost = 1;

/// Terrain classification of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Open,
    /// Impassable.
    Blocked,
    /// Marks where a search starts. Walkable.
    Start,
    /// Marks where a search should end. Walkable.
    Goal,
}

impl Terrain {
    /// Whether this terrain can never be entered.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Rendering hint: the character used for this terrain in text maps.
    pub const fn glyph(self) -> char {
        match self {
            Self::Open => '.',
            Self::Blocked => '#',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Blocked),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }
}

/// One addressable grid position with its terrain and movement cost.
///
/// The position is fixed at construction; terrain and cost are edited in
/// place through the owning grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    terrain: Terrain,
    cost: Cost,
}

impl Cell {
    /// Create an open cell with [`DEFAULT_COST`].
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            terrain: Terrain::Open,
            cost: DEFAULT_COST,
        }
    }

    /// Set the terrain (builder).
    #[inline]
    pub const fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    /// Set the movement cost (builder).
    #[inline]
    pub const fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Weight added when a path enters this cell.
    #[inline]
    pub const fn cost(&self) -> Cost {
        self.cost
    }

    #[inline]
    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
    }

    #[inline]
    pub fn set_cost(&mut self, cost: Cost) {
        self.cost = cost;
    }
}
