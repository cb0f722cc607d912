//! Pathfinding over a mutable terrain grid.
//!
//! A [`Grid`] owns every cell of a fixed-size rectangle together with the
//! bookkeeping searches leave behind. Two strategies run on it:
//!
//! - **Reverse BFS** ([`Grid::reverse_bfs`]): fewest moves, searching from the
//!   goal back toward the start. Every move costs 1.
//! - **Dijkstra** ([`Grid::dijkstra`]): cheapest route, searching forward from
//!   the start. A move costs the sum of both cells' movement costs.
//!
//! Both return a [`PathResult`]. Movement is 4-way only, and a moving agent
//! passed to either search is routed around like a wall.
//!
//! Searches leave their state on the grid for inspection (distances,
//! back-links, the cells on the path). Call [`Grid::reset_all`] before the
//! next search; a search on a grid that still holds old state returns
//! [`NoPath::StaleState`].
//!
//! ```
//! use tilepath_core::Point;
//! use tilepath_paths::Grid;
//!
//! let mut grid = Grid::new(5, 5);
//! let start = Point::from_row_col(0, 0);
//! let goal = Point::from_row_col(4, 4);
//!
//! let path = grid.reverse_bfs(start, goal, None).into_path().unwrap();
//! assert_eq!(path.hops(), 8);
//!
//! grid.reset_all();
//! let path = grid.dijkstra(start, goal, None).into_path().unwrap();
//! assert_eq!(path.cost(), 16);
//! ```

mod bfs;
mod config;
mod dijkstra;
mod distance;
mod grid;
mod map;
mod neighbors;
mod path;
mod scratch;
mod walkable;

pub use config::GridConfig;
pub use distance::manhattan;
pub use grid::Grid;
pub use map::MapError;
pub use path::{NoPath, Path, PathResult};
pub use scratch::{Distance, PathNode, Scratch, UNREACHABLE};
pub use walkable::Walkability;
