//! **tilepath-core**: foundational types for grid pathfinding.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! static terrain model ([`Terrain`], [`Cell`]) shared by the search engine in
//! `tilepath-paths` and by whatever renders or edits the grid.

pub mod cell;
pub mod geom;

pub use cell::{Cell, Cost, DEFAULT_COST, Terrain};
pub use geom::{Point, Range};
