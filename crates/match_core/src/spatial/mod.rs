//! 2D primitives the match loop is built on.
//!
//! - `vector`: immutable `Vector2D` value type
//! - `geometry`: stateless distance/intersection/containment routines
//! - `grid`: uniform-grid index for proximity queries

pub mod geometry;
pub mod grid;
pub mod vector;

pub use grid::{CellIndex, GridStats, SpatialGrid};
pub use vector::{Vector2D, EPSILON};
