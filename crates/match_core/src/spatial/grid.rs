//! Uniform-grid spatial index over the pitch.
//!
//! - Truth = entity positions owned by the caller (meters)
//! - Grid = disposable query layer, rebuilt every tick
//!
//! Cells are stored row-major as `Option<set>` slots. An empty cell holds no
//! collection at all; the set is created lazily on first insert, and
//! [`SpatialGrid::clear`] drops every slot back to `None` in O(cells)
//! without walking cell contents.
//!
//! ## Query contract
//!
//! [`SpatialGrid::query_near`] returns every entity in a *square* of cells
//! around the center cell. This over-approximates the requested circle, so
//! callers that need circular precision must re-filter by exact (squared)
//! distance themselves.
//!
//! Not thread-safe by construction (`&mut self` mutation); one grid belongs
//! to one simulation.

use std::hash::Hash;

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::vector::Vector2D;
use crate::error::{MatchError, Result};

/// A cell index in (col,row). Both are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex {
    pub col: usize,
    pub row: usize,
}

impl CellIndex {
    #[inline]
    pub fn id(self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

/// Occupancy summary for debugging and tuning the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStats {
    pub total_cells: usize,
    pub occupied_cells: usize,
    pub total_entities: usize,
    pub avg_entities_per_occupied_cell: f64,
}

#[derive(Debug, Clone)]
pub struct SpatialGrid<K> {
    width: f64,
    height: f64,
    cell_size: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Option<FxHashSet<K>>>, // len = cols*rows
}

impl<K: Copy + Eq + Hash> SpatialGrid<K> {
    /// Grid of `ceil(width/cell_size) × ceil(height/cell_size)` cells.
    pub fn new(width: f64, height: f64, cell_size: f64) -> Result<Self> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(cell_size) || !positive(width) || !positive(height) {
            return Err(MatchError::Config(format!(
                "grid needs positive dimensions, got {width}x{height} with cell size {cell_size}"
            )));
        }

        let cols = (width / cell_size).ceil() as usize;
        let rows = (height / cell_size).ceil() as usize;
        let mut cells = Vec::with_capacity(cols * rows);
        cells.resize_with(cols * rows, || None);

        Ok(Self { width, height, cell_size, cols, rows, cells })
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Domain size in meters as `(width, height)`.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Convert a position to its cell.
    /// Out-of-bounds positions are absorbed into the nearest edge cell.
    #[inline]
    pub fn cell_of(&self, position: Vector2D) -> CellIndex {
        let col = (position.x / self.cell_size).floor() as i64;
        let row = (position.y / self.cell_size).floor() as i64;
        CellIndex {
            col: col.clamp(0, self.cols as i64 - 1) as usize,
            row: row.clamp(0, self.rows as i64 - 1) as usize,
        }
    }

    /// Drop every cell back to the empty slot.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|slot| *slot = None);
    }

    /// Insert `id` into the cell covering `position`. Re-inserting the same
    /// id into the same cell is a no-op.
    pub fn insert(&mut self, id: K, position: Vector2D) {
        let idx = self.cell_of(position).id(self.cols);
        self.cells[idx].get_or_insert_with(FxHashSet::default).insert(id);
    }

    pub fn remove(&mut self, id: K, position: Vector2D) {
        let idx = self.cell_of(position).id(self.cols);
        if let Some(set) = self.cells[idx].as_mut() {
            set.remove(&id);
        }
    }

    /// Move `id` between cells. Nothing happens when both positions share a cell.
    pub fn update(&mut self, id: K, old_position: Vector2D, new_position: Vector2D) {
        if self.cell_of(old_position) == self.cell_of(new_position) {
            return;
        }
        self.remove(id, old_position);
        self.insert(id, new_position);
    }

    /// Entities in every cell within `ceil(radius / cell_size)` cells of the
    /// center cell, in every direction.
    ///
    /// Square over-approximation: see the module docs. A negative radius
    /// yields an empty set.
    pub fn query_near(&self, position: Vector2D, radius: f64) -> FxHashSet<K> {
        let mut found = FxHashSet::default();
        if radius.is_nan() || radius < 0.0 {
            return found;
        }
        let cell_radius = (radius / self.cell_size).ceil();
        // Saturating float→int cast keeps very large radii in range.
        let cell_radius = cell_radius as i64;

        let center = self.cell_of(position);
        let (cx, cy) = (center.col as i64, center.row as i64);
        let min_col = cx.saturating_sub(cell_radius).max(0) as usize;
        let max_col = cx.saturating_add(cell_radius).min(self.cols as i64 - 1) as usize;
        let min_row = cy.saturating_sub(cell_radius).max(0) as usize;
        let max_row = cy.saturating_add(cell_radius).min(self.rows as i64 - 1) as usize;

        self.collect_rect(min_col, max_col, min_row, max_row, &mut found);
        found
    }

    /// Entities in the cells covering the box spanned by two corners.
    /// The corners may be given in any order.
    pub fn query_area(&self, min: Vector2D, max: Vector2D) -> FxHashSet<K> {
        let a = self.cell_of(min);
        let b = self.cell_of(max);

        let mut found = FxHashSet::default();
        self.collect_rect(
            a.col.min(b.col),
            a.col.max(b.col),
            a.row.min(b.row),
            a.row.max(b.row),
            &mut found,
        );
        found
    }

    /// Entities in every cell the segment `start`-`end` passes through.
    pub fn query_along_line(&self, start: Vector2D, end: Vector2D) -> FxHashSet<K> {
        let mut found = FxHashSet::default();
        for cell in self.cells_along_line(start, end) {
            if let Some(set) = &self.cells[cell.id(self.cols)] {
                found.extend(set.iter().copied());
            }
        }
        found
    }

    /// Cells visited by Bresenham's line algorithm on cell coordinates,
    /// from the start cell to the end cell inclusive.
    pub fn cells_along_line(&self, start: Vector2D, end: Vector2D) -> Vec<CellIndex> {
        let from = self.cell_of(start);
        let to = self.cell_of(end);

        let (mut x, mut y) = (from.col as i64, from.row as i64);
        let (x1, y1) = (to.col as i64, to.row as i64);
        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        let mut out = Vec::with_capacity((dx.max(dy) + 1) as usize);
        loop {
            out.push(CellIndex { col: x as usize, row: y as usize });
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
        out
    }

    pub fn total_entity_count(&self) -> usize {
        self.cells.iter().flatten().map(|set| set.len()).sum()
    }

    pub fn cell_stats(&self) -> GridStats {
        let (occupied_cells, total_entities) = self
            .cells
            .iter()
            .flatten()
            .filter(|set| !set.is_empty())
            .fold((0, 0), |(cells, entities), set| (cells + 1, entities + set.len()));

        GridStats {
            total_cells: self.cols * self.rows,
            occupied_cells,
            total_entities,
            avg_entities_per_occupied_cell: if occupied_cells > 0 {
                total_entities as f64 / occupied_cells as f64
            } else {
                0.0
            },
        }
    }

    fn collect_rect(
        &self,
        min_col: usize,
        max_col: usize,
        min_row: usize,
        max_row: usize,
        found: &mut FxHashSet<K>,
    ) {
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                if let Some(set) = &self.cells[CellIndex { col, row }.id(self.cols)] {
                    found.extend(set.iter().copied());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch_grid() -> SpatialGrid<u32> {
        SpatialGrid::new(105.0, 68.0, 5.0).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let grid = pitch_grid();
        assert_eq!(grid.cols(), 21);
        assert_eq!(grid.rows(), 14);
        assert_eq!(grid.cell_stats().total_cells, 294);
    }

    #[test]
    fn test_rejects_non_positive_cell_size() {
        assert!(SpatialGrid::<u32>::new(105.0, 68.0, 0.0).is_err());
        assert!(SpatialGrid::<u32>::new(105.0, 68.0, -5.0).is_err());
        assert!(SpatialGrid::<u32>::new(0.0, 68.0, 5.0).is_err());
    }

    #[test]
    fn test_insert_query_remove() {
        let mut grid = pitch_grid();
        let pos = Vector2D::new(52.5, 34.0);
        grid.insert(7, pos);
        assert!(grid.query_near(pos, 1.0).contains(&7));

        grid.remove(7, pos);
        assert!(grid.query_near(pos, 1.0).is_empty());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut grid = pitch_grid();
        let pos = Vector2D::new(10.0, 10.0);
        grid.insert(1, pos);
        grid.insert(1, pos);
        assert_eq!(grid.total_entity_count(), 1);
        assert_eq!(grid.query_near(pos, 5.0).len(), 1);
    }

    #[test]
    fn test_clear_empties_every_cell() {
        let mut grid = pitch_grid();
        for i in 0..22 {
            grid.insert(i, Vector2D::new(i as f64 * 4.0, i as f64 * 3.0));
        }
        assert_eq!(grid.total_entity_count(), 22);
        grid.clear();
        assert_eq!(grid.total_entity_count(), 0);
        assert_eq!(grid.cell_stats().occupied_cells, 0);
    }

    #[test]
    fn test_out_of_bounds_absorbed_at_edge() {
        let mut grid = pitch_grid();
        grid.insert(1, Vector2D::new(-20.0, -20.0));
        grid.insert(2, Vector2D::new(500.0, 500.0));
        assert_eq!(grid.cell_of(Vector2D::new(-20.0, -20.0)), CellIndex { col: 0, row: 0 });
        assert_eq!(grid.cell_of(Vector2D::new(105.0, 68.0)), CellIndex { col: 20, row: 13 });
        assert!(grid.query_near(Vector2D::new(0.0, 0.0), 1.0).contains(&1));
        assert!(grid.query_near(Vector2D::new(104.0, 67.0), 1.0).contains(&2));
    }

    #[test]
    fn test_query_near_is_square_over_approximation() {
        let mut grid = pitch_grid();
        let center = Vector2D::new(52.0, 32.0);
        // Diagonal corner of the neighbouring cell: outside the 5m circle
        let corner = Vector2D::new(59.9, 39.9);
        grid.insert(1, corner);
        assert!(center.distance_to(corner) > 5.0);
        assert!(grid.query_near(center, 5.0).contains(&1));
    }

    #[test]
    fn test_query_edge_cases_never_fail() {
        let mut grid = pitch_grid();
        assert!(grid.query_near(Vector2D::new(50.0, 30.0), 1000.0).is_empty());

        grid.insert(1, Vector2D::new(50.0, 30.0));
        assert!(grid.query_near(Vector2D::new(50.0, 30.0), -1.0).is_empty());
        assert!(grid.query_near(Vector2D::new(50.0, 30.0), -0.001).is_empty());
        assert!(grid.query_near(Vector2D::new(50.0, 30.0), f64::NAN).is_empty());
        assert!(grid.query_near(Vector2D::new(50.0, 30.0), 0.0).contains(&1));
        assert!(grid.query_near(Vector2D::new(50.0, 30.0), f64::MAX).contains(&1));
        assert!(grid.query_area(Vector2D::new(-100.0, -100.0), Vector2D::new(-50.0, -50.0)).is_empty());
    }

    #[test]
    fn test_update_moves_between_cells() {
        let mut grid = pitch_grid();
        let old = Vector2D::new(2.0, 2.0);
        let new = Vector2D::new(80.0, 50.0);
        grid.insert(3, old);

        grid.update(3, old, new);
        assert!(grid.query_near(old, 1.0).is_empty());
        assert!(grid.query_near(new, 1.0).contains(&3));
        assert_eq!(grid.total_entity_count(), 1);

        // Same cell: membership unchanged
        grid.update(3, new, Vector2D::new(81.0, 51.0));
        assert!(grid.query_near(new, 1.0).contains(&3));
    }

    #[test]
    fn test_query_area_accepts_swapped_corners() {
        let mut grid = pitch_grid();
        grid.insert(1, Vector2D::new(20.0, 20.0));
        grid.insert(2, Vector2D::new(90.0, 60.0));

        let a = grid.query_area(Vector2D::new(10.0, 10.0), Vector2D::new(30.0, 30.0));
        let b = grid.query_area(Vector2D::new(30.0, 30.0), Vector2D::new(10.0, 10.0));
        assert_eq!(a, b);
        assert!(a.contains(&1));
        assert!(!a.contains(&2));
    }

    #[test]
    fn test_query_along_line() {
        let mut grid = pitch_grid();
        grid.insert(1, Vector2D::new(52.0, 34.0)); // on the diagonal
        grid.insert(2, Vector2D::new(52.0, 5.0)); // far off it

        let hits = grid.query_along_line(Vector2D::new(0.0, 0.0), Vector2D::new(104.0, 67.0));
        assert!(!hits.contains(&2));

        let straight = grid.query_along_line(Vector2D::new(0.0, 34.0), Vector2D::new(104.0, 34.0));
        assert!(straight.contains(&1));
    }

    #[test]
    fn test_cells_along_line_is_connected() {
        let grid = pitch_grid();
        let cells = grid.cells_along_line(Vector2D::new(1.0, 1.0), Vector2D::new(100.0, 40.0));
        assert_eq!(cells.first(), Some(&CellIndex { col: 0, row: 0 }));
        assert_eq!(cells.last(), Some(&CellIndex { col: 20, row: 8 }));
        for pair in cells.windows(2) {
            let dc = (pair[0].col as i64 - pair[1].col as i64).abs();
            let dr = (pair[0].row as i64 - pair[1].row as i64).abs();
            assert!(dc <= 1 && dr <= 1);
        }

        let single = grid.cells_along_line(Vector2D::new(1.0, 1.0), Vector2D::new(2.0, 2.0));
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_cell_stats() {
        let mut grid = pitch_grid();
        grid.insert(1, Vector2D::new(1.0, 1.0));
        grid.insert(2, Vector2D::new(2.0, 2.0));
        grid.insert(3, Vector2D::new(50.0, 50.0));
        let stats = grid.cell_stats();
        assert_eq!(stats.occupied_cells, 2);
        assert_eq!(stats.total_entities, 3);
        assert!((stats.avg_entities_per_occupied_cell - 1.5).abs() < 1e-9);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any inserted entity is found by a radius query covering its cell
            #[test]
            fn prop_inserted_entity_is_found(
                x in -50.0f64..200.0, y in -50.0f64..150.0, radius in 0.0f64..40.0
            ) {
                let mut grid = pitch_grid();
                let pos = Vector2D::new(x, y);
                grid.insert(9, pos);
                prop_assert!(grid.query_near(pos, radius).contains(&9));
                prop_assert!(grid.query_along_line(pos, Vector2D::new(52.5, 34.0)).contains(&9));
            }
        }
    }
}
