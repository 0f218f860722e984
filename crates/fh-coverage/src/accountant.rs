//! The `CoverageAccountant`: visited cells, swept edges, and area.

use std::f64::consts::PI;

use fh_core::GridPoint;

use crate::{Direction, EdgeCorner};

/// Area of a circle inscribed in a unit cell.
pub const CIRCLE_AREA: f64 = PI / 4.0;

/// Area of one corner sliver left between a cell's inscribed circle and the
/// cell boundary.
pub const EDGE_AREA: f64 = (4.0 - PI) / 16.0;

#[cfg(feature = "fx-hash")]
type PointSet = rustc_hash::FxHashSet<GridPoint>;

#[cfg(not(feature = "fx-hash"))]
type PointSet = std::collections::HashSet<GridPoint>;

/// Tracks which cells and corner slivers the fleet has covered.
///
/// All five sets only grow, so [`estimated_area`][Self::estimated_area] is
/// non-decreasing over a run.  Inserting a point twice has no effect.
#[derive(Clone, Debug, Default)]
pub struct CoverageAccountant {
    visited: PointSet,
    edges:   [PointSet; 4],
}

impl CoverageAccountant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accountant with every position in `starts` already visited.
    pub fn with_visited<I: IntoIterator<Item = GridPoint>>(starts: I) -> Self {
        let mut acc = Self::new();
        for p in starts {
            acc.visit(p);
        }
        acc
    }

    /// Mark `p` as visited without crediting any edge.
    #[inline]
    pub fn visit(&mut self, p: GridPoint) {
        self.visited.insert(p);
    }

    /// `true` if any robot has ever occupied `p`.
    #[inline]
    pub fn is_harvested(&self, p: GridPoint) -> bool {
        self.visited.contains(&p)
    }

    /// Record one robot moving from `start` to `end`.
    ///
    /// `end` is always marked visited.  For a unit move the swept corner
    /// slivers of both cells are credited; staying in place credits nothing
    /// else.  Returns the classified direction.
    pub fn record_move(&mut self, start: GridPoint, end: GridPoint) -> Direction {
        self.visited.insert(end);
        let dir = Direction::between(start, end);
        if let Some((start_corners, end_corners)) = dir.swept_corners() {
            for corner in start_corners {
                self.edges[corner.index()].insert(start);
            }
            for corner in end_corners {
                self.edges[corner.index()].insert(end);
            }
        }
        dir
    }

    /// Number of distinct visited cells.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of cells credited with the `corner` sliver.
    #[inline]
    pub fn edge_count(&self, corner: EdgeCorner) -> usize {
        self.edges[corner.index()].len()
    }

    /// Total corner slivers across all four edge sets.
    pub fn total_edge_count(&self) -> usize {
        self.edges.iter().map(|s| s.len()).sum()
    }

    /// Cells credited with the `corner` sliver (unordered).
    pub fn edges(&self, corner: EdgeCorner) -> impl Iterator<Item = GridPoint> + '_ {
        self.edges[corner.index()].iter().copied()
    }

    #[inline]
    pub fn contains_edge(&self, corner: EdgeCorner, p: GridPoint) -> bool {
        self.edges[corner.index()].contains(&p)
    }

    /// Iterate the visited cells (unordered).
    pub fn visited(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.visited.iter().copied()
    }

    /// Covered area in cell-area units.
    pub fn estimated_area(&self) -> f64 {
        self.visited.len() as f64 * CIRCLE_AREA + self.total_edge_count() as f64 * EDGE_AREA
    }
}
