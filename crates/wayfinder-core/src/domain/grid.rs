//! Logical navigation grid and rendering-surface geometry.

use serde::{Deserialize, Serialize};

/// Rows in the reference floor-plan grid.
pub const DEFAULT_GRID_ROWS: u32 = 60;

/// Columns in the reference floor-plan grid.
pub const DEFAULT_GRID_COLUMNS: u32 = 60;

/// A `(row, column)` cell on the navigation grid.
///
/// Serialized as the two-element array `[row, column]` used on the wire.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct GridCell {
    /// Zero-based row (y axis).
    pub row: u32,
    /// Zero-based column (x axis).
    pub column: u32,
}

impl GridCell {
    /// Create a cell.
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl From<[u32; 2]> for GridCell {
    fn from([row, column]: [u32; 2]) -> Self {
        Self { row, column }
    }
}

impl From<GridCell> for [u32; 2] {
    fn from(cell: GridCell) -> Self {
        [cell.row, cell.column]
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Size of the logical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridExtent {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub columns: u32,
}

impl GridExtent {
    /// Create an extent.
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Whether `cell` lies inside the grid.
    pub const fn contains(&self, cell: GridCell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }
}

impl Default for GridExtent {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_ROWS, DEFAULT_GRID_COLUMNS)
    }
}

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl SurfaceSize {
    /// Create a surface size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(600.0, 600.0)
    }
}

/// A point on the rendering surface.
///
/// Only the coordinate mapper creates these, so every point is the center of
/// some grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    x: f64,
    y: f64,
}

impl SurfacePoint {
    pub(crate) const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal pixel coordinate.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical pixel coordinate.
    pub const fn y(&self) -> f64 {
        self.y
    }
}

/// A route returned by the pathfinding service.
///
/// `start` and `end` are supplied separately by the service and need not equal
/// the first and last cells. An empty `cells` sequence means no path exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    /// Ordered cells from start to end.
    pub cells: Vec<GridCell>,
    /// Cell for the start marker.
    pub start: GridCell,
    /// Cell for the end marker.
    pub end: GridCell,
}

impl RoutePath {
    /// Whether the service found no path.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell (path or markers) lying outside `extent`, if any.
    pub fn first_cell_outside(&self, extent: GridExtent) -> Option<GridCell> {
        self.cells
            .iter()
            .chain([&self.start, &self.end])
            .copied()
            .find(|cell| !extent.contains(*cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_contains() {
        let extent = GridExtent::default();
        assert!(extent.contains(GridCell::new(0, 0)));
        assert!(extent.contains(GridCell::new(59, 59)));
        assert!(!extent.contains(GridCell::new(60, 0)));
        assert!(!extent.contains(GridCell::new(0, 60)));
    }

    #[test]
    fn test_grid_cell_wire_form() {
        let cell: GridCell = serde_json::from_str("[2, 3]").unwrap();
        assert_eq!(cell, GridCell::new(2, 3));
        assert_eq!(serde_json::to_string(&cell).unwrap(), "[2,3]");
        assert!(serde_json::from_str::<GridCell>("[-1, 3]").is_err());
    }

    #[test]
    fn test_first_cell_outside_checks_markers() {
        let path = RoutePath {
            cells: vec![GridCell::new(1, 1)],
            start: GridCell::new(1, 1),
            end: GridCell::new(1, 75),
        };
        assert_eq!(
            path.first_cell_outside(GridExtent::default()),
            Some(GridCell::new(1, 75))
        );
    }
}
