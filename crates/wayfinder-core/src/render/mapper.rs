//! Grid-to-surface coordinate mapping.

use crate::domain::{GridCell, GridExtent, SurfacePoint, SurfaceSize};

/// Maps grid cells to the pixel center of the cell on the surface.
///
/// This is the only place that knows the grid-to-surface scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    cell_width: f64,
    cell_height: f64,
}

impl CoordinateMapper {
    /// Create a mapper for a grid drawn over a surface of the given size.
    pub fn new(extent: GridExtent, surface: SurfaceSize) -> Self {
        Self {
            cell_width: surface.width / f64::from(extent.columns),
            cell_height: surface.height / f64::from(extent.rows),
        }
    }

    /// Width of one cell in pixels.
    pub const fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Height of one cell in pixels.
    pub const fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Center of `cell` on the surface.
    pub fn map(&self, cell: GridCell) -> SurfacePoint {
        let x = f64::from(cell.column).mul_add(self.cell_width, self.cell_width / 2.0);
        let y = f64::from(cell.row).mul_add(self.cell_height, self.cell_height / 2.0);
        SurfacePoint::new(x, y)
    }
}
