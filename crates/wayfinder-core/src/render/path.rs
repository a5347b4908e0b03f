//! Route drawing.

use crate::domain::{GridCell, RoutePath, SurfacePoint};
use crate::ports::{Color, DrawingSurface, LineCap, LineJoin, StrokeStyle};
use crate::settings::{DEFAULT_MARKER_RADIUS, DEFAULT_STROKE_WIDTH};

use super::mapper::CoordinateMapper;

/// Visual parameters for a drawn route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    /// Stroke through the route cells.
    pub route: StrokeStyle,
    /// Marker radius in pixels.
    pub marker_radius: f64,
    /// Start marker fill.
    pub start_fill: Color,
    /// End marker fill.
    pub end_fill: Color,
    /// Outline around both markers.
    pub marker_outline: StrokeStyle,
}

impl PathStyle {
    /// Default style with a custom stroke width and marker radius.
    pub fn sized(stroke_width: f64, marker_radius: f64) -> Self {
        let mut style = Self::default();
        style.route.width = stroke_width;
        style.marker_radius = marker_radius;
        style
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            route: StrokeStyle {
                color: Color::ROUTE_BLUE,
                width: DEFAULT_STROKE_WIDTH,
                join: LineJoin::Round,
                cap: LineCap::Round,
            },
            marker_radius: DEFAULT_MARKER_RADIUS,
            start_fill: Color::GREEN,
            end_fill: Color::RED,
            marker_outline: StrokeStyle {
                color: Color::WHITE,
                width: 2.0,
                join: LineJoin::Round,
                cap: LineCap::Round,
            },
        }
    }
}

/// What a render call put on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Route stroke (if any) and both markers were drawn.
    Drawn {
        /// Straight segments in the route stroke.
        segments: usize,
    },
    /// The path had no cells; the surface was only cleared.
    Empty,
}

/// Draws routes onto a surface.
///
/// Every call clears the whole surface first; nothing carries over between
/// renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRenderer {
    mapper: CoordinateMapper,
    style: PathStyle,
}

impl PathRenderer {
    /// Create a renderer.
    pub const fn new(mapper: CoordinateMapper, style: PathStyle) -> Self {
        Self { mapper, style }
    }

    /// The mapper in use.
    pub const fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Clear `surface` and draw `path` with its start and end markers.
    ///
    /// An empty path leaves the surface blank; the caller reports "no path".
    /// A single-cell path gets markers but no stroke.
    pub fn render(&self, surface: &mut dyn DrawingSurface, path: &RoutePath) -> RenderOutcome {
        surface.clear();

        if path.is_empty() {
            return RenderOutcome::Empty;
        }

        let points: Vec<SurfacePoint> = path.cells.iter().map(|cell| self.mapper.map(*cell)).collect();
        let segments = points.len() - 1;
        if segments > 0 {
            surface.stroke_polyline(&points, &self.style.route);
        }

        self.draw_marker(surface, path.start, self.style.start_fill);
        self.draw_marker(surface, path.end, self.style.end_fill);

        tracing::debug!(cells = path.cells.len(), segments, "Route rendered");
        RenderOutcome::Drawn { segments }
    }

    /// Erase any drawn route.
    pub fn clear(&self, surface: &mut dyn DrawingSurface) {
        surface.clear();
    }

    fn draw_marker(&self, surface: &mut dyn DrawingSurface, cell: GridCell, fill: Color) {
        surface.fill_circle(
            self.mapper.map(cell),
            self.style.marker_radius,
            fill,
            &self.style.marker_outline,
        );
    }
}
