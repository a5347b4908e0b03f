//! Drawing surface port.
//!
//! The renderer only needs three primitives: clear, stroke a polyline, and
//! fill an outlined circle. Adapters map them onto a canvas, an SVG document,
//! or a recorder in tests.

use crate::domain::{SurfacePoint, SurfaceSize};

/// A CSS-style color string (`#007bff`, `white`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub &'static str);

impl Color {
    /// Route stroke blue.
    pub const ROUTE_BLUE: Self = Self("#007bff");
    /// Start marker fill.
    pub const GREEN: Self = Self("green");
    /// End marker fill.
    pub const RED: Self = Self("red");
    /// Marker outline.
    pub const WHITE: Self = Self("white");

    /// The color string.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// How consecutive segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Rounded corners.
    #[default]
    Round,
    /// Sharp corners.
    Miter,
}

/// How a stroke's ends are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Rounded ends.
    #[default]
    Round,
    /// Flat ends at the endpoint.
    Butt,
}

/// Stroke parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// Segment join style.
    pub join: LineJoin,
    /// End cap style.
    pub cap: LineCap,
}

/// A 2D drawing surface with fixed pixel dimensions.
pub trait DrawingSurface: Send {
    /// Pixel size of the surface.
    fn size(&self) -> SurfaceSize;

    /// Erase everything.
    fn clear(&mut self);

    /// Stroke straight segments through `points` in order.
    fn stroke_polyline(&mut self, points: &[SurfacePoint], style: &StrokeStyle);

    /// Fill a circle and outline it.
    fn fill_circle(&mut self, center: SurfacePoint, radius: f64, fill: Color, outline: &StrokeStyle);
}

/// A drawing primitive captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Polyline stroke.
    Polyline {
        /// Points in draw order.
        points: Vec<SurfacePoint>,
        /// Stroke used.
        style: StrokeStyle,
    },
    /// Outlined filled circle.
    Circle {
        /// Center.
        center: SurfacePoint,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        fill: Color,
        /// Outline stroke.
        outline: StrokeStyle,
    },
}

/// Surface that records what is currently drawn.
///
/// `clear` empties the record, so `ops()` always reflects the visible state.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: SurfaceSize,
    ops: Vec<DrawOp>,
    clears: usize,
}

impl RecordingSurface {
    /// Create an empty surface of the given size.
    pub const fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            ops: Vec::new(),
            clears: 0,
        }
    }

    /// Primitives drawn since the last clear.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of times the surface was cleared.
    pub const fn clear_count(&self) -> usize {
        self.clears
    }

    /// The polylines currently drawn.
    pub fn polylines(&self) -> impl Iterator<Item = &[SurfacePoint]> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Polyline { points, .. } => Some(points.as_slice()),
            DrawOp::Circle { .. } => None,
        })
    }

    /// The circles currently drawn, as `(center, fill)`.
    pub fn circles(&self) -> impl Iterator<Item = (SurfacePoint, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle { center, fill, .. } => Some((*center, *fill)),
            DrawOp::Polyline { .. } => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.clears += 1;
    }

    fn stroke_polyline(&mut self, points: &[SurfacePoint], style: &StrokeStyle) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            style: *style,
        });
    }

    fn fill_circle(&mut self, center: SurfacePoint, radius: f64, fill: Color, outline: &StrokeStyle) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            fill,
            outline: *outline,
        });
    }
}
