//! SVG drawing surface.
//!
//! Renders the route overlay as a standalone SVG document the same size as
//! the floor-plan canvas, so it can be laid over the plan image.

use wayfinder_core::{
    Color, DrawingSurface, LineCap, LineJoin, StrokeStyle, SurfacePoint, SurfaceSize,
};

/// Drawing surface that accumulates SVG elements.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    size: SurfaceSize,
    elements: Vec<String>,
}

impl SvgSurface {
    /// An empty surface of `size` pixels.
    pub const fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            elements: Vec::new(),
        }
    }

    /// Number of drawn elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The complete SVG document.
    pub fn to_svg_string(&self) -> String {
        let SurfaceSize { width, height } = self.size;
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        );
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

const fn join_attr(join: LineJoin) -> &'static str {
    match join {
        LineJoin::Round => "round",
        LineJoin::Miter => "miter",
    }
}

const fn cap_attr(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Round => "round",
        LineCap::Butt => "butt",
    }
}

fn stroke_attrs(style: &StrokeStyle) -> String {
    format!(
        "stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"{}\" stroke-linecap=\"{}\"",
        style.color.as_str(),
        style.width,
        join_attr(style.join),
        cap_attr(style.cap)
    )
}

impl DrawingSurface for SvgSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn stroke_polyline(&mut self, points: &[SurfacePoint], style: &StrokeStyle) {
        let coords = points
            .iter()
            .map(|point| format!("{},{}", point.x(), point.y()))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            "<polyline points=\"{coords}\" fill=\"none\" {}/>",
            stroke_attrs(style)
        ));
    }

    fn fill_circle(&mut self, center: SurfacePoint, radius: f64, fill: Color, outline: &StrokeStyle) {
        self.elements.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"{}\" {}/>",
            center.x(),
            center.y(),
            fill.as_str(),
            stroke_attrs(outline)
        ));
    }
}
