//! Floor-plan rendering: cell-to-pixel mapping and route drawing.

mod mapper;
mod path;

pub use mapper::CoordinateMapper;
pub use path::{PathRenderer, PathStyle, RenderOutcome};
