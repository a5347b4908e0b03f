//! Domain types shared by every component.
//!
//! These are pure value types with no I/O. Wire decoding lives here only where
//! the wire shape is the domain shape (`[row, col]` cells, `[r, c, h, w]`
//! blocks).

mod grid;
mod notification;
mod room;

pub use grid::{
    DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, GridCell, GridExtent, RoutePath, SurfacePoint,
    SurfaceSize,
};
pub use notification::{Notification, Severity};
pub use room::{Room, RoomBlock, title_case};
