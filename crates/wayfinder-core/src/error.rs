//! Errors surfaced by navigation actions.

use thiserror::Error;

use crate::autocomplete::LocationField;
use crate::domain::GridCell;
use crate::ports::ApiError;

/// Failure of a single user action. None of these are fatal; the rest of the
/// navigator stays usable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// A required input was empty; no request was sent.
    #[error("Please select both a current location and a destination.")]
    Validation {
        /// The first empty input.
        missing: LocationField,
    },

    /// The backend call failed.
    #[error("Failed to find path: {0}")]
    Transport(#[source] ApiError),

    /// The backend answered, but with an empty route.
    #[error("No path found between the selected locations.")]
    NoPathFound,

    /// The backend returned a cell outside the grid.
    #[error("Failed to find path: server returned cell {cell} outside the floor plan")]
    InvalidRoute {
        /// The offending cell.
        cell: GridCell,
    },
}

impl From<ApiError> for NavigationError {
    fn from(err: ApiError) -> Self {
        Self::Transport(err)
    }
}
