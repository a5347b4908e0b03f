//! Navigation backend port.
//!
//! The backend owns the room list, room geometry and the pathfinding
//! algorithm. The core reaches it only through this trait; the reqwest
//! implementation lives in `wayfinder-http`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{RoomBlock, RoutePath};

/// A route request as sent to the backend.
///
/// Both names are lower-cased free text; the backend resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Where the user is.
    pub current_location: String,
    /// Where the user wants to go.
    pub destination: String,
}

impl RouteRequest {
    /// Build a request, lower-casing both names.
    pub fn new(current_location: &str, destination: &str) -> Self {
        Self {
            current_location: current_location.to_lowercase(),
            destination: destination.to_lowercase(),
        }
    }
}

/// Errors from navigation backend operations.
///
/// Implementation-specific errors (HTTP client, JSON) are mapped to these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{}", status_message(.status, .message))]
    Status {
        /// HTTP status code
        status: u16,
        /// `error` field of the response body, when present
        message: Option<String>,
    },

    /// The backend could not be reached.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The backend answered with a body the client cannot use.
    #[error("Invalid response from server: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The client is misconfigured (bad base URL and the like).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

// Signature follows the field bindings thiserror hands to the format args.
#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn status_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) if !message.is_empty() => message.clone(),
        _ => format!("HTTP error! status: {status}"),
    }
}

/// Result type alias for navigation backend operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Port trait for the navigation backend.
#[async_trait]
pub trait NavigationApiPort: Send + Sync {
    /// `GET /get_rooms`: every known room name.
    async fn get_rooms(&self) -> ApiResult<Vec<String>>;

    /// `GET /get_room_blocks`: room name to block geometry.
    async fn get_room_blocks(&self) -> ApiResult<BTreeMap<String, RoomBlock>>;

    /// `POST /find_path`: route between two named locations.
    ///
    /// An empty `cells` sequence in the returned path means no route exists.
    async fn find_path(&self, request: &RouteRequest) -> ApiResult<RoutePath>;
}
