//! Internal wire types for the navigation backend.
//!
//! These types are internal to `wayfinder-http` and are not exposed to
//! consumers. External consumers see the port types defined in
//! `wayfinder-core`.

use serde::Deserialize;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the navigation client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL endpoint names are appended to
    pub base_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Maximum number of retry attempts for transient GET errors
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff
    pub retry_base_delay_ms: u64,
}

// ============================================================================
// Responses
// ============================================================================

/// Body of a `find_path` answer.
///
/// Coordinates are read as signed integers so that negative values surface
/// as a contract violation instead of a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindPathReply {
    /// Route cells, start to end. Absent or `null` means no route.
    #[serde(default)]
    pub path: Option<Vec<[i64; 2]>>,
    /// Start marker cell.
    #[serde(default)]
    pub start_coords: Option<[i64; 2]>,
    /// End marker cell.
    #[serde(default)]
    pub end_coords: Option<[i64; 2]>,
}

/// Body the backend sends with a non-success status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub error: Option<String>,
}
