//! URL construction helpers for the navigation backend.

use url::Url;

use crate::error::HttpResult;

/// Endpoint serving the room name list.
pub const ROOMS_ENDPOINT: &str = "get_rooms";
/// Endpoint serving room block geometry.
pub const ROOM_BLOCKS_ENDPOINT: &str = "get_room_blocks";
/// Endpoint answering route requests.
pub const FIND_PATH_ENDPOINT: &str = "find_path";

/// Append `endpoint` to `base` as one more path segment.
///
/// `Url::join` would replace the last segment of a base without a trailing
/// slash (`/api` + `get_rooms` → `/get_rooms`), so the join is textual.
pub fn endpoint_url(base: &Url, endpoint: &str) -> HttpResult<Url> {
    let joined = format!("{}/{endpoint}", base.as_str().trim_end_matches('/'));
    Ok(Url::parse(&joined)?)
}
