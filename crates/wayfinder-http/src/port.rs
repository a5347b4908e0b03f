//! Port trait implementation for `NavigationClient`.
//!
//! This module implements the core-owned `NavigationApiPort` trait, handling
//! the conversion between wire types and core domain types.

use std::collections::BTreeMap;

use async_trait::async_trait;
use wayfinder_core::{
    ApiError, ApiResult, GridCell, NavigationApiPort, RoomBlock, RouteRequest, RoutePath,
};

use crate::client::NavigationClient;
use crate::error::{HttpError, HttpResult};
use crate::http::HttpBackend;
use crate::models::FindPathReply;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HttpError` to core `ApiError`.
pub(crate) fn map_error(err: HttpError) -> ApiError {
    match err {
        HttpError::Status {
            status, message, ..
        } => ApiError::Status { status, message },
        HttpError::InvalidResponse { message } => ApiError::InvalidResponse { message },
        HttpError::Network(e) if e.is_decode() => ApiError::InvalidResponse {
            message: e.to_string(),
        },
        HttpError::Network(e) if e.is_builder() => ApiError::Configuration {
            message: e.to_string(),
        },
        HttpError::Network(e) => ApiError::Network {
            message: e.to_string(),
        },
        HttpError::InvalidUrl(e) => ApiError::Configuration {
            message: e.to_string(),
        },
        HttpError::JsonParse(e) => ApiError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

/// Convert a wire `[row, col]` pair to a grid cell.
fn to_cell([row, column]: [i64; 2]) -> HttpResult<GridCell> {
    match (u32::try_from(row), u32::try_from(column)) {
        (Ok(row), Ok(column)) => Ok(GridCell::new(row, column)),
        _ => Err(HttpError::InvalidResponse {
            message: format!("cell [{row}, {column}] is not a grid coordinate"),
        }),
    }
}

/// Convert a `find_path` reply to a core route.
///
/// A missing or `null` path is an empty route. A non-empty route must carry
/// its start and end markers.
fn to_route_path(reply: FindPathReply) -> HttpResult<RoutePath> {
    let cells = reply
        .path
        .unwrap_or_default()
        .into_iter()
        .map(to_cell)
        .collect::<HttpResult<Vec<_>>>()?;

    let start = reply.start_coords.map(to_cell).transpose()?;
    let end = reply.end_coords.map(to_cell).transpose()?;

    if cells.is_empty() {
        return Ok(RoutePath {
            cells,
            start: start.unwrap_or_default(),
            end: end.unwrap_or_default(),
        });
    }

    match (start, end) {
        (Some(start), Some(end)) => Ok(RoutePath { cells, start, end }),
        _ => Err(HttpError::InvalidResponse {
            message: "route is missing start_coords or end_coords".to_string(),
        }),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> NavigationApiPort for NavigationClient<B> {
    async fn get_rooms(&self) -> ApiResult<Vec<String>> {
        self.rooms().await.map_err(map_error)
    }

    async fn get_room_blocks(&self) -> ApiResult<BTreeMap<String, RoomBlock>> {
        self.room_blocks().await.map_err(map_error)
    }

    async fn find_path(&self, request: &RouteRequest) -> ApiResult<RoutePath> {
        let reply = self
            .route_reply(request)
            .await
            .map_err(map_error)?;
        let path = to_route_path(reply).map_err(map_error)?;
        tracing::debug!(cells = path.cells.len(), "Route received");
        Ok(path)
    }
}
