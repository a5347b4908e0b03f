//! Navigation client for the room catalog and route endpoints.

use std::collections::BTreeMap;

use url::Url;
use wayfinder_core::{RoomBlock, RouteRequest};

use crate::config::HttpClientConfig;
use crate::error::HttpResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{ApiConfig, FindPathReply};
use crate::url::{FIND_PATH_ENDPOINT, ROOM_BLOCKS_ENDPOINT, ROOMS_ENDPOINT, endpoint_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default navigation client using the reqwest HTTP backend.
pub type DefaultNavigationClient = NavigationClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the navigation backend.
///
/// Generic over an HTTP backend for testing. Use `DefaultNavigationClient`
/// and talk to it through `NavigationApiPort`.
pub struct NavigationClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultNavigationClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the base URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(config: &HttpClientConfig) -> Result<Self, wayfinder_core::ApiError> {
        Self::build(config).map_err(crate::port::map_error)
    }

    fn build(config: &HttpClientConfig) -> HttpResult<Self> {
        let internal_config = to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        tracing::debug!(base_url = %internal_config.base_url, "Navigation client ready");
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

fn to_internal_config(config: &HttpClientConfig) -> HttpResult<ApiConfig> {
    Ok(ApiConfig {
        base_url: Url::parse(&config.base_url)?,
        user_agent: config.user_agent.clone(),
        timeout_ms: duration_ms(config.timeout),
        max_retries: config.max_retries,
        retry_base_delay_ms: duration_ms(config.retry_base_delay),
    })
}

fn duration_ms(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl<B: HttpBackend> NavigationClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Every known room name.
    pub(crate) async fn rooms(&self) -> HttpResult<Vec<String>> {
        let url = endpoint_url(&self.config.base_url, ROOMS_ENDPOINT)?;
        self.backend.get_json(&url).await
    }

    /// Block geometry keyed by room name.
    pub(crate) async fn room_blocks(&self) -> HttpResult<BTreeMap<String, RoomBlock>> {
        let url = endpoint_url(&self.config.base_url, ROOM_BLOCKS_ENDPOINT)?;
        self.backend.get_json(&url).await
    }

    /// Raw route answer for `request`.
    pub(crate) async fn route_reply(&self, request: &RouteRequest) -> HttpResult<FindPathReply> {
        let url = endpoint_url(&self.config.base_url, FIND_PATH_ENDPOINT)?;
        self.backend.post_json(&url, request).await
    }
}
