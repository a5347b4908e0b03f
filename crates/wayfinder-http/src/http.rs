//! HTTP backend abstraction for the navigation API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with automatic retry logic for transient GET errors.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{HttpError, HttpResult};
use crate::models::{ApiConfig, ErrorReply};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the navigation server.
///
/// This is an implementation detail - external code should use the
/// `NavigationApiPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET `url` and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T>;

    /// POST `body` as JSON to `url` and deserialize the JSON answer.
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> HttpResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// GET requests are retried with exponential backoff on server errors (5xx)
/// and network errors. POST requests are sent once.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiConfig) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> HttpResult<reqwest::Response> {
        let mut last_error: Option<HttpError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_base_delay_ms, attempt);
                tracing::debug!(%url, attempt, ?delay, "Retrying request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        tracing::warn!(%url, status = status.as_u16(), "Server error, will retry");
                        last_error = Some(status_error(response, url).await);
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(status_error(response, url).await);
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        tracing::warn!(%url, error = %e, "Network error, will retry");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| HttpError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

/// Delay before retry number `attempt` (1-based).
fn backoff_delay(base_ms: u64, attempt: u8) -> Duration {
    let factor = 2u64.saturating_pow(u32::from(attempt.saturating_sub(1)));
    Duration::from_millis(base_ms.saturating_mul(factor))
}

/// Build a status error, keeping the server's `error` text when there is one.
async fn status_error(response: reqwest::Response, url: &Url) -> HttpError {
    let status = response.status().as_u16();
    let message = match response.bytes().await {
        Ok(body) => error_message(&body),
        Err(e) => {
            tracing::debug!(error = %e, "Could not read error body");
            None
        }
    };
    HttpError::Status {
        status,
        message,
        url: url.to_string(),
    }
}

/// The `error` field of a JSON error body.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorReply>(body)
        .ok()
        .and_then(|reply| reply.error)
        .filter(|message| !message.is_empty())
}

/// Decode a success body. Decoding goes through `serde_json` so that shape
/// mismatches surface as parse errors rather than transport errors.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> HttpResult<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T> {
        tracing::debug!(%url, "GET");
        let response = self.fetch_with_retry(url).await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, url: &Url, body: &B) -> HttpResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        tracing::debug!(%url, "POST");
        let response = self.client.post(url.as_str()).json(body).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response, url).await);
        }
        decode(response).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
