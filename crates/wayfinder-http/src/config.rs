//! Client settings: where the backend lives and how patient to be with it.
//!
//! Only GET requests (the room list and block geometry) are retried;
//! `find_path` is sent once.

use std::time::Duration;

/// Default backend address.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_RETRIES: u8 = 2;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Settings for [`DefaultNavigationClient`](crate::DefaultNavigationClient).
///
/// # Example
///
/// ```
/// use wayfinder_http::HttpClientConfig;
/// use std::time::Duration;
///
/// let config = HttpClientConfig::new()
///     .with_base_url("http://10.0.0.2:5000/api")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// `get_rooms` etc. are appended to this
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    /// Per request, connect through body
    pub(crate) timeout: Duration,
    /// Extra GET attempts after a 5xx or network failure
    pub(crate) max_retries: u8,
    /// Delay before the first retry; doubles each time
    pub(crate) retry_base_delay: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!("wayfinder-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl HttpClientConfig {
    /// Local backend, 30 s timeout, two GET retries from 250 ms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another backend.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Zero disables retrying.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
