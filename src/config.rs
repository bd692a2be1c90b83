//! Client configuration
//!
//! [`ClientConfig`] collects everything the Zotero client needs to build its
//! transport: the default API key, the endpoint, timeouts and TLS policy.

use std::env;
use std::time::Duration;

/// Default Zotero API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.zotero.org/";

/// Environment variable holding the default API key
pub const API_KEY_ENV: &str = "ZOTERO_API_KEY";

/// Environment variable overriding the API endpoint
pub const BASE_URL_ENV: &str = "ZOTERO_BASE_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for [`crate::ZoteroClient`]
///
/// # Example
///
/// ```
/// use zotero_workshop::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key_here")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.effective_api_key(), Some("your_api_key_here"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key injected as the `key` query parameter when the caller does not supply one
    pub api_key: Option<String>,
    /// Base endpoint; defaults to [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Skip TLS certificate validation (local development only)
    pub accept_invalid_certs: bool,
    /// Redirect hops followed by POST requests
    pub max_redirects: usize,
}

impl ClientConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            accept_invalid_certs: false,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Build a configuration from `ZOTERO_API_KEY` and `ZOTERO_BASE_URL`
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(key) = env::var(API_KEY_ENV) {
            config = config.with_api_key(key);
        }
        if let Ok(url) = env::var(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        config
    }

    /// Set the default API key. An empty key means "no default key".
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different endpoint (mock servers, proxies)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Disable TLS certificate validation.
    ///
    /// Only meant for talking to a local endpoint with a self-signed certificate.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// The API key to inject, if one is configured and non-empty
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Base URL, always ending with a single `/`
    pub fn effective_base_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        format!("{}/", base.trim_end_matches('/'))
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("zotero-workshop-rs/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
