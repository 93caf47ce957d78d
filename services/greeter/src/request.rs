//! Outbound hello request description

use std::fmt;
use std::time::Duration;

use crate::config::Config;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// `Cache-Control` value sent with every hello request
pub const CACHE_CONTROL: &str = "no-store";

/// A fully-built GET request for the hello endpoint.
///
/// Only constructible with a non-empty API key. Caching is always disabled,
/// and no cookies are attached since [`crate::io::ReqwestHttpClient`] keeps no
/// cookie store.
#[derive(Clone, PartialEq, Eq)]
pub struct GreetingRequest {
    url: String,
    api_key: String,
    timeout: Duration,
}

impl fmt::Debug for GreetingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreetingRequest")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GreetingRequest {
    /// Build the request, or `None` when the key is missing or empty
    pub fn new(url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Option<Self> {
        let api_key = api_key.filter(|k| !k.is_empty())?;
        Some(Self {
            url: url.into(),
            api_key,
            timeout,
        })
    }

    /// Build the request from configuration, resolving the key from the environment
    pub fn from_config(config: &Config) -> Option<Self> {
        Self::new(
            config.request.endpoint.clone(),
            config.resolve_api_key(),
            config.request.timeout(),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers sent with the request, in order
    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            ("Content-Type", "application/json"),
            (API_KEY_HEADER, self.api_key.as_str()),
            ("Cache-Control", CACHE_CONTROL),
        ]
    }
}
