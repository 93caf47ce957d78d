//! HTTP client abstraction for testability

use async_trait::async_trait;

use crate::request::GreetingRequest;
use crate::GreeterError;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// `None` when the status arrived but the body could not be read
    pub body: Option<String>,
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send the hello GET request.
    ///
    /// An `Err` means no response was received at all.
    async fn get(&self, request: &GreetingRequest) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, request: &GreetingRequest) -> crate::Result<HttpResponse> {
        let url = request.url();
        tracing::debug!("GET {}", url);

        let mut builder = self.client.get(url).timeout(request.timeout());
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GreeterError::Timeout(request.timeout())
            } else {
                GreeterError::Http(format!("GET {} failed: {}", url, e))
            }
        })?;

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => {
                tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
                Some(body)
            }
            Err(e) => {
                tracing::warn!("GET {} -> {}, reading response body failed: {}", url, status, e);
                None
            }
        };

        Ok(HttpResponse { status, body })
    }
}
