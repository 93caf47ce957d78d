//! One-shot greeting fetch: issue the request, classify, settle

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::io::HttpClient;
use crate::outcome::{classify, FailureCause, Outcome};
use crate::request::GreetingRequest;
use crate::state::{epoch_ms, OutcomeHandle};

/// Issues the hello request and turns whatever happens into an [`Outcome`]
pub struct GreetingFetcher {
    request: Option<GreetingRequest>,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for GreetingFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreetingFetcher")
            .field("request", &self.request)
            .finish()
    }
}

impl GreetingFetcher {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self::with_request(GreetingRequest::from_config(config), http)
    }

    /// `None` means no API key is available
    pub fn with_request(request: Option<GreetingRequest>, http: Arc<dyn HttpClient>) -> Self {
        match &request {
            Some(r) => tracing::debug!("Created GreetingFetcher for {}", r.url()),
            None => tracing::debug!("Created GreetingFetcher without API key"),
        }
        Self { request, http }
    }

    /// Fetch the greeting. Never fails; every error becomes a `Failure` outcome.
    pub async fn fetch(&self) -> Outcome {
        let Some(request) = &self.request else {
            tracing::error!("API key not configured, not contacting backend");
            return Outcome::failure(FailureCause::ConfigurationMissing);
        };

        let result = self.http.get(request).await;
        match &result {
            Ok(response) => tracing::debug!("Backend answered with status {}", response.status),
            Err(e) => tracing::error!("Hello request to {} failed: {}", request.url(), e),
        }

        let outcome = classify(result);
        match &outcome {
            Outcome::Success { greeting } => {
                tracing::info!("Backend says: {:?}", greeting.message)
            }
            Outcome::Failure { cause } => tracing::warn!("Greeting unavailable: {}", cause),
            Outcome::Pending => {}
        }
        outcome
    }

    /// Fetch once and settle the shared state, unless cancelled first.
    ///
    /// Returns `None` when cancelled; the state then stays `Pending`.
    pub async fn fetch_into(
        &self,
        state: &OutcomeHandle,
        cancel: &CancellationToken,
    ) -> Option<Outcome> {
        let outcome = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Greeting fetch cancelled before it settled");
                return None;
            }
            outcome = self.fetch() => outcome,
        };

        if !state.write().await.settle(outcome.clone(), epoch_ms()) {
            tracing::warn!("Greeting state already settled, ignoring new outcome");
        }
        Some(outcome)
    }
}
