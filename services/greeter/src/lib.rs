//! Greeter - fetches the backend hello greeting and renders it
//!
//! Sends one authenticated GET to the backend hello endpoint, classifies the
//! result into a single [`Outcome`], and renders it to the terminal or as a
//! welcome page.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod io;
pub mod outcome;
pub mod page;
pub mod request;
pub mod state;
pub mod view;

pub use config::{load_config, Config};
pub use error::{GreeterError, Result};
pub use fetcher::GreetingFetcher;
pub use outcome::{classify, FailureCause, Greeting, Outcome};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::io::{HttpClient, ReqwestHttpClient};
use crate::state::{new_outcome_handle, OutcomeHandle};
use crate::view::DisplayState;

/// Fetcher plus the state it settles
#[derive(Debug)]
pub struct Greeter {
    fetcher: GreetingFetcher,
    state: OutcomeHandle,
}

impl Greeter {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self {
            fetcher: GreetingFetcher::new(config, http),
            state: new_outcome_handle(),
        }
    }

    pub fn state(&self) -> OutcomeHandle {
        Arc::clone(&self.state)
    }

    /// Fetch the greeting once; `None` if cancelled before it settled
    pub async fn fetch_once(&self, cancel: &CancellationToken) -> Option<Outcome> {
        self.fetcher.fetch_into(&self.state, cancel).await
    }

    /// Serve the welcome page on `listener` while fetching the greeting.
    ///
    /// Runs until `cancel` fires.
    pub async fn serve(
        &self,
        listener: TcpListener,
        cancel: CancellationToken,
    ) -> Result<Option<Outcome>> {
        let addr = listener.local_addr()?;
        let router = page::build_router(self.state());
        let cancel_for_page = cancel.clone();

        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    cancel_for_page.cancelled().await;
                })
                .await
        });
        tracing::info!("Welcome page listening on http://{}", addr);

        let outcome = self.fetch_once(&cancel).await;
        cancel.cancelled().await;

        server
            .await
            .map_err(|e| GreeterError::Page(format!("Page server task failed: {}", e)))??;
        tracing::debug!("Welcome page stopped");

        Ok(outcome)
    }
}

/// Run the greeter with the given configuration
pub async fn run(config: Config) -> Result<Option<Outcome>> {
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let greeter = Greeter::new(&config, http);
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    if config.page.enabled {
        let addr = SocketAddr::from(([127, 0, 0, 1], config.page.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            GreeterError::Page(format!(
                "Failed to bind welcome page to port {}: {}",
                config.page.port, e
            ))
        })?;
        return greeter.serve(listener, cancel).await;
    }

    let outcome = greeter.fetch_once(&cancel).await;
    if let Some(outcome) = &outcome {
        println!("{}", DisplayState::from(outcome).render_text());
    }
    Ok(outcome)
}
