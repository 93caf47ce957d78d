//! Shared greeting state for the fetcher and the welcome page

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::RwLock;

use crate::outcome::Outcome;

/// Greeting state shared between the fetcher and the page server
#[derive(Debug)]
pub struct GreetingState {
    outcome: Outcome,
    settled_epoch_ms: Option<u64>,
}

impl Default for GreetingState {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingState {
    pub fn new() -> Self {
        Self {
            outcome: Outcome::Pending,
            settled_epoch_ms: None,
        }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn settled_epoch_ms(&self) -> Option<u64> {
        self.settled_epoch_ms
    }

    /// Record the terminal outcome, returning false if already settled.
    ///
    /// Settling with `Pending` is ignored.
    pub fn settle(&mut self, outcome: Outcome, now_ms: u64) -> bool {
        if !self.outcome.is_pending() || outcome.is_pending() {
            return false;
        }
        self.outcome = outcome;
        self.settled_epoch_ms = Some(now_ms);
        true
    }
}

/// Thread-safe shared state handle
pub type OutcomeHandle = Arc<RwLock<GreetingState>>;

pub fn new_outcome_handle() -> OutcomeHandle {
    Arc::new(RwLock::new(GreetingState::new()))
}

pub(crate) fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
