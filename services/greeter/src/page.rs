//! Welcome page server

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};

use crate::state::OutcomeHandle;
use crate::view::{render_page, DisplayState};

/// Page application state
#[derive(Clone)]
pub struct PageState {
    pub state: OutcomeHandle,
}

/// Build the welcome page axum router
pub fn build_router(state: OutcomeHandle) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/outcome", get(outcome_handler))
        .route("/health", get(health_handler))
        .with_state(PageState { state })
}

async fn index_handler(State(page): State<PageState>) -> impl IntoResponse {
    let display = DisplayState::from(page.state.read().await.outcome());
    Html(render_page(&display))
}

async fn outcome_handler(State(page): State<PageState>) -> Json<DisplayState> {
    Json(DisplayState::from(page.state.read().await.outcome()))
}

async fn health_handler() -> &'static str {
    "OK"
}
