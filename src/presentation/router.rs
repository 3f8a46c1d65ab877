// Route table for the operator UI
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, show_form, submit_copy};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(show_form))
        .route("/copy", post(submit_copy))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
