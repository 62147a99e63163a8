//! Router assembly for the siteedit HTTP API.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the axum router.
///
/// CORS is permissive so a browser front end on another origin can call it.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/process_command", post(handlers::command::process_command))
        .route("/session", get(handlers::session::get_session))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
