use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, get_book};

/// Creates the API router with the aggregated availability endpoint
///
/// Query endpoints (Read operations):
/// - GET /books/:isbn - Aggregated stock availability for one book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Query endpoints (Read operations)
        .route("/books/:isbn", get(get_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
