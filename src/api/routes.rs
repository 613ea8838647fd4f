//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create or look up the short code for a long URL
/// - `GET  /health`  - Nested health report
///
/// Trailing slashes are trimmed by the top-level router, so `/api/shorten/`
/// and `/api/health/` reach the same handlers.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
}
