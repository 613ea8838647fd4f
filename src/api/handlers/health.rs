//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::envelope::ApplicationResponse;
use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns the nested health report of the service and its database.
///
/// # Endpoint
///
/// `GET /api/health/`
///
/// # Response Codes
///
/// - **200 OK**: always; a failing database is reported as `DOWN` inside the
///   body rather than through the status code
///
/// # Response
///
/// ```json
/// {
///   "response-timestamp": "2026/10/15T09:30:12:004512",
///   "response-data": {
///     "health-check-timestamp": "2026/10/15T09:30:12:003987",
///     "application-name": "URL-SHORTENER-REST-API",
///     "application-version": "0.1.0",
///     "application-status": "UP",
///     "connected-services-health": [
///       {
///         "health-check-timestamp": "2026/10/15T09:30:12:003901",
///         "application-name": "PostgreSQL",
///         "application-version": "16.2",
///         "application-status": "UP",
///         "connected-services-health": []
///       }
///     ]
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Json<ApplicationResponse<HealthResponse>> {
    let report = state.health_service.get_health().await;

    Json(ApplicationResponse::new(HealthResponse::from(report)))
}
