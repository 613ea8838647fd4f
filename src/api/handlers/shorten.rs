//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::envelope::ApplicationResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_long_url;

pub const INVALID_BODY_MESSAGE: &str = "A VALID JSON REQUEST BODY WAS NOT FOUND";
pub const MISSING_LONG_URL_MESSAGE: &str = "REQUIRED LONG URL WAS NOT FOUND IN THE REQUEST BODY";
pub const INVALID_LONG_URL_MESSAGE: &str = "THE PROVIDED LONG URL IS NOT A VALID URL";

/// Creates (or returns the existing) short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten/`
///
/// # Request Body
///
/// ```json
/// { "long-url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// {
///   "response-timestamp": "2026/10/15T09:30:12:004512",
///   "response-data": "a1b2c3d151026"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: body is not JSON, `long-url` is missing, or the URL
///   has no scheme or network location
/// - **500 Internal Server Error**: database or query file failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApplicationResponse<String>>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::bad_request(
            INVALID_BODY_MESSAGE,
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let long_url = request
        .long_url
        .ok_or_else(|| AppError::bad_request(MISSING_LONG_URL_MESSAGE, json!({})))?;

    validate_long_url(&long_url).map_err(|e| {
        AppError::bad_request(
            INVALID_LONG_URL_MESSAGE,
            json!({ "long_url": long_url, "reason": e.to_string() }),
        )
    })?;

    let short_code = state.url_service.create_short_url(&long_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::new(short_code)),
    ))
}
