//! Error types shared across layers.
//!
//! [`RepositoryError`] is raised by the persistence layer. [`AppError`] is the
//! HTTP-facing error returned by services and handlers; it renders the same
//! response envelope as successful responses, carrying the message as data.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::api::dto::envelope::ApplicationResponse;

/// Message returned to clients for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "SOME INTERNAL ERROR OCCURRED";

/// Errors raised by repository implementations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A SQL query file could not be read from the query directory.
    #[error("Invalid SQL query file path: {path}")]
    QueryFileNotFound { path: String },

    /// The short code being inserted already exists.
    #[error("Short code already exists: {code}")]
    ShortCodeConflict { code: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Application error mapped to an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::internal(
            "Data access failure",
            json!({ "reason": e.to_string() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::Validation { message, details } => {
                tracing::debug!(%details, "Rejected request: {message}");
                message
            }
            AppError::Internal { message, details } => {
                tracing::error!(%details, "{message}");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ApplicationResponse::new(message))).into_response()
    }
}
