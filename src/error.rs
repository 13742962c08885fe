//! Application error type and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-level errors mapped to HTTP responses.
///
/// Every variant renders as a flat `{"error": "<message>"}` JSON body with
/// the matching status code. Store errors never leak their detail into the
/// response; the cause is logged instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request payload failed validation (400).
    #[error("{0}")]
    Validation(String),

    /// The requested slug is already mapped (409).
    #[error("Slug already taken")]
    SlugTaken,

    /// No record for the requested slug (404).
    #[error("{0}")]
    NotFound(&'static str),

    /// Missing or wrong admin key (401).
    #[error("Unauthorized")]
    Unauthorized,

    /// The persistent store failed (500).
    #[error("store error: {0}")]
    Store(#[source] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code this error renders with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::SlugTaken => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Store(e) => {
                tracing::error!(error = %e, "Request failed with store error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
            && db.constraint() == Some("urls_slug_key")
        {
            return AppError::SlugTaken;
        }

        AppError::Store(e)
    }
}
