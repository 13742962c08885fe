//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL mapping.
///
/// # Endpoint
///
/// `POST /api/shorten` (rate limited per client IP)
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "slug": "my-link"  // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the mapping:
///
/// ```json
/// {
///   "slug": "my-link",
///   "shortUrl": "http://localhost:3014/my-link",
///   "originalUrl": "https://example.com/some/long/path",
///   "createdAt": "2026-01-15T10:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid, oversized, or private URL, or a
/// malformed slug. Returns 409 Conflict when the slug is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let record = state.link_service.shorten(payload.url, payload.slug).await?;

    let response = ShortenResponse {
        short_url: state.link_service.short_url(&record.slug),
        slug: record.slug,
        original_url: record.original_url,
        created_at: record.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
