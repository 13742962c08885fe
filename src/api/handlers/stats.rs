//! Handler for per-slug statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click statistics for one short URL.
///
/// # Endpoint
///
/// `GET /api/stats/{slug}`
///
/// # Response
///
/// Mapping metadata plus the top ten clicking countries:
///
/// ```json
/// {
///   "url": {
///     "slug": "my-link",
///     "originalUrl": "https://example.com",
///     "createdAt": "2026-01-15T10:30:00Z",
///     "clickCount": 42
///   },
///   "topCountries": [
///     { "country": "DE", "count": 30 },
///     { "country": "Unknown", "count": 12 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the slug has no mapping.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let (record, top_countries) = state.stats_service.slug_stats(&slug).await?;

    Ok(Json(StatsResponse {
        url: record.into(),
        top_countries: top_countries.into_iter().map(Into::into).collect(),
    }))
}
