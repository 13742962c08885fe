//! Handler for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its destination URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Resolve the slug (cache first, store on a miss, cache warmed on the way out)
/// 2. Queue a click event for the background worker
/// 3. Return `302 Found` with `Cache-Control: no-store`
///
/// The `no-store` header keeps browsers coming back, so every visit is
/// counted. Click tracking is fire-and-forget; a full queue drops the
/// event rather than delaying the redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the slug has no mapping. That path queues
/// nothing and caches nothing.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let url = state.redirect_service.resolve(&slug).await?;

    let click_event = ClickEvent::new(
        slug,
        headers.get("cf-ipcountry").and_then(|v| v.to_str().ok()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );
    state.redirect_service.record_click(click_event);

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, url),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
    ))
}
