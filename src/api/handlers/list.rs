//! Handler for the admin listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::list::ListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// How many recent mappings the admin listing returns.
const RECENT_URLS_LIMIT: i64 = 100;

/// Lists the most recently created mappings, newest first.
///
/// # Endpoint
///
/// `GET /api/list`
///
/// Guarded by [`crate::api::middleware::admin_auth`]; requests without the
/// right `x-admin-key` header never reach this handler.
///
/// # Errors
///
/// Returns 500 on store failures.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<ListResponse>, AppError> {
    let urls = state.stats_service.recent_urls(RECENT_URLS_LIMIT).await?;

    Ok(Json(ListResponse { urls }))
}
