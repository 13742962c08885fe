//! Admin key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Guards admin endpoints with a shared static key.
///
/// # Header Format
///
/// ```text
/// x-admin-key: <key>
/// ```
///
/// The comparison is exact; there is no default key, the value comes from
/// the `ADMIN_KEY` environment variable at startup.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, unreadable, or
/// does not match.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::admin_auth;
///
/// let admin = Router::new()
///     .route("/list", get(list_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth::layer));
/// ```
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get("x-admin-key")
        .and_then(|value| value.to_str().ok());

    if provided != Some(state.admin_key.as_str()) {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}
