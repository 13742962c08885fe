//! API route configuration.

use crate::api::handlers::{health_handler, list_handler, shorten_handler, stats_handler};
use crate::api::middleware::{admin_auth, rate_limit};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a short URL (rate limited per client IP)
/// - `GET  /stats/{slug}` - Click statistics for one slug
/// - `GET  /health`       - Dependency health probe
/// - `GET  /list`         - Latest mappings (admin key required)
///
/// Sub-routers keep the layers scoped: the rate limiter wraps only link
/// creation, the admin guard wraps only the listing.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let shorten_routes = Router::new()
        .route("/shorten", post(shorten_handler))
        .layer(rate_limit::layer());

    let admin_routes = Router::new()
        .route("/list", get(list_handler))
        .route_layer(middleware::from_fn_with_state(state, admin_auth::layer));

    Router::new()
        .route("/stats/{slug}", get(stats_handler))
        .route("/health", get(health_handler))
        .merge(shorten_routes)
        .merge(admin_routes)
}
