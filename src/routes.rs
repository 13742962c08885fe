//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`           - Dashboard page
//! - `GET /{slug}`     - Short URL redirect
//! - `/api/*`          - JSON API (shorten, stats, health, admin list)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging on every route
//! - **Rate limiting** - Per-IP token bucket on `POST /api/shorten`
//! - **Admin auth** - `x-admin-key` header check on `GET /api/list`

use crate::api;
use crate::api::handlers::{dashboard_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// The slug route sits at the root, so every path that is not `/` or
/// `/api/...` is treated as a potential slug.
pub fn app_router(state: AppState) -> Router {
    let api_router = api::routes::api_routes(state.clone());

    Router::new()
        .route("/", get(dashboard_handler))
        .route("/{slug}", get(redirect_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
