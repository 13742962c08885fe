//! Handler for the health endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, ServiceChecks};
use crate::state::AppState;

/// Reports service health with per-dependency checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: Both backing services answer
/// - **503 Service Unavailable**: At least one probe failed
///
/// Probes run concurrently: a `SELECT 1` against PostgreSQL and a PING
/// against Redis. A deployment without Redis reports `redis: true`; the
/// no-op cache is intentional, not degraded.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "1.0.0",
///   "services": {
///     "postgres": true,
///     "redis": true
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (postgres, redis) = tokio::join!(
        state.url_repository.health_check(),
        state.cache.health_check(),
    );

    let all_healthy = postgres && redis;

    let response = HealthResponse {
        status: if all_healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceChecks { postgres, redis },
    };

    let status = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
