mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use edge_shortener::api::handlers::health_handler;

#[tokio::test]
async fn test_health_ok() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert!(json.get("version").is_some());
    assert_eq!(json["services"]["postgres"], true);
    assert_eq!(json["services"]["redis"], true);
}

#[tokio::test]
async fn test_health_degraded_when_store_is_down() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    ctx.store.set_healthy(false);

    let response = server.get("/api/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["services"]["postgres"], false);
    assert_eq!(json["services"]["redis"], true);
}

#[tokio::test]
async fn test_health_degraded_when_cache_is_down() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    ctx.cache.set_healthy(false);

    let response = server.get("/api/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["services"]["postgres"], true);
    assert_eq!(json["services"]["redis"], false);
}
