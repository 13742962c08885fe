mod common;

use axum::http::StatusCode;
use axum::{Router, routing::post};
use axum_test::TestServer;
use edge_shortener::api::handlers::shorten_handler;
use serde_json::json;

#[tokio::test]
async fn test_shorten_generates_slug() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let slug = json["slug"].as_str().unwrap();
    assert_eq!(slug.len(), 7);
    assert_eq!(
        json["shortUrl"].as_str().unwrap(),
        format!("http://localhost:3014/{}", slug)
    );
    assert_eq!(json["originalUrl"], "https://example.com/some/long/path");
    assert!(json.get("createdAt").is_some());
}

#[tokio::test]
async fn test_shorten_with_custom_slug() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "slug": "my-link"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["slug"], "my-link");
    assert_eq!(json["shortUrl"], "http://localhost:3014/my-link");
}

#[tokio::test]
async fn test_shorten_writes_through_to_cache() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com/cached",
            "slug": "warmme1"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    assert_eq!(
        ctx.cache.get("warmme1"),
        Some("https://example.com/cached".to_string())
    );
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Invalid URL format");
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Invalid URL format");
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Only HTTP and HTTPS URLs are allowed");
}

#[tokio::test]
async fn test_shorten_rejects_private_url() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "http://localhost:9000/admin" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Private URLs not allowed");
}

#[tokio::test]
async fn test_shorten_rejects_oversized_url() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    let url = format!("https://example.com/{}", "a".repeat(2048));

    let response = server.post("/api/shorten").json(&json!({ "url": url })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL must be 2048 characters or fewer");
}

#[tokio::test]
async fn test_shorten_rejects_malformed_slug() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "slug": "ab"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(json["error"].as_str().unwrap().starts_with("Slug must be"));
}

#[tokio::test]
async fn test_shorten_slug_conflict_keeps_first_mapping() {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state);

    let server = TestServer::new(app).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://first.example.com",
            "slug": "taken123"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://second.example.com",
            "slug": "taken123"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Slug already taken");

    let stored = ctx.store.get("taken123").unwrap();
    assert_eq!(stored.original_url, "https://first.example.com");
}
