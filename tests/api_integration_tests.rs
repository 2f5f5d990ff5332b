//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use perf_cache::{api::create_router, AppState, CacheConfig, PerformanceCache};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn test_state(max_entries: usize) -> AppState {
    AppState::new(PerformanceCache::start(&CacheConfig {
        max_entries,
        ..CacheConfig::default()
    }))
}

fn create_test_app() -> Router {
    create_router(test_state(100))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == SET / GET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/set",
        Some(r#"{"key":"player:1","value":{"coins":100}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("player:1"));
}

#[tokio::test]
async fn test_get_endpoint_returns_json_value() {
    let app = create_test_app();

    send(
        &app,
        "PUT",
        "/set",
        Some(r#"{"key":"player:1:upgrades","value":[{"id":"tap","level":3}],"ttl_ms":60000}"#),
    )
    .await;

    let (status, json) = send(&app, "GET", "/get/player:1:upgrades", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "player:1:upgrades");
    assert_eq!(json["value"][0]["level"], 3);
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/get/nonexistent", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("nonexistent"));
}

#[tokio::test]
async fn test_overwrite_via_api() {
    let app = create_test_app();

    send(&app, "PUT", "/set", Some(r#"{"key":"k","value":1}"#)).await;
    send(&app, "PUT", "/set", Some(r#"{"key":"k","value":2}"#)).await;

    let (_, json) = send(&app, "GET", "/get/k", None).await;
    assert_eq!(json["value"], 2);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["size"], 1);
}

// == HAS / DELETE / CLEAR Endpoint Tests ==

#[tokio::test]
async fn test_has_endpoint() {
    let app = create_test_app();
    send(&app, "PUT", "/set", Some(r#"{"key":"present","value":true}"#)).await;

    let (_, json) = send(&app, "GET", "/has/present", None).await;
    assert_eq!(json["exists"], true);

    let (_, json) = send(&app, "GET", "/has/absent", None).await;
    assert_eq!(json["exists"], false);
}

#[tokio::test]
async fn test_delete_endpoint_is_idempotent() {
    let app = create_test_app();
    send(&app, "PUT", "/set", Some(r#"{"key":"gone","value":"x"}"#)).await;

    let (status, json) = send(&app, "DELETE", "/del/gone", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], true);

    let (status, json) = send(&app, "DELETE", "/del/gone", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], false);
}

#[tokio::test]
async fn test_clear_endpoint() {
    let app = create_test_app();
    send(&app, "PUT", "/set", Some(r#"{"key":"a","value":1}"#)).await;
    send(&app, "PUT", "/set", Some(r#"{"key":"b","value":2}"#)).await;

    let (_, json) = send(&app, "DELETE", "/clear", None).await;
    assert_eq!(json["removed"], 2);

    let (_, json) = send(&app, "DELETE", "/clear", None).await;
    assert_eq!(json["removed"], 0);
}

// == Invalidate Endpoint Tests ==

#[tokio::test]
async fn test_invalidate_endpoint_scopes_to_pattern() {
    let app = create_test_app();
    for key in ["player:1:a", "player:1:b", "player:2:a"] {
        let body = format!(r#"{{"key":"{}","value":0}}"#, key);
        send(&app, "PUT", "/set", Some(&body)).await;
    }

    let (status, json) = send(
        &app,
        "POST",
        "/invalidate",
        Some(r#"{"pattern":"player:1:*"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], 2);
    assert_eq!(send(&app, "GET", "/get/player:1:a", None).await.0, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, "GET", "/get/player:2:a", None).await.0, StatusCode::OK);
}

// == Stats / Health Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_tracks_hits_misses_and_evictions() {
    let app = create_router(test_state(2));

    send(&app, "PUT", "/set", Some(r#"{"key":"a","value":1}"#)).await;
    send(&app, "PUT", "/set", Some(r#"{"key":"b","value":2}"#)).await;
    send(&app, "PUT", "/set", Some(r#"{"key":"c","value":3}"#)).await;
    send(&app, "GET", "/get/c", None).await;
    send(&app, "GET", "/get/a", None).await;

    let (status, json) = send(&app, "GET", "/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["size"], 2);
    assert_eq!(json["max_size"], 2);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["evictions"], 1);
    assert_eq!(json["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Error Response Tests ==

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/set")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"invalid json"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Axum returns 400 or 422 for JSON parsing errors
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_empty_key_request() {
    let app = create_test_app();

    let (status, json) = send(&app, "PUT", "/set", Some(r#"{"key":"","value":"test"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

// == TTL Expiration via API Tests ==

#[tokio::test(start_paused = true)]
async fn test_ttl_expiration_via_api() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        "PUT",
        "/set",
        Some(r#"{"key":"x","value":42,"ttl_ms":1000}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    tokio::time::advance(Duration::from_millis(500)).await;
    let (status, json) = send(&app, "GET", "/get/x", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], 42);

    tokio::time::advance(Duration::from_millis(1000)).await;
    let (status, _) = send(&app, "GET", "/get/x", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["size"], 0);
}
