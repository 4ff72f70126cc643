//! Integration tests for liveness, health, metrics and docs endpoints

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body, read_body_json};
use serde_json::Value;

#[actix_web::test]
async fn test_health_endpoint_returns_200_ok() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::get().uri("/health").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "/health should always return 200 OK");

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(timestamp.contains('T'), "Timestamp should be in ISO 8601 format");
}

#[actix_web::test]
async fn test_health_db_reports_connected() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::get().uri("/health/db").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_metrics_endpoint_renders_prometheus_text() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({ "email": "nobody@local.test", "password": "whatever1" }))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = TestRequest::get().uri("/metrics").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("auth_login_attempts_total"));
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::get().uri("/api.json").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert!(body["openapi"].is_string());
    assert!(body["paths"]["/timeline/{user_id}"].is_object());
}
