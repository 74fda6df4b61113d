mod common;

use axum::http::StatusCode;
use common::{get, json_body, router_with, send, test_config, InMemoryStore};
use std::sync::{Arc, Once};
use student_service::services::init_metrics;

static INIT_METRICS: Once = Once::new();

fn ensure_metrics_initialized() {
    INIT_METRICS.call_once(|| {
        init_metrics().expect("Failed to initialize metrics");
    });
}

#[tokio::test]
async fn health_check_works() {
    let router = router_with(Arc::new(InMemoryStore::default()), test_config());

    let response = send(&router, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "student-service");
}

#[tokio::test]
async fn health_check_reports_unreachable_store() {
    let router = router_with(Arc::new(InMemoryStore::unhealthy()), test_config());

    let response = send(&router, get("/health")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response).await;
    assert_eq!(body["status"], "unhealthy");

    let response = send(&router, get("/ready")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    ensure_metrics_initialized();
    let router = router_with(Arc::new(InMemoryStore::default()), test_config());

    // Generate at least one request metric
    send(&router, get("/students")).await;

    let response = send(&router, get("/metrics")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("http_requests_total"), "Unexpected metrics: {}", body);
}

#[tokio::test]
async fn openapi_document_lists_student_routes() {
    let router = router_with(Arc::new(InMemoryStore::default()), test_config());

    let response = send(&router, get("/.well-known/openapi.json")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = json_body(response).await;
    assert_eq!(doc["info"]["title"], "Student Course API");
    assert!(doc["paths"]["/students/"]["post"].is_object());
    assert!(doc["paths"]["/students"]["get"].is_object());
}

#[tokio::test]
async fn openapi_document_served_when_swagger_disabled() {
    let mut config = test_config();
    config.swagger.enabled = false;
    let router = router_with(Arc::new(InMemoryStore::default()), config);

    let response = send(&router, get("/.well-known/openapi.json")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&router, get("/docs/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
