//! Integration tests for the Hello Work API router.

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{header::CACHE_CONTROL, Method, Request, StatusCode},
    Router,
};
use hello_work::routes::home::Greeting;
use hello_work::{create_router, AppState, StatusReporter, StatusResponse};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    create_router(AppState::new(StatusReporter::start()))
}

fn app_started_ago(ago: Duration) -> Router {
    let started = Instant::now().checked_sub(ago).unwrap();
    let reporter = StatusReporter::with_start(started, std::process::id());
    create_router(AppState::new(reporter))
}

async fn send(app: Router, method: Method, uri: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_as<T: DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    body_as(response).await
}

#[tokio::test]
async fn test_greeting() {
    let response = send(test_app(), Method::GET, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CACHE_CONTROL],
        "public, max-age=60"
    );
    assert_eq!(body_json(response).await, json!({"message": "Hello, work"}));
}

#[tokio::test]
async fn test_greeting_decodes() {
    let greeting: Greeting = body_as(send(test_app(), Method::GET, "/").await).await;
    assert_eq!(greeting.message, "Hello, work");
}

#[tokio::test]
async fn test_greeting_is_idempotent() {
    let app = test_app();
    let first = body_json(send(app.clone(), Method::GET, "/").await).await;
    let second = body_json(send(app, Method::GET, "/").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_status_endpoint() {
    let response = send(test_app(), Method::GET, "/status").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CACHE_CONTROL], "no-store");

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["pid"], std::process::id());
    assert!(json["uptime_seconds"].as_f64().unwrap() >= 0.0);

    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 3, "unexpected fields: {:?}", keys);
}

#[tokio::test]
async fn test_status_uptime_non_decreasing() {
    let app = test_app();

    let mut previous = 0.0;
    for _ in 0..5 {
        let report: StatusResponse = body_as(send(app.clone(), Method::GET, "/status").await).await;
        assert_eq!(report.status, "ok");
        assert_eq!(report.pid, std::process::id());
        assert!(
            report.uptime_seconds >= previous,
            "{} < {}",
            report.uptime_seconds,
            previous
        );
        previous = report.uptime_seconds;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test]
async fn test_status_after_five_seconds() {
    let app = app_started_ago(Duration::from_secs(5));

    let report: StatusResponse = body_as(send(app, Method::GET, "/status").await).await;
    assert!(
        (report.uptime_seconds - 5.0).abs() < 0.5,
        "uptime was {}",
        report.uptime_seconds
    );
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = send(test_app(), Method::GET, "/nonexistent").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(CACHE_CONTROL).is_none());
    assert_eq!(body_json(response).await, json!({"detail": "Not Found"}));
}

#[tokio::test]
async fn test_wrong_method_is_404() {
    for (method, uri) in [
        (Method::POST, "/"),
        (Method::DELETE, "/"),
        (Method::OPTIONS, "/"),
        (Method::PUT, "/status"),
        (Method::POST, "/status"),
    ] {
        let response = send(test_app(), method.clone(), uri).await;
        assert_eq!(
            response.status(),
            StatusCode::NOT_FOUND,
            "{} {} should be 404",
            method,
            uri
        );
        assert!(
            response.headers().get(CACHE_CONTROL).is_none(),
            "{} {} carried a cache header",
            method,
            uri
        );
        assert_eq!(body_json(response).await, json!({"detail": "Not Found"}));
    }
}

#[tokio::test]
async fn test_head_is_404() {
    for uri in ["/", "/status"] {
        let response = send(test_app(), Method::HEAD, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "HEAD {}", uri);
        assert!(response.headers().get(CACHE_CONTROL).is_none(), "HEAD {}", uri);
    }
}

#[tokio::test]
async fn test_request_id_header() {
    for uri in ["/", "/status", "/nonexistent"] {
        let response = send(test_app(), Method::GET, uri).await;
        let value = response
            .headers()
            .get("x-request-id")
            .unwrap_or_else(|| panic!("missing x-request-id on {}", uri))
            .to_str()
            .unwrap();
        assert!(uuid::Uuid::parse_str(value).is_ok(), "bad id {}", value);
    }
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let app = test_app();
    let first = send(app.clone(), Method::GET, "/").await;
    let second = send(app, Method::GET, "/").await;
    assert_ne!(
        first.headers()["x-request-id"],
        second.headers()["x-request-id"]
    );
}
