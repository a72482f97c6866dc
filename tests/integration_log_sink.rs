use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use smartedu::observability::{LogEntry, LogForwarder, LogLevel, log_sink};
use tower::ServiceExt;

async fn serve_sink() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, log_sink::router()).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_sink_accepts_forwarded_entry() {
    let addr = serve_sink().await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/log"))
        .json(&LogEntry::new(LogLevel::Warn, "Slow response").with_data(json!({ "ms": 2300 })))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn test_sink_rejects_malformed_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/log")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"level":"loud"}"#))
        .unwrap();

    let response = log_sink::router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_sink_accepts_every_level() {
    for level in ["trace", "debug", "info", "warn", "warning", "error"] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/log")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "level": level, "message": "hello" }).to_string()))
            .unwrap();

        let response = log_sink::router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "level {level}");
    }
}

#[tokio::test]
async fn test_forwarder_delivers_to_sink() {
    let addr = serve_sink().await;
    let forwarder = LogForwarder::new(Some(format!("http://{addr}/api/log")));

    let handle = forwarder
        .error("Failed to load subjects", Some(json!({ "status": 500 })))
        .unwrap();

    handle.await.unwrap();
}

#[tokio::test]
async fn test_forwarder_swallows_unreachable_endpoint() {
    let forwarder = LogForwarder::new(Some("http://127.0.0.1:1/api/log".into()));

    let handle = forwarder.info("nobody is listening").unwrap();

    handle.await.unwrap();
}

#[tokio::test]
async fn test_disabled_forwarder_spawns_nothing() {
    assert!(LogForwarder::disabled().warn("ignored").is_none());
    assert!(LogForwarder::new(None).info("ignored").is_none());
}
