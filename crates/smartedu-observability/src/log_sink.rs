//! HTTP endpoint receiving forwarded client logs.
//!
//! `POST /api/log` with `{ level, message, data? }`. Each entry is re-emitted
//! through `tracing` under the `client_log` target at the requested level.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use metrics::counter;
use serde_json::json;
use tracing::{debug, error, info, trace, warn};

use crate::forwarder::{LogEntry, LogLevel};

pub fn router() -> Router {
    Router::new().route("/api/log", post(receive_log))
}

async fn receive_log(payload: Result<Json<LogEntry>, JsonRejection>) -> Response {
    let Json(entry) = match payload {
        Ok(entry) => entry,
        Err(rejection) => {
            counter!("client_logs_received_total", "status" => "rejected").increment(1);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": rejection.body_text() })),
            )
                .into_response();
        }
    };

    let data = entry.data.map(|d| d.to_string()).unwrap_or_default();
    match entry.level {
        LogLevel::Trace => trace!(target: "client_log", data = %data, "{}", entry.message),
        LogLevel::Debug => debug!(target: "client_log", data = %data, "{}", entry.message),
        LogLevel::Info => info!(target: "client_log", data = %data, "{}", entry.message),
        LogLevel::Warn => warn!(target: "client_log", data = %data, "{}", entry.message),
        LogLevel::Error => error!(target: "client_log", data = %data, "{}", entry.message),
    }

    counter!("client_logs_received_total", "status" => "accepted").increment(1);
    Json(json!({ "success": true })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn post_log(body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/log")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_accepts_entry() {
        let (status, body) =
            post_log(r#"{"level":"error","message":"render failed","data":{"page":"students"}}"#)
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let (status, body) = post_log(r#"{"message":"no level"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }
}
