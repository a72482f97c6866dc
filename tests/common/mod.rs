#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use chrono::{NaiveDate, Utc};
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use serde_json::{Value, json};
use smartedu::api::ApiClient;
use smartedu::config::{ApiConfig, QueryConfig};
use smartedu::core::{Paginated, PaginationMeta};
use smartedu::models::ids::{AcademicSessionId, ClassId, SchoolId, StudentId, SubjectId};
use smartedu::models::{AcademicSession, Student, Subject};
use smartedu::query::{QueryClient, QueryOptions};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Debug, Clone)]
struct MockResponse {
    status: StatusCode,
    body: Value,
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<RecordedRequest>>,
    /// Queued responses per route; the last one is repeated.
    routes: Mutex<HashMap<(Method, String), VecDeque<MockResponse>>>,
}

/// A scripted backend served on an ephemeral local port.
pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Queues `body` with `status` for `method path`.
    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: Value) {
        self.state
            .routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(MockResponse { status, body });
    }

    /// Queues a successful envelope carrying `data`.
    pub fn ok(&self, method: Method, path: &str, data: Value) {
        self.respond(
            method,
            path,
            StatusCode::OK,
            json!({ "success": true, "data": data, "statusCode": 200 }),
        );
    }

    /// Queues a failed envelope with `status` as both HTTP and envelope status.
    pub fn fail(&self, method: Method, path: &str, status: StatusCode, message: &str) {
        self.respond(
            method,
            path,
            status,
            json!({ "success": false, "message": message, "statusCode": status.as_u16() }),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, method: Method, path: &str) -> usize {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last_request(&self, method: Method, path: &str) -> Option<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .cloned()
    }

    pub fn api_client(&self, token: Option<&str>) -> ApiClient {
        let client = ApiClient::new(ApiConfig::with_base_url(self.base_url()));
        match token {
            Some(token) => client.with_token(token),
            None => client,
        }
    }

    pub fn query_client(&self) -> QueryClient {
        QueryClient::new(self.api_client(Some("test-token")), &QueryConfig::default())
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body,
    });

    let response = {
        let mut routes = state.routes.lock().unwrap();
        routes
            .get_mut(&(method, uri.path().to_string()))
            .and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            })
    };

    match response {
        Some(MockResponse { status, body }) => (status, axum::Json(body)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "success": false, "message": "Route not found", "statusCode": 404 })),
        )
            .into_response(),
    }
}

/// Options for tests that exercise retries without waiting.
pub fn fast_retry(retry: u32) -> QueryOptions {
    QueryOptions::default()
        .retry(retry)
        .retry_delay(Duration::from_millis(5))
}

pub fn student(class_id: ClassId) -> Student {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    Student {
        id: StudentId::new(),
        email: Some(format!(
            "{}.{}@school.test",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )),
        first_name,
        last_name,
        admission_number: Some(format!("ADM-{}", (1000..9999).fake::<u32>())),
        class_id: Some(class_id),
        class_name: Some("JSS 1".into()),
        school_id: SchoolId::from_u128(1),
        gender: None,
        date_of_birth: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn student_page(count: usize, page: u32, total_pages: u32) -> Paginated<Student> {
    let class_id = ClassId::from_u128(1);
    Paginated {
        data: (0..count).map(|_| student(class_id)).collect(),
        meta: PaginationMeta {
            page,
            limit: 10,
            total: u64::from(total_pages) * 10,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        },
    }
}

pub fn subject(name: &str) -> Subject {
    Subject {
        id: SubjectId::new(),
        name: name.to_string(),
        code: None,
        description: None,
        class_id: None,
        school_id: Some(SchoolId::from_u128(1)),
        thumbnail_url: None,
        color: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn academic_session(start: NaiveDate, end: NaiveDate) -> AcademicSession {
    AcademicSession {
        id: AcademicSessionId::from_uuid(Uuid::new_v4()),
        academic_year: "2024/2025".into(),
        term: "First Term".into(),
        school_id: SchoolId::from_u128(1),
        term_start_date: start,
        term_end_date: end,
        is_current: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}
