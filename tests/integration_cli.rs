mod common;

use axum::http::{Method, StatusCode};
use common::{MockBackend, academic_session, date, student_page, to_json};
use serde_json::json;
use smartedu::auth::{Role, Session, SessionContext, UserType};
use smartedu::cli::App;
use smartedu::components::{BoundsSource, ListFilters};
use smartedu::core::errors::SESSION_EXPIRED_MESSAGE;
use smartedu::models::ids::{ClassId, VideoId};
use smartedu::observability::LogForwarder;
use uuid::Uuid;

const CURRENT_SESSION: &str = "/director/dashboard/academic-sessions/current";

fn session(role: Role, user_type: UserType) -> Session {
    Session {
        user_id: Uuid::from_u128(42),
        role,
        user_type,
        platform_id: None,
        school_id: Some(Uuid::from_u128(1)),
        access_token: "test-token".into(),
        expires_at: None,
    }
}

fn app(backend: &MockBackend, session: Option<Session>, forwarder: LogForwarder) -> App {
    App::new(SessionContext::new(session), backend.query_client(), forwarder)
}

#[tokio::test]
async fn test_shell_follows_path_then_role() {
    let backend = MockBackend::start().await;
    let app = app(
        &backend,
        Some(session(Role::SchoolDirector, UserType::SchoolAdmin)),
        LogForwarder::disabled(),
    );

    assert!(app.shell("/teacher/attendance").starts_with("Teacher Workspace"));
    assert!(app.shell("/").starts_with("School Administration"));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_library_owner_user_type_gets_library_shell() {
    let backend = MockBackend::start().await;
    let app = app(
        &backend,
        Some(session(Role::Teacher, UserType::LibraryResourceOwner)),
        LogForwarder::disabled(),
    );

    assert!(app.shell("/teacher").starts_with("Library Management"));
}

#[tokio::test]
async fn test_students_render_page_summary() {
    let backend = MockBackend::start().await;
    backend.ok(
        Method::GET,
        "/director/dashboard/students",
        to_json(&student_page(10, 2, 5)),
    );
    let mut app = app(
        &backend,
        Some(session(Role::SchoolDirector, UserType::SchoolAdmin)),
        LogForwarder::disabled(),
    );

    let mut filters = ListFilters::new("class_id");
    filters.set_page(2);
    let text = app.students(&filters).await;

    assert!(text.contains("Showing 11-20 of 50"));
    assert!(text.contains("[2]"));
}

#[tokio::test]
async fn test_filtered_empty_students_say_so() {
    let backend = MockBackend::start().await;
    backend.ok(
        Method::GET,
        "/director/dashboard/students",
        to_json(&student_page(0, 1, 0)),
    );
    let mut app = app(&backend, None, LogForwarder::disabled());

    let mut filters = ListFilters::new("class_id");
    filters.set_search("nobody");
    assert_eq!(app.students(&filters).await, "No students match your filters");
}

#[tokio::test]
async fn test_date_bounds_follow_current_session() {
    let backend = MockBackend::start().await;
    backend.ok(
        Method::GET,
        CURRENT_SESSION,
        to_json(&academic_session(date(2024, 9, 1), date(2024, 12, 20))),
    );
    let mut app = app(&backend, None, LogForwarder::disabled());

    let bounds = app.date_bounds(date(2024, 10, 1)).await;

    assert_eq!(bounds.source(), BoundsSource::AcademicSession);
    assert!(bounds.accepts(date(2024, 10, 15)));
    assert!(!bounds.accepts(date(2024, 8, 31)));
    assert!(!bounds.accepts(date(2024, 12, 21)));
}

#[tokio::test]
async fn test_date_bounds_without_session_use_calendar_year() {
    let backend = MockBackend::start().await;
    backend.ok(Method::GET, CURRENT_SESSION, json!(null));
    let mut app = app(&backend, None, LogForwarder::disabled());

    let bounds = app.date_bounds(date(2025, 3, 4)).await;

    assert_eq!(bounds.source(), BoundsSource::CalendarYear);
    assert_eq!(bounds.min_attr(), "2025-01-01");
    assert_eq!(bounds.max_attr(), "2025-12-31");
}

#[tokio::test]
async fn test_attendance_outside_session_makes_no_register_call() {
    let backend = MockBackend::start().await;
    backend.ok(
        Method::GET,
        CURRENT_SESSION,
        to_json(&academic_session(date(2024, 9, 1), date(2024, 12, 20))),
    );
    let mut app = app(&backend, None, LogForwarder::disabled());

    let text = app
        .attendance(Some(ClassId::from_u128(1)), date(2025, 1, 10), date(2024, 10, 1))
        .await;

    assert!(text.contains("outside the selectable range 2024-09-01 to 2024-12-20"));
    assert_eq!(backend.hits(Method::GET, "/teacher/attendance"), 0);
}

#[tokio::test]
async fn test_attendance_without_session_is_bound_to_this_year() {
    let backend = MockBackend::start().await;
    backend.ok(Method::GET, CURRENT_SESSION, json!(null));
    let mut app = app(&backend, None, LogForwarder::disabled());

    let text = app
        .attendance(Some(ClassId::from_u128(1)), date(2019, 5, 1), date(2025, 3, 4))
        .await;

    assert_eq!(
        text,
        "2019-05-01 is outside the selectable range 2025-01-01 to 2025-12-31"
    );
    assert_eq!(backend.hits(Method::GET, "/teacher/attendance"), 0);
}

#[tokio::test]
async fn test_attendance_without_class_is_idle() {
    let backend = MockBackend::start().await;
    backend.ok(Method::GET, CURRENT_SESSION, json!(null));
    let mut app = app(&backend, None, LogForwarder::disabled());

    let text = app.attendance(None, date(2024, 10, 15), date(2024, 10, 1)).await;

    assert_eq!(text, "Make a selection to continue.");
    assert_eq!(backend.hits(Method::GET, "/teacher/attendance"), 0);
}

#[tokio::test]
async fn test_expired_session_message_and_forwarded_log() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/director/dashboard/subjects",
        StatusCode::OK,
        json!({ "success": false, "message": "jwt expired", "statusCode": 401 }),
    );
    backend.ok(Method::POST, "/api/log", json!(null));
    let forwarder = LogForwarder::new(Some(format!("{}/api/log", backend.base_url())));
    let mut app = app(
        &backend,
        Some(session(Role::SchoolDirector, UserType::SchoolAdmin)),
        forwarder,
    );

    let text = app.subjects().await;
    app.flush().await;

    assert_eq!(text, SESSION_EXPIRED_MESSAGE);
    let log = backend.last_request(Method::POST, "/api/log").unwrap().json();
    assert_eq!(log["level"], "error");
    assert_eq!(log["message"], "jwt expired");
    assert_eq!(log["data"]["command"], "subjects");
    assert_eq!(log["data"]["status"], 401);
}

#[tokio::test]
async fn test_play_records_view_in_background() {
    let backend = MockBackend::start().await;
    let id = VideoId::from_u128(3);
    let video = json!({
        "id": id,
        "topic_id": Uuid::from_u128(2),
        "title": "Photosynthesis",
        "url": "https://cdn.example/photo.mp4",
        "views": 12,
        "created_at": "2024-10-01T08:00:00Z",
        "updated_at": "2024-10-01T08:00:00Z"
    });
    backend.ok(
        Method::GET,
        &format!("/video/{id}/play"),
        json!({ "video": video, "stream_url": "https://cdn.example/signed.m3u8", "related": [] }),
    );
    backend.fail(
        Method::POST,
        &format!("/video/{id}/view"),
        StatusCode::INTERNAL_SERVER_ERROR,
        "counter down",
    );
    let mut app = app(
        &backend,
        Some(session(Role::Student, UserType::Student)),
        LogForwarder::disabled(),
    );

    let text = app.play(Some(id)).await;
    app.flush().await;

    assert!(text.starts_with("Student Portal"));
    assert!(text.contains("https://cdn.example/signed.m3u8"));
    assert_eq!(backend.hits(Method::POST, &format!("/video/{id}/view")), 1);
}

#[tokio::test]
async fn test_play_without_video_is_idle() {
    let backend = MockBackend::start().await;
    let mut app = app(&backend, None, LogForwarder::disabled());

    let text = app.play(None).await;

    assert!(text.starts_with("Teacher Workspace"));
    assert!(text.ends_with("Make a selection to continue."));
    assert!(backend.requests().is_empty());
}
