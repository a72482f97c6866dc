mod common;

use axum::http::{Method, StatusCode};
use common::{MockBackend, student_page, subject, to_json};
use serde_json::json;
use smartedu::api::{ApiClient, FileUpload};
use smartedu::config::ApiConfig;
use smartedu::core::ApiErrorKind;
use smartedu::core::errors::{
    CONFIGURATION_MESSAGE, FORBIDDEN_MESSAGE, SESSION_EXPIRED_MESSAGE,
};
use smartedu::models::ids::ClassId;
use smartedu::models::{CreateSubjectDto, StudentFilterParams};
use smartedu::modules::{StudentService, SubjectService};

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let backend = MockBackend::start().await;
    backend.ok(Method::GET, "/director/dashboard/subjects", json!([]));

    let api = backend.api_client(Some("abc123"));
    SubjectService::list_subjects(&api).await.unwrap();

    let request = backend
        .last_request(Method::GET, "/director/dashboard/subjects")
        .unwrap();
    assert_eq!(request.authorization.as_deref(), Some("Bearer abc123"));
}

#[tokio::test]
async fn test_signed_out_requests_have_no_authorization() {
    let backend = MockBackend::start().await;
    backend.ok(Method::GET, "/explore/subjects", json!([]));

    let api = backend.api_client(None);
    smartedu::modules::ExploreService::catalogue(&api)
        .await
        .unwrap();

    let request = backend.last_request(Method::GET, "/explore/subjects").unwrap();
    assert!(request.authorization.is_none());
}

#[tokio::test]
async fn test_student_list_sends_filters_and_decodes_page() {
    let backend = MockBackend::start().await;
    let page = student_page(3, 2, 4);
    backend.ok(Method::GET, "/director/dashboard/students", to_json(&page));

    let class_id = ClassId::from_u128(1);
    let filters = StudentFilterParams::default()
        .with_search("ada")
        .with_class(Some(class_id))
        .with_page(2);
    let api = backend.api_client(Some("t"));
    let result = StudentService::list_students(&api, &filters).await.unwrap();

    assert_eq!(result.data.len(), 3);
    assert_eq!(result.meta.page, 2);
    assert!(result.meta.has_next && result.meta.has_previous);

    let query = backend
        .last_request(Method::GET, "/director/dashboard/students")
        .unwrap()
        .query
        .unwrap();
    assert!(query.contains("page=2"));
    assert!(query.contains("search=ada"));
    assert!(query.contains(&format!("class_id={class_id}")));
}

#[tokio::test]
async fn test_unauthorized_envelope_inside_success_status() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/director/dashboard/subjects",
        StatusCode::OK,
        json!({ "success": false, "message": "jwt expired", "statusCode": 401 }),
    );

    let api = backend.api_client(Some("expired"));
    let error = SubjectService::list_subjects(&api).await.unwrap_err();

    assert_eq!(error.kind, ApiErrorKind::Unauthorized);
    assert_eq!(error.status, 401);
    assert_eq!(error.user_message(), SESSION_EXPIRED_MESSAGE);
    assert!(error.envelope.is_some());
}

#[tokio::test]
async fn test_forbidden_and_server_errors() {
    let backend = MockBackend::start().await;
    backend.fail(
        Method::GET,
        "/director/dashboard/classes",
        StatusCode::FORBIDDEN,
        "Directors only",
    );
    backend.fail(
        Method::GET,
        "/director/dashboard/subjects",
        StatusCode::INTERNAL_SERVER_ERROR,
        "Database unavailable",
    );

    let api = backend.api_client(Some("t"));

    let forbidden = smartedu::modules::ClassService::list_classes(&api)
        .await
        .unwrap_err();
    assert!(forbidden.is_forbidden());
    assert_eq!(forbidden.user_message(), FORBIDDEN_MESSAGE);
    assert!(!forbidden.is_retryable());

    let server = SubjectService::list_subjects(&api).await.unwrap_err();
    assert_eq!(server.status, 500);
    assert!(server.is_retryable());
    assert_eq!(server.user_message(), "Database unavailable");
}

#[tokio::test]
async fn test_missing_base_url_is_configuration_error() {
    let api = ApiClient::new(ApiConfig::default()).with_token("t");
    let error = SubjectService::list_subjects(&api).await.unwrap_err();

    assert_eq!(error.kind, ApiErrorKind::Configuration);
    assert_eq!(error.user_message(), CONFIGURATION_MESSAGE);
}

#[tokio::test]
async fn test_create_subject_uploads_multipart_thumbnail() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/director/dashboard/subjects",
        StatusCode::CREATED,
        json!({ "success": true, "data": to_json(&subject("Biology")), "statusCode": 201 }),
    );

    let dto = CreateSubjectDto {
        name: "Biology".into(),
        code: Some("BIO".into()),
        description: None,
        class_id: None,
        color: None,
    };
    let thumbnail = FileUpload::new("cell.png", "image/png", vec![137, 80, 78, 71]);

    let api = backend.api_client(Some("t"));
    let created = SubjectService::create_subject(&api, dto, Some(thumbnail))
        .await
        .unwrap();
    assert_eq!(created.name, "Biology");

    let request = backend
        .last_request(Method::POST, "/director/dashboard/subjects")
        .unwrap();
    let content_type = request.content_type.unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("Biology"));
    assert!(body.contains("filename=\"cell.png\""));
}

#[tokio::test]
async fn test_delete_accepts_empty_success() {
    let backend = MockBackend::start().await;
    let id = smartedu::models::ids::SubjectId::from_u128(8);
    let path = format!("/director/dashboard/subjects/{id}");
    backend.respond(
        Method::DELETE,
        &path,
        StatusCode::OK,
        json!({ "success": true, "message": "Deleted" }),
    );

    let api = backend.api_client(Some("t"));
    SubjectService::delete_subject(&api, id).await.unwrap();
    assert_eq!(backend.hits(Method::DELETE, &path), 1);
}

#[tokio::test]
async fn test_current_session_absent_is_none() {
    let backend = MockBackend::start().await;
    backend.fail(
        Method::GET,
        "/director/dashboard/academic-sessions/current",
        StatusCode::NOT_FOUND,
        "No current session",
    );

    let api = backend.api_client(Some("t"));
    let current = smartedu::modules::AcademicSessionService::current_session(&api)
        .await
        .unwrap();
    assert!(current.is_none());
}
