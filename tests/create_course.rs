// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end tests for `POST /courses` against the in-memory backend.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header}
};
use course_core::prelude::*;
use course_service::{
    api::{self, AppState},
    error::ValidationErrorFormat,
    storage::MemoryCourseRepository
};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

fn setup() -> (Router, Arc<MemoryCourseRepository>) {
    let repo = Arc::new(MemoryCourseRepository::new());
    let app = api::app(AppState::new(Arc::clone(&repo)));
    (app, repo)
}

fn post_courses(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/courses")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn create(app: Router, body: Value) -> (StatusCode, Value) {
    send(app, post_courses(body.to_string())).await
}

fn course_id(body: &Value) -> Uuid {
    let raw = body["courseId"].as_str().expect("courseId is a string");
    Uuid::parse_str(raw).expect("courseId is a UUID")
}

#[tokio::test]
async fn creates_course_and_returns_its_id() {
    let (app, repo) = setup();

    let (status, body) = create(app, json!({ "title": "Intro to Systems" })).await;

    assert_eq!(status, StatusCode::CREATED);
    let id = course_id(&body);

    let rows = repo.list(Pagination::default()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].title, "Intro to Systems");
}

#[tokio::test]
async fn response_body_contains_only_course_id() {
    let (app, _repo) = setup();

    let (_, body) = create(app, json!({ "title": "Distributed Systems" })).await;

    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("courseId"));
}

#[tokio::test]
async fn accepts_title_of_exactly_five_characters() {
    let (app, repo) = setup();

    let (status, _) = create(app, json!({ "title": "Rust!" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn identical_titles_create_distinct_rows() {
    let (app, repo) = setup();

    let (first_status, first) = create(app.clone(), json!({ "title": "Intro to Systems" })).await;
    let (second_status, second) = create(app, json!({ "title": "Intro to Systems" })).await;

    assert_eq!(first_status, StatusCode::CREATED);
    assert_eq!(second_status, StatusCode::CREATED);
    assert_ne!(course_id(&first), course_id(&second));
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn rejects_short_titles_without_inserting() {
    for title in ["Go", "abcd", ""] {
        let (app, repo) = setup();

        let (status, body) = create(app, json!({ "title": title })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "title {title:?}");
        assert!(body.get("courseId").is_none());
        assert!(repo.is_empty().await, "title {title:?} was inserted");
    }
}

#[tokio::test]
async fn short_title_reports_envelope() {
    let (app, _repo) = setup();

    let (_, body) = create(app, json!({ "title": "Go" })).await;

    assert_eq!(
        body,
        json!({
            "statusCode": 400,
            "code": "VALIDATION_ERROR",
            "error": "Bad Request",
            "message": "body/title title must have at least 5 characters"
        })
    );
}

#[tokio::test]
async fn rejects_missing_title() {
    let (app, repo) = setup();

    let (status, body) = create(app, json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn rejects_non_string_title() {
    let (app, repo) = setup();

    let (status, _) = create(app, json!({ "title": 123456 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn rejects_malformed_json() {
    let (app, repo) = setup();

    let (status, _) = send(app, post_courses("{\"title\": ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn rejects_missing_content_type() {
    let (app, repo) = setup();
    let request = Request::builder()
        .method("POST")
        .uri("/courses")
        .body(Body::from(json!({ "title": "Intro to Systems" }).to_string()))
        .unwrap();

    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn problem_format_keeps_client_error_status() {
    let repo = Arc::new(MemoryCourseRepository::new());
    let state = AppState::new(Arc::clone(&repo))
        .with_validation_format(ValidationErrorFormat::Problem);
    let app = api::app(state);

    let (status, body) = create(app, json!({ "title": "Go" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("courseId").is_none());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn other_methods_are_not_routed() {
    let (app, _repo) = setup();
    let request = Request::builder()
        .method("GET")
        .uri("/courses")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn serves_openapi_document() {
    let (app, _repo) = setup();
    let request = Request::builder()
        .method("GET")
        .uri(api::DOCS_PATH)
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/courses"]["post"].is_object());
}

/// Driver text the failing backend reports; must never reach the client.
const BACKEND_FAILURE: &str = "relation \"courses\" does not exist";

/// Backend whose inserts always fail.
struct FailingRepository;

impl Repository for FailingRepository {
    type Error = std::io::Error;
}

#[async_trait]
impl CourseRepository for FailingRepository {
    async fn create(&self, _dto: CreateCourseRequest) -> Result<Course, Self::Error> {
        Err(std::io::Error::other(BACKEND_FAILURE))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Course>, Self::Error> {
        Ok(None)
    }

    async fn list(&self, _page: Pagination) -> Result<Vec<Course>, Self::Error> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn persistence_failure_is_server_error() {
    let app = api::app(AppState::new(Arc::new(FailingRepository)));

    let (status, body) = create(app, json!({ "title": "Intro to Systems" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("courseId").is_none());
}

#[tokio::test]
async fn persistence_failure_hides_backend_message() {
    let app = api::app(AppState::new(Arc::new(FailingRepository)));

    let (status, body) = create(app, json!({ "title": "Intro to Systems" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "failed to create course");
    assert!(!body.to_string().contains(BACKEND_FAILURE));
}
