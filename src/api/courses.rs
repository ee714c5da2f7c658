// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `POST /courses` handler.
//!
//! # Request Flow
//!
//! ```text
//! Client                Handler              Repository           Database
//!   │                      │                      │                   │
//!   │ POST /courses        │                      │                   │
//!   │ {"title": "..."}     │                      │                   │
//!   │─────────────────────>│                      │                   │
//!   │                      │ repo.create(dto)     │                   │
//!   │                      │─────────────────────>│                   │
//!   │                      │                      │ INSERT ... RETURNING
//!   │                      │                      │──────────────────>│
//!   │                      │                      │<──────────────────│
//!   │                      │<─────────────────────│  CourseRow        │
//!   │                      │      Course          │                   │
//!   │<─────────────────────│                      │                   │
//!   │ 201 Created          │                      │                   │
//!   │ {"courseId": "..."}  │                      │                   │
//! ```

use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use course_core::{CourseCreatedResponse, CourseRepository, CreateCourseRequest};

use super::{AppState, Plugin, ValidatedJson};
use crate::error::{AppError, AppResult};

/// Path of the course collection.
pub const COURSES_PATH: &str = "/courses";

/// Create a course.
///
/// Receives a title and creates a course in the database. Documented in the
/// OpenAPI document under `create_course`.
///
/// # Responses
///
/// - `201 Created` - Course created
/// - `400 Bad Request` - Title missing, not a string, or shorter than 5 characters
/// - `500 Internal Server Error` - Database or server error
pub async fn create_course<R>(
    State(repo): State<Arc<R>>,
    ValidatedJson(dto): ValidatedJson<CreateCourseRequest>
) -> AppResult<(StatusCode, Json<CourseCreatedResponse>)>
where
    R: CourseRepository + 'static
{
    let course = repo
        .create(dto)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "course insert failed");
            AppError::internal("failed to create course")
        })?;

    tracing::info!(course_id = %course.id, "course created");
    Ok((StatusCode::CREATED, Json(CourseCreatedResponse::from(course))))
}

/// Registers `POST /courses`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoursesPlugin;

impl<R> Plugin<AppState<R>> for CoursesPlugin
where
    R: CourseRepository + 'static
{
    fn register(&self, router: Router<AppState<R>>) -> Router<AppState<R>> {
        router.route(COURSES_PATH, post(create_course::<R>))
    }
}
