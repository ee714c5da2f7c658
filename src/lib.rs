// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # course-service
//!
//! HTTP service exposing `POST /courses`: validates a course title and
//! inserts one row into the `courses` table, answering `201` with the
//! generated identifier.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use course_service::{
//!     api::{self, AppState},
//!     storage::MemoryCourseRepository,
//! };
//!
//! let state = AppState::new(Arc::new(MemoryCourseRepository::new()));
//! let app = api::app(state);
//! axum::serve(listener, app).await?;
//! ```
//!
//! ## Request Flow
//!
//! ```text
//! Client              ValidatedJson           create_course         CourseRepository
//!   │ POST /courses        │                       │                       │
//!   │─────────────────────>│ serde + validator     │                       │
//!   │                      │──────────────────────>│ repo.create(dto)      │
//!   │                      │                       │──────────────────────>│ INSERT ... RETURNING
//!   │                      │                       │<──────────────────────│ Course
//!   │<─────────────────────────────────────────────│ 201 {"courseId"}      │
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod storage;
pub mod telemetry;

pub use course_core::{
    Course, CourseCreatedResponse, CourseRepository, CreateCourseRequest, Pagination, Repository
};
