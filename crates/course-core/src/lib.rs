// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types and traits for course-service.
//!
//! This crate holds the course domain: the persisted [`Course`] entity, the
//! request and response DTOs exchanged over HTTP, and the repository traits
//! implemented by the storage backends.
//!
//! # Overview
//!
//! - [`Course`] — Persisted entity (`id`, `title`)
//! - [`CreateCourseRequest`] — Validated request body for course creation
//! - [`CourseCreatedResponse`] — `{"courseId": "<uuid>"}` response body
//! - [`CourseRepository`] — Persistence operations for courses
//! - [`Repository`] — Base trait shared by repositories
//! - [`Pagination`] — Common pagination parameters
//! - [`prelude`] — Convenient re-exports
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `postgres` | `sqlx::FromRow` on [`CourseRow`] |
//! | `api` | `utoipa::ToSchema` on the DTOs |
//! | `validate` | `validator::Validate` on [`CreateCourseRequest`] |
//!
//! # Usage
//!
//! ```rust,ignore
//! use course_core::prelude::*;
//!
//! #[async_trait]
//! impl CourseRepository for MyStore {
//!     type Error = MyError;
//!     // ...
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod course;
pub mod prelude;
mod repository;

/// Re-export async_trait for repository implementations.
pub use async_trait::async_trait;

pub use crate::{
    course::{Course, CourseCreatedResponse, CourseRow, CreateCourseRequest, TITLE_MIN_LENGTH},
    repository::CourseRepository
};

/// Base repository trait.
///
/// Every storage backend names the error its operations fail with.
/// [`CourseRepository`] extends this trait with the course operations.
pub trait Repository: Send + Sync {
    /// Error type for repository operations.
    ///
    /// Must implement `std::error::Error + Send + Sync` for async
    /// compatibility.
    type Error: std::error::Error + Send + Sync;
}

/// Pagination parameters for list operations.
///
/// # Example
///
/// ```rust
/// use course_core::Pagination;
///
/// let page = Pagination::new(10, 0); // First 10 items
/// let next = Pagination::new(10, 10); // Next 10 items
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: i64,

    /// Number of results to skip.
    pub offset: i64
}

impl Pagination {
    /// Create new pagination parameters.
    ///
    /// # Arguments
    ///
    /// * `limit` — Maximum results to return
    /// * `offset` — Number of results to skip
    pub const fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Offset converted for slice indexing, clamped at zero.
    pub fn skip(&self) -> usize {
        usize::try_from(self.offset).unwrap_or(0)
    }

    /// Limit converted for slice indexing, clamped at zero.
    pub fn take(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(0)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit:  100,
            offset: 0
        }
    }
}
