// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Course persistence contract.

use uuid::Uuid;

use crate::{Course, CreateCourseRequest, Pagination, Repository};

/// Repository trait for course persistence operations.
///
/// Implementations own identifier generation: `create` never receives an
/// id and returns the row exactly as stored.
///
/// ```rust,ignore
/// #[async_trait]
/// impl CourseRepository for PostgresCourseRepository {
///     async fn create(&self, dto: CreateCourseRequest) -> Result<Course, Self::Error> { ... }
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, Self::Error> { ... }
///     async fn list(&self, page: Pagination) -> Result<Vec<Course>, Self::Error> { ... }
/// }
/// ```
#[async_trait::async_trait]
pub trait CourseRepository: Repository {
    /// Insert one course and return the stored row.
    async fn create(&self, dto: CreateCourseRequest) -> Result<Course, Self::Error>;

    /// Find course by ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, Self::Error>;

    /// List stored courses.
    async fn list(&self, page: Pagination) -> Result<Vec<Course>, Self::Error>;
}
