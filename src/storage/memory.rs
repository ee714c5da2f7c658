// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process-local course store.

use std::convert::Infallible;

use course_core::prelude::*;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory [`CourseRepository`].
///
/// Generates UUID v4 identifiers on insert, the way the `courses` table
/// default does.
#[derive(Debug, Default)]
pub struct MemoryCourseRepository {
    rows: RwLock<Vec<Course>>
}

impl MemoryCourseRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored courses.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Whether nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl Repository for MemoryCourseRepository {
    type Error = Infallible;
}

#[async_trait]
impl CourseRepository for MemoryCourseRepository {
    async fn create(&self, dto: CreateCourseRequest) -> Result<Course, Self::Error> {
        let course = Course {
            id:    Uuid::new_v4(),
            title: dto.title
        };
        self.rows.write().await.push(course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, Self::Error> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|course| course.id == id)
            .cloned())
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Course>, Self::Error> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .skip(page.skip())
            .take(page.take())
            .cloned()
            .collect())
    }
}
