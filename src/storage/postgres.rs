// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL course repository.
//!
//! # SQL Queries
//!
//! | Method | Query Pattern |
//! |--------|---------------|
//! | `create` | `INSERT INTO courses (title) VALUES ($1) RETURNING id, title` |
//! | `find_by_id` | `SELECT id, title FROM courses WHERE id = $1` |
//! | `list` | `SELECT id, title FROM courses ORDER BY id LIMIT $1 OFFSET $2` |
//!
//! The `id` column is filled by `DEFAULT gen_random_uuid()`; inserts never
//! bind it.

use course_core::prelude::*;
use sqlx::{PgPool, postgres::PgPoolOptions};
use uuid::Uuid;

use crate::config::DatabaseConfig;

/// Open a pool for `config` and apply embedded migrations when enabled.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    Ok(pool)
}

/// [`CourseRepository`] backed by `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresCourseRepository {
    pool: PgPool
}

impl PostgresCourseRepository {
    /// Wrap an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool
        }
    }
}

impl Repository for PostgresCourseRepository {
    type Error = sqlx::Error;
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn create(&self, dto: CreateCourseRequest) -> Result<Course, Self::Error> {
        let row: CourseRow =
            sqlx::query_as("INSERT INTO courses (title) VALUES ($1) RETURNING id, title")
                .bind(dto.title)
                .fetch_one(&self.pool)
                .await?;
        Ok(Course::from(row))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, Self::Error> {
        let row: Option<CourseRow> =
            sqlx::query_as("SELECT id, title FROM courses WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Course::from))
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Course>, Self::Error> {
        let rows: Vec<CourseRow> =
            sqlx::query_as("SELECT id, title FROM courses ORDER BY id LIMIT $1 OFFSET $2")
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Course::from).collect())
    }
}
