// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Course entity and its DTOs.
//!
//! | Type | Purpose | Direction |
//! |------|---------|-----------|
//! | `CreateCourseRequest` | Validated input from client | Request body |
//! | `CourseRow` | Row returned by `INSERT ... RETURNING` | Database → entity |
//! | `Course` | Internal domain entity | Repository return |
//! | `CourseCreatedResponse` | Serialized output to client | Response body |

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum number of characters in a course title.
///
/// Drives the `length` validator on [`CreateCourseRequest::title`]; the
/// `min_length` schema constraint is checked against it in tests.
pub const TITLE_MIN_LENGTH: u64 = 5;

/// Persisted course.
///
/// `id` is always assigned by the persistence layer on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Identifier generated on insert.
    pub id:    Uuid,
    /// Course title, at least [`TITLE_MIN_LENGTH`] characters.
    pub title: String
}

/// Request DTO for creating a new course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validate", derive(validator::Validate))]
pub struct CreateCourseRequest {
    /// Course title.
    #[cfg_attr(
        feature = "validate",
        validate(length(min = TITLE_MIN_LENGTH, message = "title must have at least 5 characters"))
    )]
    #[cfg_attr(feature = "api", schema(min_length = 5, example = "Intro to Systems"))]
    pub title: String
}

/// Response DTO returned after a course is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CourseCreatedResponse {
    /// Identifier of the created course.
    pub course_id: Uuid
}

/// Database row for the `courses` table.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CourseRow {
    /// Primary key, `DEFAULT gen_random_uuid()`.
    pub id:    Uuid,
    /// Title column.
    pub title: String
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Self {
            id:    row.id,
            title: row.title
        }
    }
}

impl From<Course> for CourseCreatedResponse {
    fn from(course: Course) -> Self {
        Self {
            course_id: course.id
        }
    }
}

impl From<&Course> for CourseCreatedResponse {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.id
        }
    }
}
