// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for the HTTP layer.
//!
//! Two error paths exist:
//!
//! | Path | Type | Status |
//! |------|------|--------|
//! | Request body rejected before the handler runs | [`ValidationRejection`] | 4xx |
//! | Anything the handler propagates with `?` | [`AppError`] | 500 for persistence failures |
//!
//! The body of a validation failure depends on [`ValidationErrorFormat`]:
//!
//! ```text
//! envelope: {"statusCode":400,"code":"VALIDATION_ERROR","error":"Bad Request",
//!            "message":"body/title title must have at least 5 characters"}
//! problem:  application/problem+json rendered by masterror
//! ```

use std::{fmt, str::FromStr};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response}
};
pub use masterror::{AppError, AppResult};
use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Code reported in envelope bodies for rejected request bodies.
pub const VALIDATION_ERROR_CODE: &str = "VALIDATION_ERROR";

/// Body shape used when a request fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationErrorFormat {
    /// `{"statusCode", "code", "error", "message"}` object.
    #[default]
    Envelope,

    /// RFC 7807 problem document produced by [`AppError`].
    Problem
}

impl FromStr for ValidationErrorFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "envelope" => Ok(Self::Envelope),
            "problem" | "problem+json" => Ok(Self::Problem),
            _ => Err(())
        }
    }
}

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted path of the field inside the body.
    pub field:   String,
    /// Constraint message.
    pub message: String
}

/// Rejection produced when a request body does not satisfy its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRejection {
    status:  StatusCode,
    format:  ValidationErrorFormat,
    message: String,
    issues:  Vec<FieldIssue>
}

impl ValidationRejection {
    /// Body parsed but violates field constraints.
    pub fn invalid(format: ValidationErrorFormat, errors: &ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_issues("", errors, &mut issues);
        issues.sort_by(|a, b| a.field.cmp(&b.field));

        let message = issues
            .iter()
            .map(|issue| format!("body/{} {}", issue.field, issue.message))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            status: StatusCode::BAD_REQUEST,
            format,
            message,
            issues
        }
    }

    /// Body could not be turned into the target type.
    ///
    /// `status` is the status the JSON extractor assigned; shape errors
    /// (missing field, wrong type) are reported as 400.
    pub fn malformed(format: ValidationErrorFormat, status: StatusCode, detail: String) -> Self {
        let status = if status == StatusCode::UNPROCESSABLE_ENTITY {
            StatusCode::BAD_REQUEST
        } else {
            status
        };

        Self {
            status,
            format,
            message: format!("body {detail}"),
            issues: Vec::new()
        }
    }

    /// HTTP status of the rejection.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Human-readable summary.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Individual constraint failures, sorted by field.
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

impl fmt::Display for ValidationRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationRejection {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    status_code: u16,
    code:        &'static str,
    error:       &'a str,
    message:     &'a str
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, message = %self.message, "request body rejected");

        match self.format {
            ValidationErrorFormat::Envelope => {
                let body = Envelope {
                    status_code: self.status.as_u16(),
                    code:        VALIDATION_ERROR_CODE,
                    error:       self.status.canonical_reason().unwrap_or("Bad Request"),
                    message:     &self.message
                };
                (self.status, Json(body)).into_response()
            }
            ValidationErrorFormat::Problem => {
                let mut response = AppError::bad_request(self.message).into_response();
                *response.status_mut() = self.status;
                response
            }
        }
    }
}

fn collect_issues(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldIssue>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|err| FieldIssue {
                    field:   path.clone(),
                    message: err
                        .message
                        .as_deref()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("failed `{}` constraint", err.code))
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_issues(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_issues(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}
