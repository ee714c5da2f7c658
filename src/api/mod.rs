// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP surface.
//!
//! Routes are contributed by [`Plugin`] implementations and assembled by
//! [`app`]:
//!
//! | Plugin | Method | Path |
//! |--------|--------|------|
//! | [`CoursesPlugin`] | POST | `/courses` |
//! | [`DocsPlugin`] | GET | `/docs/json` |
//!
//! # Example
//!
//! ```rust,ignore
//! let state = AppState::new(Arc::new(MemoryCourseRepository::new()));
//! let app = api::app(state);
//! ```

mod courses;
mod docs;
mod extract;

use std::sync::Arc;

use axum::{Router, extract::FromRef};
use course_core::CourseRepository;
use tower_http::trace::TraceLayer;

pub use self::{
    courses::{COURSES_PATH, CoursesPlugin, create_course},
    docs::{ApiDoc, DOCS_PATH, DocsPlugin},
    extract::ValidatedJson
};
use crate::error::ValidationErrorFormat;

/// Shared request state.
pub struct AppState<R> {
    /// Course persistence backend.
    pub repo:              Arc<R>,
    /// Body shape of validation failures.
    pub validation_format: ValidationErrorFormat
}

impl<R> AppState<R> {
    /// State with the default validation format.
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            validation_format: ValidationErrorFormat::default()
        }
    }

    /// Override the validation failure format.
    pub fn with_validation_format(mut self, format: ValidationErrorFormat) -> Self {
        self.validation_format = format;
        self
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo:              Arc::clone(&self.repo),
            validation_format: self.validation_format
        }
    }
}

impl<R> FromRef<AppState<R>> for Arc<R> {
    fn from_ref(state: &AppState<R>) -> Self {
        Arc::clone(&state.repo)
    }
}

impl<R> FromRef<AppState<R>> for ValidationErrorFormat {
    fn from_ref(state: &AppState<R>) -> Self {
        state.validation_format
    }
}

/// Capability to contribute routes to the host router.
///
/// Each plugin registers its method + path + handler triples; the request
/// schema travels with the handler's extractor type.
pub trait Plugin<S> {
    /// Add this plugin's routes to `router`.
    fn register(&self, router: Router<S>) -> Router<S>;
}

/// Build a router from an explicit plugin list.
pub fn router<S>(plugins: &[&dyn Plugin<S>]) -> Router<S>
where
    S: Clone + Send + Sync + 'static
{
    plugins
        .iter()
        .fold(Router::new(), |router, plugin| plugin.register(router))
}

/// Assemble the service router with every built-in plugin.
pub fn app<R>(state: AppState<R>) -> Router
where
    R: CourseRepository + 'static
{
    router::<AppState<R>>(&[&CoursesPlugin, &DocsPlugin])
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
