// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! OpenAPI document.
//!
//! Schemas come from the `ToSchema` derives in `course-core`; the
//! `POST /courses` operation is added by [`CoursePaths`] because the handler
//! is generic over its repository.

use axum::{Json, Router, routing::get};
use course_core::{CourseCreatedResponse, CreateCourseRequest};
use utoipa::OpenApi;

use super::{Plugin, courses::COURSES_PATH};

/// Path serving the OpenAPI JSON document.
pub const DOCS_PATH: &str = "/docs/json";

/// OpenAPI document for the course API.
#[derive(OpenApi)]
#[openapi(
    info(title = "Courses API", version = "1.0.0"),
    components(schemas(CreateCourseRequest, CourseCreatedResponse)),
    modifiers(&CoursePaths),
    tags((name = "courses", description = "Course management"))
)]
pub struct ApiDoc;

/// Adds the course operations to the document.
struct CoursePaths;

impl utoipa::Modify for CoursePaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::*;

        let error_response = |desc: &str| -> response::Response {
            response::ResponseBuilder::new().description(desc).build()
        };

        let create_op = path::OperationBuilder::new()
            .operation_id(Some("create_course"))
            .tag("courses")
            .summary(Some("Create a course"))
            .description(Some("Receives a title and creates a course in the database"))
            .request_body(Some(
                request_body::RequestBodyBuilder::new()
                    .description(Some("Title of the new course"))
                    .required(Some(Required::True))
                    .content(
                        "application/json",
                        content::ContentBuilder::new()
                            .schema(Some(Ref::from_schema_name("CreateCourseRequest")))
                            .build()
                    )
                    .build()
            ))
            .response(
                "201",
                response::ResponseBuilder::new()
                    .description("Course created")
                    .content(
                        "application/json",
                        content::ContentBuilder::new()
                            .schema(Some(Ref::from_schema_name("CourseCreatedResponse")))
                            .build()
                    )
                    .build()
            )
            .response("400", error_response("Invalid request data"))
            .response("500", error_response("Internal server error"))
            .build();

        openapi
            .paths
            .add_path_operation(COURSES_PATH, vec![path::HttpMethod::Post], create_op);
    }
}

/// Registers `GET /docs/json` and, with the `swagger-ui` feature, `/docs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocsPlugin;

impl<S> Plugin<S> for DocsPlugin
where
    S: Clone + Send + Sync + 'static
{
    #[cfg(not(feature = "swagger-ui"))]
    fn register(&self, router: Router<S>) -> Router<S> {
        router.route(DOCS_PATH, get(|| async { Json(ApiDoc::openapi()) }))
    }

    #[cfg(feature = "swagger-ui")]
    fn register(&self, router: Router<S>) -> Router<S> {
        router.merge(utoipa_swagger_ui::SwaggerUi::new("/docs").url(DOCS_PATH, ApiDoc::openapi()))
    }
}

#[cfg(test)]
mod tests {
    use course_core::TITLE_MIN_LENGTH;

    use super::*;

    #[test]
    fn document_lists_create_course() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let op = &doc["paths"]["/courses"]["post"];

        assert_eq!(op["operationId"], "create_course");
        assert_eq!(op["tags"][0], "courses");
        assert_eq!(op["summary"], "Create a course");
        assert!(op["responses"]["201"].is_object());
    }

    #[test]
    fn document_carries_title_constraint() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let title = &doc["components"]["schemas"]["CreateCourseRequest"]["properties"]["title"];

        assert_eq!(title["minLength"], TITLE_MIN_LENGTH);
    }

    #[test]
    fn document_names_course_id_in_camel_case() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schema = &doc["components"]["schemas"]["CourseCreatedResponse"];

        assert_eq!(schema["properties"]["courseId"]["format"], "uuid");
        assert_eq!(schema["required"][0], "courseId");
    }
}
