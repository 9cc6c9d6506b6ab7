//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered here with their OpenAPI specifications via
//! utoipa, and Swagger UI serves the interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /courses/` - List courses with optional filters and pagination
/// - `GET /courses/new` - Choices for the course creation form
/// - `POST /courses/create` - Create a course from a multipart form
/// - `GET /courses/{course_id}` - Course detail with reviews
/// - `GET /courses/{course_id}/reviews` - Sorted, paginated reviews
/// - `POST /courses/{course_id}/add_review` - Submit a review
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Coursehub", description = "Coursehub API"), tags(
        (name = controller::course::COURSE_TAG, description = "Course catalog API routes"),
        (name = controller::review::REVIEW_TAG, description = "Course review API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::course::list_courses))
        .routes(routes!(controller::course::new_course_form))
        .routes(routes!(controller::course::create_course))
        .routes(routes!(controller::course::show_course))
        .routes(routes!(controller::review::list_reviews))
        .routes(routes!(controller::review::add_review))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
