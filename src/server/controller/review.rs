use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::{api::ErrorDto, review::ReviewListDto},
    server::{
        controller::util::dto::{course_dto, review_dto},
        data::review::{ReviewRepository, ReviewSort},
        error::Error,
        model::{
            app::AppState,
            page::{parse_page, Pagination},
            session::{
                flash::{FlashMessage, FlashSeverity},
                user::SessionUserId,
            },
        },
        service::{
            catalog::CatalogService,
            review::{ReviewService, SubmitOutcome, MAX_RATING, MIN_RATING},
        },
    },
};

pub static REVIEW_TAG: &str = "review";

const REVIEWS_PER_PAGE: u64 = 5;

/// Where unauthenticated review submissions are sent
pub static LOGIN_ROUTE: &str = "/auth/login";

#[derive(Deserialize, IntoParams)]
pub struct ReviewListParams {
    /// 1-based page number; invalid values fall back to page 1
    pub page: Option<String>,
    /// Sort order: `new`, `positive`, or `negative`; anything else means `new`
    pub sort_by: Option<String>,
}

/// Get one page of a course's reviews in the requested order
#[utoipa::path(
    get,
    path = "/courses/{course_id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("course_id" = i32, Path, description = "ID of the course whose reviews to list"),
        ReviewListParams
    ),
    responses(
        (status = 200, description = "Success when listing reviews", body = ReviewListDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
    Query(params): Query<ReviewListParams>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);
    let review_service = ReviewService::new(&state.db);
    let review_repository = ReviewRepository::new(&state.db);

    let course = catalog_service.get_course(course_id).await?;

    let page = parse_page(params.page.as_deref());
    let sort = ReviewSort::from_param(params.sort_by.as_deref());

    let (reviews, totals) = review_repository
        .page_by_course(course_id, sort, page, REVIEWS_PER_PAGE)
        .await?;

    let reviews = reviews
        .into_iter()
        .map(|(review, reviewer)| review_dto(review, reviewer))
        .collect::<Result<Vec<_>, _>>()?;

    let viewer = SessionUserId::get(&session).await?;
    let has_reviewed = review_service
        .viewer_has_reviewed(course_id, viewer)
        .await?;

    let dto = ReviewListDto {
        course: course_dto(&course),
        reviews,
        pagination: Pagination::new(page, REVIEWS_PER_PAGE, totals).to_dto(),
        sort_by: sort.as_str().to_string(),
        has_reviewed,
    };

    Ok((StatusCode::OK, axum::Json(dto)).into_response())
}

#[derive(Deserialize, ToSchema)]
pub struct AddReviewForm {
    pub rating: i32,
    pub text: String,
}

/// Submit a review for a course
#[utoipa::path(
    post,
    path = "/courses/{course_id}/add_review",
    tag = REVIEW_TAG,
    params(
        ("course_id" = i32, Path, description = "ID of the course to review")
    ),
    request_body(content = AddReviewForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the course page on success, to login when unauthenticated"),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_review(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
    Form(form): Form<AddReviewForm>,
) -> Result<impl IntoResponse, Error> {
    let review_service = ReviewService::new(&state.db);

    let viewer = SessionUserId::get(&session).await?;
    let outcome = review_service
        .submit(course_id, viewer, form.rating, form.text)
        .await?;

    let course_route = format!("/courses/{}", course_id);

    match outcome {
        SubmitOutcome::Submitted => {
            FlashMessage::push(&session, FlashSeverity::Success, "Review added!").await?;

            Ok(Redirect::to(&course_route).into_response())
        }
        SubmitOutcome::NotAuthenticated => {
            FlashMessage::push(
                &session,
                FlashSeverity::Warning,
                "You must be logged in to leave a review.",
            )
            .await?;

            Ok(Redirect::to(LOGIN_ROUTE).into_response())
        }
        SubmitOutcome::InvalidRating => {
            FlashMessage::push(
                &session,
                FlashSeverity::Danger,
                format!(
                    "Rating must be between {} and {}.",
                    MIN_RATING, MAX_RATING
                ),
            )
            .await?;

            Ok(Redirect::to(&course_route).into_response())
        }
        SubmitOutcome::AlreadyReviewed => {
            FlashMessage::push(
                &session,
                FlashSeverity::Danger,
                "You have already reviewed this course.",
            )
            .await?;

            Ok(Redirect::to(&course_route).into_response())
        }
    }
}
