use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::Query;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDetailDto, CourseListDto, CourseSearchDto, NewCourseFormDto},
    },
    server::{
        controller::util::dto::{category_dto, course_dto, review_dto, user_dto},
        data::{course::NewCourse, review::ReviewRepository},
        error::Error,
        model::{
            app::AppState,
            page::parse_page,
            session::{
                flash::{FlashMessage, FlashSeverity},
                user::SessionUserId,
            },
        },
        service::{
            catalog::{CatalogService, CourseSearch},
            review::{average_rating, ReviewService},
        },
    },
};

pub static COURSE_TAG: &str = "course";

const COURSES_PER_PAGE: u64 = 3;
const RECENT_REVIEWS: u64 = 5;

#[derive(Deserialize, IntoParams)]
pub struct CourseSearchParams {
    /// 1-based page number; invalid values fall back to page 1
    pub page: Option<String>,
    /// Case-insensitive substring filter on the course name
    pub name: Option<String>,
    /// Restrict results to these categories; repeat the key for multiple
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

/// Get one page of the course catalog, optionally filtered
#[utoipa::path(
    get,
    path = "/courses/",
    tag = COURSE_TAG,
    params(CourseSearchParams),
    responses(
        (status = 200, description = "Success when listing courses", body = CourseListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courses(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CourseSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let page = parse_page(params.page.as_deref());
    let search = CourseSearch {
        name: params.name,
        category_ids: params.category_ids,
    };

    let listing = catalog_service.list(&search, page, COURSES_PER_PAGE).await?;

    let notices = FlashMessage::take(&session).await?;

    let dto = CourseListDto {
        courses: listing.courses.iter().map(course_dto).collect(),
        categories: listing.categories.iter().map(category_dto).collect(),
        pagination: listing.pagination.to_dto(),
        search: CourseSearchDto {
            name: search.name,
            category_ids: search.category_ids,
        },
        notices: notices.iter().map(FlashMessage::to_dto).collect(),
    };

    Ok((StatusCode::OK, axum::Json(dto)).into_response())
}

/// Get the choices for the course creation form
#[utoipa::path(
    get,
    path = "/courses/new",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Success when fetching form choices", body = NewCourseFormDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn new_course_form(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let (categories, users) = catalog_service.creation_choices().await?;

    let dto = NewCourseFormDto {
        categories: categories.iter().map(category_dto).collect(),
        users: users.iter().map(user_dto).collect(),
    };

    Ok((StatusCode::OK, axum::Json(dto)).into_response())
}

#[derive(Default)]
struct CourseForm {
    name: Option<String>,
    category_id: Option<i32>,
    author_id: Option<i32>,
    short_desc: Option<String>,
    full_desc: Option<String>,
    background_image_id: Option<String>,
}

/// Create a new course from the submitted multipart form
#[utoipa::path(
    post,
    path = "/courses/create",
    tag = COURSE_TAG,
    responses(
        (status = 303, description = "Redirect to the catalog on success, back to the form on invalid input"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let mut form = CourseForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("name") => form.name = Some(field.text().await?),
            Some("category_id") => form.category_id = field.text().await?.parse().ok(),
            Some("author_id") => form.author_id = field.text().await?.parse().ok(),
            Some("short_desc") => form.short_desc = Some(field.text().await?),
            Some("full_desc") => form.full_desc = Some(field.text().await?),
            Some("background_img") => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;

                // The browser sends an empty file part when no image was chosen
                if let Some(file_name) = file_name.filter(|name| !name.is_empty()) {
                    if !bytes.is_empty() {
                        form.background_image_id =
                            Some(state.images.save(&file_name, &bytes).await?);
                    }
                }
            }
            _ => (),
        }
    }

    let (name, category_id, author_id, short_desc, full_desc) = match (
        form.name.filter(|name| !name.is_empty()),
        form.category_id,
        form.author_id,
        form.short_desc,
        form.full_desc,
    ) {
        (Some(name), Some(category_id), Some(author_id), Some(short_desc), Some(full_desc)) => {
            (name, category_id, author_id, short_desc, full_desc)
        }
        _ => {
            FlashMessage::push(
                &session,
                FlashSeverity::Danger,
                "All fields except the background image are required.",
            )
            .await?;

            return Ok(Redirect::to("/courses/new").into_response());
        }
    };

    let course = catalog_service
        .create(NewCourse {
            name,
            category_id,
            author_id,
            short_desc,
            full_desc,
            background_image_id: form.background_image_id,
        })
        .await?;

    FlashMessage::push(
        &session,
        FlashSeverity::Success,
        format!("Course {} was successfully added!", course.name),
    )
    .await?;

    Ok(Redirect::to("/courses/").into_response())
}

/// Get one course with its reviews
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "ID of the course to fetch")
    ),
    responses(
        (status = 200, description = "Success when fetching the course", body = CourseDetailDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn show_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);
    let review_service = ReviewService::new(&state.db);
    let review_repository = ReviewRepository::new(&state.db);

    let course = catalog_service.get_course(course_id).await?;

    let reviews = review_repository
        .all_by_course(course_id)
        .await?
        .into_iter()
        .map(|(review, reviewer)| review_dto(review, reviewer))
        .collect::<Result<Vec<_>, _>>()?;

    let recent_reviews = review_repository
        .recent_by_course(course_id, RECENT_REVIEWS)
        .await?
        .into_iter()
        .map(|(review, reviewer)| review_dto(review, reviewer))
        .collect::<Result<Vec<_>, _>>()?;

    let viewer = SessionUserId::get(&session).await?;
    let viewer_has_reviewed = review_service
        .viewer_has_reviewed(course_id, viewer)
        .await?;

    let notices = FlashMessage::take(&session).await?;

    let rating = average_rating(&course);

    let dto = CourseDetailDto {
        id: course.id,
        name: course.name,
        category_id: course.category_id,
        author_id: course.author_id,
        short_desc: course.short_desc,
        full_desc: course.full_desc,
        background_image_id: course.background_image_id,
        rating,
        rating_num: course.rating_num,
        reviews,
        recent_reviews,
        viewer_has_reviewed,
        notices: notices.iter().map(FlashMessage::to_dto).collect(),
    };

    Ok((StatusCode::OK, axum::Json(dto)).into_response())
}
