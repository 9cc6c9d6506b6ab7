use serde::{Deserialize, Serialize};

use crate::model::{api::FlashDto, page::PaginationDto, review::ReviewDto};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
}

/// A course as rendered in the catalog listing
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub author_id: i32,
    pub short_desc: String,
    pub background_image_id: Option<String>,
    /// Mean of all submitted ratings, 0 when the course has none
    pub rating: f64,
    pub rating_num: i32,
}

/// Search parameters echoed back so the listing view can rebuild its filter form
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseSearchDto {
    pub name: Option<String>,
    pub category_ids: Vec<i32>,
}

/// The catalog listing view
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseListDto {
    pub courses: Vec<CourseDto>,
    /// All categories, for building the filter UI
    pub categories: Vec<CategoryDto>,
    pub pagination: PaginationDto,
    pub search: CourseSearchDto,
    pub notices: Vec<FlashDto>,
}

/// The course creation form view: choices for the category and author pickers
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewCourseFormDto {
    pub categories: Vec<CategoryDto>,
    pub users: Vec<UserDto>,
}

/// The course detail view
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseDetailDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub author_id: i32,
    pub short_desc: String,
    pub full_desc: String,
    pub background_image_id: Option<String>,
    pub rating: f64,
    pub rating_num: i32,
    /// Every review for the course, newest first
    pub reviews: Vec<ReviewDto>,
    /// The five most recent reviews, for the detail page summary block
    pub recent_reviews: Vec<ReviewDto>,
    /// Whether the current viewer already reviewed this course;
    /// `None` when nobody is logged in
    pub viewer_has_reviewed: Option<bool>,
    pub notices: Vec<FlashDto>,
}
