use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{course::CourseDto, page::PaginationDto};

/// Display fields of the user who wrote a review
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewerDto {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub rating: i32,
    pub text: String,
    pub created_at: NaiveDateTime,
    pub reviewer: ReviewerDto,
}

/// The sorted, paginated reviews view for one course
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewListDto {
    pub course: CourseDto,
    pub reviews: Vec<ReviewDto>,
    pub pagination: PaginationDto,
    /// The sort mode actually applied: `new`, `positive`, or `negative`
    pub sort_by: String,
    /// `None` when nobody is logged in
    pub has_reviewed: Option<bool>,
}
