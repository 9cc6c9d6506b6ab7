//! Mapping from database models to view DTOs.

use crate::{
    model::{
        course::{CategoryDto, CourseDto, UserDto},
        review::{ReviewDto, ReviewerDto},
    },
    server::{
        error::Error,
        model::db::{CategoryModel, CourseModel, ReviewModel, UserModel},
        service::review::average_rating,
    },
};

pub fn category_dto(category: &CategoryModel) -> CategoryDto {
    CategoryDto {
        id: category.id,
        name: category.name.clone(),
    }
}

pub fn user_dto(user: &UserModel) -> UserDto {
    UserDto {
        id: user.id,
        login: user.login.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    }
}

pub fn course_dto(course: &CourseModel) -> CourseDto {
    CourseDto {
        id: course.id,
        name: course.name.clone(),
        category_id: course.category_id,
        author_id: course.author_id,
        short_desc: course.short_desc.clone(),
        background_image_id: course.background_image_id.clone(),
        rating: average_rating(course),
        rating_num: course.rating_num,
    }
}

/// Maps a review joined with its reviewer.
///
/// A missing reviewer would mean the user foreign key is not being enforced.
pub fn review_dto(
    review: ReviewModel,
    reviewer: Option<UserModel>,
) -> Result<ReviewDto, Error> {
    let reviewer = reviewer.ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to find reviewer for review ID {} with user ID {}",
            review.id, review.user_id
        ))
    })?;

    Ok(ReviewDto {
        id: review.id,
        rating: review.rating,
        text: review.text,
        created_at: review.created_at,
        reviewer: ReviewerDto {
            login: reviewer.login,
            first_name: reviewer.first_name,
            last_name: reviewer.last_name,
        },
    })
}
