//! Factory functions for inserting catalog fixture rows.
//!
//! Fixtures insert directly through entity active models so that tests for
//! repositories and services exercise their own query paths rather than each
//! other.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn create_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::category::Model, TestError> {
    let category = entity::category::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    };

    Ok(category.insert(db).await?)
}

pub async fn create_user(
    db: &DatabaseConnection,
    login: &str,
    first_name: &str,
    last_name: &str,
) -> Result<entity::user::Model, TestError> {
    let user = entity::user::ActiveModel {
        login: ActiveValue::Set(login.to_string()),
        first_name: ActiveValue::Set(first_name.to_string()),
        last_name: ActiveValue::Set(last_name.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

pub async fn create_course(
    db: &DatabaseConnection,
    name: &str,
    category_id: i32,
    author_id: i32,
) -> Result<entity::course::Model, TestError> {
    let course = entity::course::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        category_id: ActiveValue::Set(category_id),
        author_id: ActiveValue::Set(author_id),
        short_desc: ActiveValue::Set(format!("{} in brief", name)),
        full_desc: ActiveValue::Set(format!("{} in full", name)),
        background_image_id: ActiveValue::Set(None),
        rating_sum: ActiveValue::Set(0),
        rating_num: ActiveValue::Set(0),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(course.insert(db).await?)
}

/// Inserts a review row only; course aggregates are left untouched so that
/// the transactional submit path stays the single writer of those fields.
pub async fn create_review(
    db: &DatabaseConnection,
    course_id: i32,
    user_id: i32,
    rating: i32,
    text: &str,
    created_at: NaiveDateTime,
) -> Result<entity::review::Model, TestError> {
    let review = entity::review::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        user_id: ActiveValue::Set(user_id),
        rating: ActiveValue::Set(rating),
        text: ActiveValue::Set(text.to_string()),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    };

    Ok(review.insert(db).await?)
}
