//! Tests for the list_reviews endpoint.
//!
//! Verifies review pagination, the three sort orders, the fallback for
//! unknown sort parameters, and the 404 for unknown courses.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use coursehub::{
    model::review::ReviewListDto,
    server::controller::review::{list_reviews, ReviewListParams},
};
use sea_orm::DatabaseConnection;

use super::*;
use crate::util::read_json;

fn params(page: Option<&str>, sort_by: Option<&str>) -> ReviewListParams {
    ReviewListParams {
        page: page.map(str::to_string),
        sort_by: sort_by.map(str::to_string),
    }
}

/// Creates a course and one review per rating, each a minute apart
async fn seed_reviews(
    db: &DatabaseConnection,
    ratings: &[i32],
) -> Result<entity::course::Model, TestError> {
    let category = factory::create_category(db, "Programming").await?;
    let author = factory::create_user(db, "ada", "Ada", "Lovelace").await?;
    let course = factory::create_course(db, "Rust Basics", category.id, author.id).await?;

    let base = Utc::now().naive_utc();
    for (i, rating) in ratings.iter().enumerate() {
        let reviewer =
            factory::create_user(db, &format!("user{}", i), "User", &format!("{}", i)).await?;

        factory::create_review(
            db,
            course.id,
            reviewer.id,
            *rating,
            &format!("Review {}", i),
            base + Duration::minutes(i as i64),
        )
        .await?;
    }

    Ok(course)
}

/// Expect 200 with the first page of five reviews, newest first
#[tokio::test]
async fn success_with_default_sort() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let course = seed_reviews(db, &[1, 2, 3, 4, 5, 0, 2]).await?;

    let result = list_reviews(
        State(test.to_app_state()),
        test.session.clone(),
        Path(course.id),
        Query(params(None, None)),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let dto: ReviewListDto = read_json(response).await;
    assert_eq!(dto.reviews.len(), 5);
    assert_eq!(dto.sort_by, "new");
    assert_eq!(dto.pagination.total_items, 7);
    assert_eq!(dto.pagination.total_pages, 2);

    // Newest first: the last seeded review comes first
    assert_eq!(dto.reviews[0].text, "Review 6");
    for pair in dto.reviews.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    Ok(())
}

/// Expect positive sort to order by rating descending
#[tokio::test]
async fn success_with_positive_sort() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let course = seed_reviews(db, &[1, 5, 3]).await?;

    let result = list_reviews(
        State(test.to_app_state()),
        test.session.clone(),
        Path(course.id),
        Query(params(None, Some("positive"))),
    )
    .await;

    let dto: ReviewListDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(dto.sort_by, "positive");

    let ratings: Vec<i32> = dto.reviews.iter().map(|review| review.rating).collect();
    assert_eq!(ratings, vec![5, 3, 1]);

    Ok(())
}

/// Expect negative sort to order by rating ascending
#[tokio::test]
async fn success_with_negative_sort() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let course = seed_reviews(db, &[1, 5, 3]).await?;

    let result = list_reviews(
        State(test.to_app_state()),
        test.session.clone(),
        Path(course.id),
        Query(params(None, Some("negative"))),
    )
    .await;

    let dto: ReviewListDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(dto.sort_by, "negative");

    let ratings: Vec<i32> = dto.reviews.iter().map(|review| review.rating).collect();
    assert_eq!(ratings, vec![1, 3, 5]);

    Ok(())
}

/// Expect an unknown sort parameter to fall back to newest first
#[tokio::test]
async fn success_with_unknown_sort_parameter() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let course = seed_reviews(db, &[4, 2]).await?;

    let result = list_reviews(
        State(test.to_app_state()),
        test.session.clone(),
        Path(course.id),
        Query(params(None, Some("oldest"))),
    )
    .await;

    let dto: ReviewListDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(dto.sort_by, "new");
    assert_eq!(dto.reviews[0].text, "Review 1");

    Ok(())
}

/// Expect the second page to carry the remaining reviews
#[tokio::test]
async fn success_with_second_page() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let course = seed_reviews(db, &[1, 2, 3, 4, 5, 0, 2]).await?;

    let result = list_reviews(
        State(test.to_app_state()),
        test.session.clone(),
        Path(course.id),
        Query(params(Some("2"), None)),
    )
    .await;

    let dto: ReviewListDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(dto.reviews.len(), 2);
    assert_eq!(dto.pagination.page, 2);
    assert!(dto.pagination.has_prev);
    assert!(!dto.pagination.has_next);

    Ok(())
}

/// Expect 404 for an unknown course ID
#[tokio::test]
async fn not_found_for_unknown_course() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = list_reviews(
        State(test.to_app_state()),
        test.session.clone(),
        Path(42),
        Query(params(None, None)),
    )
    .await;

    let response = result.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
