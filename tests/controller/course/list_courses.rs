//! Tests for the list_courses endpoint.
//!
//! Verifies pagination over the catalog, the name and category filters,
//! lenient page parameter handling, and the drain of pending flash notices
//! into the rendered view.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::Query;
use coursehub::{
    model::course::CourseListDto,
    server::{
        controller::course::{list_courses, CourseSearchParams},
        model::session::flash::{FlashMessage, FlashSeverity},
    },
};

use super::*;
use crate::util::read_json;

fn params(page: Option<&str>, name: Option<&str>, category_ids: Vec<i32>) -> CourseSearchParams {
    CourseSearchParams {
        page: page.map(str::to_string),
        name: name.map(str::to_string),
        category_ids,
    }
}

/// Expect 200 with the first page of three courses and pagination metadata
#[tokio::test]
async fn success_with_first_page() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let category = factory::create_category(db, "Programming").await?;
    let author = factory::create_user(db, "ada", "Ada", "Lovelace").await?;
    for i in 0..7 {
        factory::create_course(db, &format!("Course {}", i), category.id, author.id).await?;
    }

    let result = list_courses(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params(None, None, vec![])),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let dto: CourseListDto = read_json(response).await;
    assert_eq!(dto.courses.len(), 3);
    assert_eq!(dto.pagination.page, 1);
    assert_eq!(dto.pagination.total_items, 7);
    assert_eq!(dto.pagination.total_pages, 3);
    assert!(!dto.pagination.has_prev);
    assert!(dto.pagination.has_next);

    Ok(())
}

/// Expect the last page to carry the single remaining course
#[tokio::test]
async fn success_with_last_page() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let category = factory::create_category(db, "Programming").await?;
    let author = factory::create_user(db, "ada", "Ada", "Lovelace").await?;
    for i in 0..7 {
        factory::create_course(db, &format!("Course {}", i), category.id, author.id).await?;
    }

    let result = list_courses(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params(Some("3"), None, vec![])),
    )
    .await;

    let response = result.unwrap().into_response();
    let dto: CourseListDto = read_json(response).await;

    assert_eq!(dto.courses.len(), 1);
    assert!(dto.pagination.has_prev);
    assert!(!dto.pagination.has_next);

    Ok(())
}

/// Expect a page past the end to yield an empty listing, not an error
#[tokio::test]
async fn success_with_page_past_end() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let category = factory::create_category(db, "Programming").await?;
    let author = factory::create_user(db, "ada", "Ada", "Lovelace").await?;
    factory::create_course(db, "Rust Basics", category.id, author.id).await?;

    let result = list_courses(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params(Some("50"), None, vec![])),
    )
    .await;

    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let dto: CourseListDto = read_json(response).await;
    assert!(dto.courses.is_empty());
    assert_eq!(dto.pagination.total_items, 1);

    Ok(())
}

/// Expect a non-numeric page parameter to fall back to page 1
#[tokio::test]
async fn success_with_invalid_page_parameter() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let category = factory::create_category(db, "Programming").await?;
    let author = factory::create_user(db, "ada", "Ada", "Lovelace").await?;
    factory::create_course(db, "Rust Basics", category.id, author.id).await?;

    let result = list_courses(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params(Some("abc"), None, vec![])),
    )
    .await;

    let response = result.unwrap().into_response();
    let dto: CourseListDto = read_json(response).await;

    assert_eq!(dto.pagination.page, 1);
    assert_eq!(dto.courses.len(), 1);

    Ok(())
}

/// Expect the name and category filters to combine as an AND
#[tokio::test]
async fn success_with_combined_filters() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let db = &test.state.db;

    let programming = factory::create_category(db, "Programming").await?;
    let design = factory::create_category(db, "Design").await?;
    let author = factory::create_user(db, "ada", "Ada", "Lovelace").await?;

    factory::create_course(db, "Rust Basics", programming.id, author.id).await?;
    factory::create_course(db, "Rust for Designers", design.id, author.id).await?;
    factory::create_course(db, "Typography", design.id, author.id).await?;

    let result = list_courses(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params(None, Some("RUST"), vec![design.id])),
    )
    .await;

    let response = result.unwrap().into_response();
    let dto: CourseListDto = read_json(response).await;

    assert_eq!(dto.courses.len(), 1);
    assert_eq!(dto.courses[0].name, "Rust for Designers");
    assert_eq!(dto.search.name.as_deref(), Some("RUST"));
    assert_eq!(dto.search.category_ids, vec![design.id]);

    Ok(())
}

/// Expect pending flash notices to be drained into the listing exactly once
#[tokio::test]
async fn success_drains_flash_notices() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    FlashMessage::push(
        &test.session,
        FlashSeverity::Success,
        "Course Rust Basics was successfully added!",
    )
    .await
    .unwrap();

    let result = list_courses(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params(None, None, vec![])),
    )
    .await;

    let dto: CourseListDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(dto.notices.len(), 1);
    assert_eq!(dto.notices[0].severity, "success");
    assert_eq!(
        dto.notices[0].message,
        "Course Rust Basics was successfully added!"
    );

    let result = list_courses(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params(None, None, vec![])),
    )
    .await;

    let dto: CourseListDto = read_json(result.unwrap().into_response()).await;
    assert!(dto.notices.is_empty());

    Ok(())
}
