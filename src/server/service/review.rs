use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, review::ReviewRepository},
    error::Error,
    model::db::CourseModel,
};

pub const MIN_RATING: i32 = 0;
pub const MAX_RATING: i32 = 5;

/// Mean of all submitted ratings for a course.
///
/// Defined as 0 when the course has no ratings yet.
pub fn average_rating(course: &CourseModel) -> f64 {
    if course.rating_num == 0 {
        return 0.0;
    }

    course.rating_sum as f64 / course.rating_num as f64
}

/// Result of a review submission attempt.
///
/// Guard failures are expected outcomes surfaced to the user as notices,
/// not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    NotAuthenticated,
    InvalidRating,
    AlreadyReviewed,
}

/// Service enforcing the review rules: one review per user per course,
/// ratings within range, authenticated viewers only.
pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of [`ReviewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attempts to record a review for the viewer.
    ///
    /// Guards are checked in order: the viewer must be authenticated, the
    /// course must exist, the rating must lie in [0, 5], and the viewer must
    /// not have reviewed the course before. A failed guard produces no state
    /// change.
    pub async fn submit(
        &self,
        course_id: i32,
        viewer: Option<i32>,
        rating: i32,
        text: String,
    ) -> Result<SubmitOutcome, Error> {
        let user_id = match viewer {
            Some(user_id) => user_id,
            None => return Ok(SubmitOutcome::NotAuthenticated),
        };

        let course_repository = CourseRepository::new(self.db);
        if course_repository.get_by_id(course_id).await?.is_none() {
            return Err(Error::CourseNotFound(course_id));
        }

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Ok(SubmitOutcome::InvalidRating);
        }

        let review_repository = ReviewRepository::new(self.db);
        match review_repository
            .submit(course_id, user_id, rating, text)
            .await?
        {
            Some(_) => Ok(SubmitOutcome::Submitted),
            None => Ok(SubmitOutcome::AlreadyReviewed),
        }
    }

    /// Whether the viewer already reviewed this course.
    ///
    /// `None` when nobody is logged in, so views can distinguish "not
    /// applicable" from "not yet reviewed".
    pub async fn viewer_has_reviewed(
        &self,
        course_id: i32,
        viewer: Option<i32>,
    ) -> Result<Option<bool>, Error> {
        match viewer {
            Some(user_id) => {
                let existing = ReviewRepository::new(self.db)
                    .find_by_course_and_user(course_id, user_id)
                    .await?;

                Ok(Some(existing.is_some()))
            }
            None => Ok(None),
        }
    }
}
