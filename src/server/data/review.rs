use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

/// Sort modes for the reviews listing.
///
/// Unknown query-string values fall back to [`ReviewSort::New`] so a
/// hand-edited URL still renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewSort {
    /// Newest first
    New,
    /// Highest rating first
    Positive,
    /// Lowest rating first
    Negative,
}

impl ReviewSort {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("positive") => ReviewSort::Positive,
            Some("negative") => ReviewSort::Negative,
            _ => ReviewSort::New,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSort::New => "new",
            ReviewSort::Positive => "positive",
            ReviewSort::Negative => "negative",
        }
    }
}

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review and applies its rating to the course aggregates.
    ///
    /// The duplicate pre-check, the insert, and the aggregate increment run
    /// in one transaction, and the increment is a single conditional update,
    /// so `rating_num` always equals the count of review rows for the course
    /// even under concurrent submissions.
    ///
    /// Returns `None` without any state change when the user already has a
    /// review for this course.
    pub async fn submit(
        &self,
        course_id: i32,
        user_id: i32,
        rating: i32,
        text: String,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::Review::find()
            .filter(entity::review::Column::CourseId.eq(course_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .one(&txn)
            .await?;

        if existing.is_some() {
            txn.rollback().await?;
            return Ok(None);
        }

        let review = entity::review::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            user_id: ActiveValue::Set(user_id),
            rating: ActiveValue::Set(rating),
            text: ActiveValue::Set(text),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::prelude::Course::update_many()
            .col_expr(
                entity::course::Column::RatingSum,
                Expr::col(entity::course::Column::RatingSum).add(rating),
            )
            .col_expr(
                entity::course::Column::RatingNum,
                Expr::col(entity::course::Column::RatingNum).add(1),
            )
            .filter(entity::course::Column::Id.eq(course_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(review))
    }

    /// Gets the review a user left for a course, if any
    pub async fn find_by_course_and_user(
        &self,
        course_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::CourseId.eq(course_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets every review for a course, newest first, with reviewer display fields
    pub async fn all_by_course(
        &self,
        course_id: i32,
    ) -> Result<Vec<(entity::review::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::CourseId.eq(course_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets the most recent reviews for a course, with reviewer display fields
    pub async fn recent_by_course(
        &self,
        course_id: i32,
        limit: u64,
    ) -> Result<Vec<(entity::review::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::CourseId.eq(course_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::review::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets one page of a course's reviews in the given sort order, joined
    /// with reviewer display fields.
    ///
    /// A page past the end of the result set yields an empty slice.
    pub async fn page_by_course(
        &self,
        course_id: i32,
        sort: ReviewSort,
        page: u64,
        per_page: u64,
    ) -> Result<
        (
            Vec<(entity::review::Model, Option<entity::user::Model>)>,
            ItemsAndPagesNumber,
        ),
        DbErr,
    > {
        let select = entity::prelude::Review::find()
            .filter(entity::review::Column::CourseId.eq(course_id))
            .find_also_related(entity::prelude::User);

        let select = match sort {
            ReviewSort::New => select.order_by_desc(entity::review::Column::CreatedAt),
            ReviewSort::Positive => select.order_by_desc(entity::review::Column::Rating),
            ReviewSort::Negative => select.order_by_asc(entity::review::Column::Rating),
        };

        let paginator = select.paginate(self.db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let reviews = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((reviews, totals))
    }
}
