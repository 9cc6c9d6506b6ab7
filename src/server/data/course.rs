use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, ItemsAndPagesNumber, PaginatorTrait, QueryFilter,
};

/// Fields required to insert a course.
///
/// `background_image_id` is optional; courses without an uploaded image are
/// valid.
pub struct NewCourse {
    pub name: String,
    pub category_id: i32,
    pub author_id: i32,
    pub short_desc: String,
    pub full_desc: String,
    pub background_image_id: Option<String>,
}

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    /// Creates a new instance of [`CourseRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course with zeroed rating aggregates
    pub async fn create(&self, new_course: NewCourse) -> Result<entity::course::Model, DbErr> {
        let course = entity::course::ActiveModel {
            name: ActiveValue::Set(new_course.name),
            category_id: ActiveValue::Set(new_course.category_id),
            author_id: ActiveValue::Set(new_course.author_id),
            short_desc: ActiveValue::Set(new_course.short_desc),
            full_desc: ActiveValue::Set(new_course.full_desc),
            background_image_id: ActiveValue::Set(new_course.background_image_id),
            rating_sum: ActiveValue::Set(0),
            rating_num: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        course.insert(self.db).await
    }

    /// Gets a course by its ID
    pub async fn get_by_id(&self, course_id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await
    }

    /// Gets one page of courses matching the search filters.
    ///
    /// The name filter is a case-insensitive substring match; the category
    /// filter restricts to the given set when non-empty. Absent filters
    /// impose no restriction, and the two combine as a logical AND. A page
    /// past the end of the result set yields an empty slice.
    pub async fn search_page(
        &self,
        name: Option<&str>,
        category_ids: &[i32],
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::course::Model>, ItemsAndPagesNumber), DbErr> {
        let mut select = entity::prelude::Course::find();

        if let Some(name) = name.filter(|name| !name.is_empty()) {
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(entity::course::Column::Name)))
                    .like(format!("%{}%", name.to_lowercase())),
            );
        }

        if !category_ids.is_empty() {
            select = select.filter(
                entity::course::Column::CategoryId.is_in(category_ids.iter().copied()),
            );
        }

        let paginator = select.paginate(self.db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let courses = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((courses, totals))
    }
}
