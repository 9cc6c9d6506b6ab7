use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository,
        course::{CourseRepository, NewCourse},
        user::UserRepository,
    },
    error::Error,
    model::{
        db::{CategoryModel, CourseModel, UserModel},
        page::Pagination,
    },
};

/// Search filters for the catalog listing. Both filters are optional and
/// combine as a logical AND.
#[derive(Clone, Default)]
pub struct CourseSearch {
    pub name: Option<String>,
    pub category_ids: Vec<i32>,
}

/// One page of the catalog listing plus everything the view needs to build
/// its filter UI.
pub struct CourseListing {
    pub courses: Vec<CourseModel>,
    pub categories: Vec<CategoryModel>,
    pub pagination: Pagination,
}

/// Service for catalog browsing and course creation.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of courses matching the search filters along with the
    /// full category list
    pub async fn list(
        &self,
        search: &CourseSearch,
        page: u64,
        per_page: u64,
    ) -> Result<CourseListing, Error> {
        let course_repository = CourseRepository::new(self.db);
        let category_repository = CategoryRepository::new(self.db);

        let (courses, totals) = course_repository
            .search_page(search.name.as_deref(), &search.category_ids, page, per_page)
            .await?;

        let categories = category_repository.all().await?;

        Ok(CourseListing {
            courses,
            categories,
            pagination: Pagination::new(page, per_page, totals),
        })
    }

    /// Gets the choices for the creation form's category and author pickers
    pub async fn creation_choices(
        &self,
    ) -> Result<(Vec<CategoryModel>, Vec<UserModel>), Error> {
        let categories = CategoryRepository::new(self.db).all().await?;
        let users = UserRepository::new(self.db).all().await?;

        Ok((categories, users))
    }

    /// Creates a new course
    pub async fn create(&self, new_course: NewCourse) -> Result<CourseModel, Error> {
        let course = CourseRepository::new(self.db).create(new_course).await?;

        Ok(course)
    }

    /// Gets a course by ID, failing with [`Error::CourseNotFound`] when absent
    pub async fn get_course(&self, course_id: i32) -> Result<CourseModel, Error> {
        CourseRepository::new(self.db)
            .get_by_id(course_id)
            .await?
            .ok_or(Error::CourseNotFound(course_id))
    }
}
