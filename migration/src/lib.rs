pub use sea_orm_migration::prelude::*;

mod m20260815_000001_category;
mod m20260815_000002_user;
mod m20260815_000003_course;
mod m20260815_000004_review;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_category::Migration),
            Box::new(m20260815_000002_user::Migration),
            Box::new(m20260815_000003_course::Migration),
            Box::new(m20260815_000004_review::Migration),
        ]
    }
}
