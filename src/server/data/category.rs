use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category, for filter choices and the creation form
    pub async fn all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find().all(self.db).await
    }
}
