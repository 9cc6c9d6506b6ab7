use sea_orm::DatabaseConnection;

use crate::server::service::image::ImageStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub images: ImageStore,
}
