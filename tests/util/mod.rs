//! Test utilities for building an AppState backed by an in-memory database
//! and a throwaway image directory.

use coursehub::server::{model::app::AppState, service::image::ImageStore};
use coursehub_test_utils::prelude::*;
use uuid::Uuid;

/// Extension trait for TestSetup to create an AppState for handler tests
pub trait TestSetupExt {
    fn to_app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn to_app_state(&self) -> AppState {
        let upload_dir =
            std::env::temp_dir().join(format!("coursehub-test-images-{}", Uuid::new_v4()));

        AppState {
            db: self.state.db.clone(),
            images: ImageStore::new(upload_dir),
        }
    }
}

/// Deserializes a handler's JSON response body
pub async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
