use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::server::error::Error;

/// File-backed store for uploaded course background images.
///
/// Files are written under the configured root with a generated identifier;
/// callers persist the identifier on the course row.
#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persists uploaded bytes and returns the generated identifier.
    ///
    /// The original filename only contributes its extension.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, Error> {
        let id = match Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&id), bytes).await?;

        Ok(id)
    }
}
