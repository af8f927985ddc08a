use std::sync::Arc;

use crate::error::AppError;
use crate::models::Leave;

use super::KeyValueStore;

pub const DEFAULT_STORAGE_KEY: &str = "leaves";

/// The full persisted leave set, stored as one JSON array under `key`.
#[derive(Clone)]
pub struct LeaveStorage {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl LeaveStorage {
    pub fn new(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn with_default_key(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::new(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads every persisted record. An unwritten key is an empty set; a value
    /// that does not parse is an error rather than an implicit reset.
    pub async fn load(&self) -> Result<Vec<Leave>, AppError> {
        let Some(raw) = self.backend.get_item(&self.key).await? else {
            tracing::debug!(key = %self.key, "No persisted leaves yet");
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let leaves: Vec<Leave> = serde_json::from_str(&raw).map_err(|err| {
            tracing::error!(key = %self.key, error = %err, "Persisted leaves are malformed");
            AppError::Parse(err)
        })?;
        tracing::debug!(key = %self.key, count = leaves.len(), "Loaded persisted leaves");
        Ok(leaves)
    }

    pub async fn save(&self, leaves: &[Leave]) -> Result<(), AppError> {
        let raw = serde_json::to_string(leaves)?;
        self.backend.set_item(&self.key, &raw).await?;
        tracing::debug!(key = %self.key, count = leaves.len(), "Saved leaves");
        Ok(())
    }
}
