use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{check_key, KeyValueStore};
use crate::error::AppError;

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key, e.g. to simulate data written by another client.
    pub fn with_item(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut items) = self.items.write() {
            items.insert(key.into(), value.into());
        }
        self
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        check_key(key)?;
        let items = self
            .items
            .read()
            .map_err(|_| AppError::Storage("memory store lock poisoned".into()))?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        check_key(key)?;
        let mut items = self
            .items
            .write()
            .map_err(|_| AppError::Storage("memory store lock poisoned".into()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_none() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get_item("leaves").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_returns_latest_value() {
        let store = MemoryKeyValueStore::new();
        store.set_item("leaves", "[]").await.unwrap();
        store.set_item("leaves", "[1]").await.unwrap();
        assert_eq!(store.get_item("leaves").await.unwrap().as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn with_item_prepopulates() {
        let store = MemoryKeyValueStore::new().with_item("leaves", "[]");
        assert_eq!(store.get_item("leaves").await.unwrap().as_deref(), Some("[]"));
    }
}
