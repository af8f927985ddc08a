//! Key/value persistence backends.
//!
//! Modeled on browser local storage: string values addressed by a string key.
//! [`LeaveStorage`] layers the leave JSON array on top of a single key.

pub mod file;
pub mod leave_storage;
pub mod memory;

use async_trait::async_trait;

use crate::error::AppError;

pub use file::FileKeyValueStore;
pub use leave_storage::{LeaveStorage, DEFAULT_STORAGE_KEY};
pub use memory::MemoryKeyValueStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never written.
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Rejects keys that could escape a storage directory.
pub(crate) fn check_key(key: &str) -> Result<(), AppError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("invalid storage key: {key:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_key_accepts_plain_names() {
        assert!(check_key("leaves").is_ok());
        assert!(check_key("leaves-v2.backup").is_ok());
    }

    #[test]
    fn check_key_rejects_paths() {
        assert!(check_key("").is_err());
        assert!(check_key("../leaves").is_err());
        assert!(check_key("a/b").is_err());
        assert!(check_key(".hidden").is_err());
    }
}
