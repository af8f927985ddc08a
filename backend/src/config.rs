use anyhow::anyhow;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::repositories::{Latency, LeaveRepository};
use crate::storage::{
    FileKeyValueStore, KeyValueStore, LeaveStorage, MemoryKeyValueStore, DEFAULT_STORAGE_KEY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    File,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!("Invalid LEAVES_STORAGE_BACKEND value: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub create_delay_ms: u64,
    pub default_user_id: String,
    pub time_zone: Tz,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let storage_backend = env::var("LEAVES_STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .parse()?;

        let storage_dir =
            PathBuf::from(env::var("LEAVES_STORAGE_DIR").unwrap_or_else(|_| "./data".to_string()));

        let storage_key =
            env::var("LEAVES_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());

        let create_delay_ms = env::var("LEAVES_CREATE_DELAY_MS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .unwrap_or(0);

        let default_user_id =
            env::var("LEAVES_DEFAULT_USER").unwrap_or_else(|_| "me".to_string());

        let time_zone_name = env::var("APP_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        Ok(Config {
            storage_backend,
            storage_dir,
            storage_key,
            create_delay_ms,
            default_user_id,
            time_zone,
        })
    }

    pub fn key_value_store(&self) -> Arc<dyn KeyValueStore> {
        match self.storage_backend {
            StorageBackend::File => Arc::new(FileKeyValueStore::new(&self.storage_dir)),
            StorageBackend::Memory => Arc::new(MemoryKeyValueStore::new()),
        }
    }

    /// Builds the storage-backed repository described by this configuration.
    pub fn leave_repository(&self) -> LeaveRepository {
        let storage = LeaveStorage::new(self.key_value_store(), self.storage_key.clone());
        LeaveRepository::new(storage).with_latency(Latency::from_millis(self.create_delay_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::File,
            storage_dir: PathBuf::from("./data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            create_delay_ms: 0,
            default_user_id: "me".to_string(),
            time_zone: chrono_tz::UTC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_backend_parses_case_insensitively() {
        assert_eq!("File".parse::<StorageBackend>().unwrap(), StorageBackend::File);
        assert_eq!(" memory ".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn default_config_uses_file_storage() {
        let config = Config::default();
        assert_eq!(config.storage_backend, StorageBackend::File);
        assert_eq!(config.storage_key, "leaves");
        assert_eq!(config.time_zone, chrono_tz::UTC);
    }

    #[tokio::test]
    async fn memory_config_builds_working_repository() {
        use crate::models::LeaveRequest;
        use crate::repositories::LeaveRepositoryTrait;
        use chrono::NaiveDate;

        let config = Config {
            storage_backend: StorageBackend::Memory,
            ..Config::default()
        };
        let repo = config.leave_repository();
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        repo.add_leave(LeaveRequest::time_off("me", day, 8.0)).await.unwrap();
        assert_eq!(repo.get_leaves(day).await.unwrap().len(), 1);
        assert_eq!(repo.storage().key(), "leaves");
    }
}
