#![allow(dead_code)]
use std::sync::Arc;

use chrono::NaiveDate;
use leave_calendar_backend::{
    repositories::LeaveRepository,
    storage::{FileKeyValueStore, LeaveStorage},
};
use tempfile::TempDir;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// File-backed repository rooted in a fresh temporary directory. Keep the
/// returned `TempDir` alive for as long as the repository is used.
pub fn file_repository() -> (TempDir, LeaveRepository) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = open_repository(&dir);
    (dir, repo)
}

pub fn open_repository(dir: &TempDir) -> LeaveRepository {
    let backend = Arc::new(FileKeyValueStore::new(dir.path()));
    LeaveRepository::new(LeaveStorage::with_default_key(backend))
}
