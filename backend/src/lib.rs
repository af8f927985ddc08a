pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;
pub mod models;
pub mod repositories;
pub mod storage;
pub mod types;
pub mod utils;
pub mod validation;
