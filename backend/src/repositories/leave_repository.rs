//! Leave repository trait and its storage-backed implementation.
//!
//! The trait is the seam between the store and whichever data source is
//! wired in; it can be mocked using mockall for testing purposes.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use validator::Validate;

use crate::error::AppError;
use crate::models::{Leave, LeaveRequest};
use crate::repositories::latency::Latency;
use crate::repositories::leave_index::LeaveIndex;
use crate::storage::LeaveStorage;
use crate::utils::time::{first_of_month, format_month};

/// Repository trait for leave operations.
///
/// This trait is designed to be mockable using mockall for testing.
/// Use `MockLeaveRepositoryTrait` in tests to mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveRepositoryTrait: Send + Sync {
    /// Records whose start or end date falls in the calendar month of `month`
    async fn get_leaves(&self, month: NaiveDate) -> Result<Vec<Leave>, AppError>;

    /// Persist a new pending record built from `request`
    async fn add_leave(&self, request: LeaveRequest) -> Result<Leave, AppError>;
}

struct Loaded {
    leaves: Vec<Leave>,
    index: LeaveIndex,
}

/// Repository backed by [`LeaveStorage`].
///
/// The persisted set is loaded on first use and kept in memory with a month
/// index; creates write the whole set back through storage before the cache
/// is updated.
pub struct LeaveRepository {
    storage: LeaveStorage,
    latency: Latency,
    loaded: Mutex<Option<Loaded>>,
}

impl LeaveRepository {
    pub fn new(storage: LeaveStorage) -> Self {
        Self {
            storage,
            latency: Latency::None,
            loaded: Mutex::new(None),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn storage(&self) -> &LeaveStorage {
        &self.storage
    }

    /// Drops the in-memory copy so the next call re-reads storage.
    pub async fn reload(&self) {
        *self.loaded.lock().await = None;
    }

    async fn ensure_loaded<'a>(
        &self,
        slot: &'a mut Option<Loaded>,
    ) -> Result<&'a mut Loaded, AppError> {
        if slot.is_none() {
            let leaves = self.storage.load().await?;
            let index = LeaveIndex::build(&leaves);
            *slot = Some(Loaded { leaves, index });
        }
        slot.as_mut()
            .ok_or_else(|| AppError::Storage("leave cache unavailable".into()))
    }
}

#[async_trait]
impl LeaveRepositoryTrait for LeaveRepository {
    async fn get_leaves(&self, month: NaiveDate) -> Result<Vec<Leave>, AppError> {
        let month = first_of_month(month);
        let mut slot = self.loaded.lock().await;
        let loaded = self.ensure_loaded(&mut slot).await?;
        let leaves: Vec<Leave> = loaded
            .index
            .select(&loaded.leaves, month)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(
            month = %format_month(month),
            count = leaves.len(),
            total = loaded.leaves.len(),
            "Fetched leaves for month"
        );
        Ok(leaves)
    }

    async fn add_leave(&self, request: LeaveRequest) -> Result<Leave, AppError> {
        if let Err(errors) = request.validate() {
            tracing::warn!(user_id = %request.user_id, "Rejected invalid leave request");
            return Err(errors.into());
        }
        let leave = Leave::from_request(request, Utc::now());

        {
            let mut slot = self.loaded.lock().await;
            let loaded = self.ensure_loaded(&mut slot).await?;
            let mut next = loaded.leaves.clone();
            next.push(leave.clone());
            self.storage.save(&next).await?;

            let position = next.len() - 1;
            loaded.index.insert(position, &leave);
            loaded.leaves = next;
        }

        tracing::info!(
            leave_id = %leave.id,
            user_id = %leave.user_id,
            leave_type = %leave.leave_type,
            "Created leave"
        );
        self.latency.wait().await;
        Ok(leave)
    }
}
