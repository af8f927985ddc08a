//! Leave store: the month being viewed and the leaves shown for it.
//!
//! Every mutation publishes a [`LeaveSnapshot`] on a watch channel so a UI
//! can re-render without holding a reference to the store.

use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;
use leave_calendar_backend::error::AppError;
use leave_calendar_backend::models::{Leave, LeaveRequest};
use leave_calendar_backend::repositories::LeaveRepositoryTrait;
use leave_calendar_backend::utils::time::{
    add_months, first_of_month, format_month, next_month, previous_month, today_local,
};
use leave_calendar_backend::validation::Validate;
use serde::Serialize;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSnapshot {
    pub current_month: NaiveDate,
    pub leaves: Vec<Leave>,
    pub version: u64,
}

pub struct LeaveStore {
    repository: Arc<dyn LeaveRepositoryTrait>,
    current_month: NaiveDate,
    leaves: Vec<Leave>,
    version: u64,
    notifier: watch::Sender<LeaveSnapshot>,
}

impl LeaveStore {
    pub fn new(repository: Arc<dyn LeaveRepositoryTrait>, month: NaiveDate) -> Self {
        let current_month = first_of_month(month);
        let (notifier, _) = watch::channel(LeaveSnapshot {
            current_month,
            leaves: Vec::new(),
            version: 0,
        });
        Self {
            repository,
            current_month,
            leaves: Vec::new(),
            version: 0,
            notifier,
        }
    }

    /// Starts at the current month in `tz`.
    pub fn starting_today(repository: Arc<dyn LeaveRepositoryTrait>, tz: &Tz) -> Self {
        Self::new(repository, today_local(tz))
    }

    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn leaves(&self) -> &[Leave] {
        &self.leaves
    }

    pub fn snapshot(&self) -> LeaveSnapshot {
        self.notifier.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LeaveSnapshot> {
        self.notifier.subscribe()
    }

    /// Replaces the list with the repository's records for the current month.
    /// On error the previous list is kept.
    pub async fn get_leaves(&mut self) -> Result<&[Leave], AppError> {
        let leaves = self.repository.get_leaves(self.current_month).await?;
        tracing::debug!(
            month = %format_month(self.current_month),
            count = leaves.len(),
            "Loaded leaves into store"
        );
        self.leaves = leaves;
        self.publish();
        Ok(&self.leaves)
    }

    pub async fn next_month(&mut self) -> Result<(), AppError> {
        self.move_to(next_month(self.current_month)).await
    }

    pub async fn previous_month(&mut self) -> Result<(), AppError> {
        self.move_to(previous_month(self.current_month)).await
    }

    /// Jumps to the month containing `month`.
    pub async fn goto(&mut self, month: NaiveDate) -> Result<(), AppError> {
        self.move_to(first_of_month(month)).await
    }

    /// Moves `delta` months away from the current one.
    pub async fn shift(&mut self, delta: i32) -> Result<(), AppError> {
        self.move_to(add_months(self.current_month, delta)).await
    }

    async fn move_to(&mut self, month: NaiveDate) -> Result<(), AppError> {
        self.current_month = month;
        self.publish();
        self.get_leaves().await?;
        Ok(())
    }

    /// Creates a leave through the repository and appends it to the list.
    ///
    /// The request is validated before anything is sent or mutated.
    pub async fn add_leave(&mut self, request: LeaveRequest) -> Result<Leave, AppError> {
        request.validate()?;
        let leave = self.repository.add_leave(request).await?;
        self.leaves.push(leave.clone());
        self.publish();
        Ok(leave)
    }

    fn publish(&mut self) {
        self.version += 1;
        self.notifier.send_replace(LeaveSnapshot {
            current_month: self.current_month,
            leaves: self.leaves.clone(),
            version: self.version,
        });
    }
}
