//! Synthetic leave data for tests and demos.
//!
//! Compiled only for tests or with the `test-utils` feature; nothing in the
//! library's normal code paths refers to it.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use validator::Validate;

use crate::error::AppError;
use crate::models::{Leave, LeaveRequest, LeaveStatus, LeaveType};
use crate::repositories::LeaveRepositoryTrait;
use crate::types::LeaveId;
use crate::utils::time::month_bounds;

pub const DEFAULT_BATCH: usize = 10;

/// Generates a fresh batch of records for every month query.
///
/// Every generated record starts inside the requested month, so the batch
/// honours the repository contract. Creates are validated and returned but
/// not remembered.
pub struct GeneratedLeaveRepository {
    rng: Mutex<StdRng>,
    batch: usize,
}

impl GeneratedLeaveRepository {
    pub fn new() -> Self {
        Self::seeded(7)
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            batch: DEFAULT_BATCH,
        }
    }

    pub fn with_batch(mut self, batch: usize) -> Self {
        self.batch = batch;
        self
    }

    pub fn generate(&self, month: NaiveDate) -> Result<Vec<Leave>, AppError> {
        let (first, last) = month_bounds(month)
            .ok_or_else(|| AppError::BadRequest(format!("month out of range: {month}")))?;
        let days_in_month = (last - first).num_days() + 1;
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Storage("fixture rng lock poisoned".into()))?;

        let leaves = (0..self.batch)
            .map(|i| {
                let start = first + Duration::days(rng.gen_range(0..days_in_month));
                let end = start + Duration::days(rng.gen_range(0..=3));
                let date = first + Duration::days(i as i64 % days_in_month);
                Leave {
                    id: LeaveId::new(),
                    user_id: format!("user-{}", i + 1),
                    leave_type: if i % 2 == 0 {
                        LeaveType::Vacation
                    } else {
                        LeaveType::TimeOff
                    },
                    status: match i % 3 {
                        0 => LeaveStatus::Approved,
                        1 => LeaveStatus::Pending,
                        _ => LeaveStatus::Rejected,
                    },
                    start_date: Some(start),
                    end_date: Some(end),
                    date: Some(date),
                    hours: Some(if i % 2 == 0 {
                        8.0
                    } else {
                        f64::from(rng.gen_range(1..=7u8))
                    }),
                    created_at: Utc::now(),
                }
            })
            .collect();
        Ok(leaves)
    }
}

impl Default for GeneratedLeaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeaveRepositoryTrait for GeneratedLeaveRepository {
    async fn get_leaves(&self, month: NaiveDate) -> Result<Vec<Leave>, AppError> {
        self.generate(month)
    }

    async fn add_leave(&self, request: LeaveRequest) -> Result<Leave, AppError> {
        request.validate()?;
        Ok(Leave::from_request(request, Utc::now()))
    }
}
