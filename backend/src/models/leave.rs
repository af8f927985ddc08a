use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::leave_request::LeaveRequest;
use crate::types::LeaveId;
use crate::utils::time::same_month;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Vacation,
    TimeOff,
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveType::Vacation => write!(f, "vacation"),
            LeaveType::TimeOff => write!(f, "time_off"),
        }
    }
}

impl std::str::FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "vacation" => Ok(LeaveType::Vacation),
            "time_off" => Ok(LeaveType::TimeOff),
            other => Err(format!("unknown leave type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A persisted leave record.
///
/// Serialized with camelCase keys so the stored JSON array stays readable by
/// other clients of the same storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: LeaveId,
    pub user_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Leave {
    /// Builds a pending record from a request.
    ///
    /// A single-day request gets `start_date == end_date == date` so it shows
    /// up in month queries; a ranged request gets `date` set to its start.
    pub fn from_request(request: LeaveRequest, created_at: DateTime<Utc>) -> Self {
        let LeaveRequest {
            user_id,
            leave_type,
            start_date,
            end_date,
            date,
            hours,
        } = request;

        let (start_date, end_date) = match (start_date, end_date, date) {
            (None, None, Some(day)) => (Some(day), Some(day)),
            (Some(start), None, _) => (Some(start), Some(start)),
            (start, end, _) => (start, end),
        };
        let date = date.or(start_date);

        Self {
            id: LeaveId::new(),
            user_id,
            leave_type,
            status: LeaveStatus::Pending,
            start_date,
            end_date,
            date,
            hours,
            created_at,
        }
    }

    /// True when the start or end date lies in the calendar month of `month`.
    ///
    /// `date` is deliberately not consulted.
    pub fn intersects_month(&self, month: NaiveDate) -> bool {
        self.start_date.is_some_and(|start| same_month(start, month))
            || self.end_date.is_some_and(|end| same_month(end, month))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, LeaveStatus::Pending)
    }
}
