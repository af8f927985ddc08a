use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::leave::LeaveType;
use crate::validation::rules::{validate_leave_dates, validate_leave_hours, validate_user_id};

/// Input for creating a leave record.
///
/// Identifier, status and creation time are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_request_dates"))]
pub struct LeaveRequest {
    #[validate(length(min = 1, max = 64), custom(function = "validate_user_id"))]
    pub user_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_leave_hours"))]
    pub hours: Option<f64>,
}

impl LeaveRequest {
    pub fn vacation(user_id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            leave_type: LeaveType::Vacation,
            start_date: Some(start_date),
            end_date: Some(end_date),
            date: None,
            hours: None,
        }
    }

    pub fn time_off(user_id: impl Into<String>, date: NaiveDate, hours: f64) -> Self {
        Self {
            user_id: user_id.into(),
            leave_type: LeaveType::TimeOff,
            start_date: None,
            end_date: None,
            date: Some(date),
            hours: Some(hours),
        }
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = Some(hours);
        self
    }
}

fn validate_request_dates(request: &LeaveRequest) -> Result<(), ValidationError> {
    validate_leave_dates(
        request.leave_type,
        request.start_date,
        request.end_date,
        request.date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn vacation_request_validates() {
        let request = LeaveRequest::vacation("user-11", ymd(2025, 1, 1), ymd(2025, 1, 2)).with_hours(8.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn time_off_request_validates() {
        let request = LeaveRequest::time_off("user_3", ymd(2025, 1, 9), 3.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn rejects_empty_user() {
        let request = LeaveRequest::vacation("", ymd(2025, 1, 1), ymd(2025, 1, 2));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
    }

    #[test]
    fn rejects_hours_out_of_range() {
        let request = LeaveRequest::time_off("user-1", ymd(2025, 1, 9), 30.0);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("hours"));
    }

    #[test]
    fn rejects_nan_hours() {
        let request = LeaveRequest::time_off("user-1", ymd(2025, 1, 9), f64::NAN);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("hours"));
    }

    #[test]
    fn rejects_vacation_without_range() {
        let mut request = LeaveRequest::vacation("user-1", ymd(2025, 1, 1), ymd(2025, 1, 2));
        request.end_date = None;
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_inverted_range() {
        let request = LeaveRequest::vacation("user-1", ymd(2025, 1, 5), ymd(2025, 1, 2));
        assert!(request.validate().is_err());
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let raw = r#"{"userId":"user-11","type":"vacation","startDate":"2025-01-01","endDate":"2025-01-02","hours":8}"#;
        let request: LeaveRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.user_id, "user-11");
        assert_eq!(request.leave_type, LeaveType::Vacation);
        assert_eq!(request.hours, Some(8.0));
        assert!(request.date.is_none());
    }
}
