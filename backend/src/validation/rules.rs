//! Validation rules shared by leave request payloads.

use chrono::NaiveDate;
use validator::ValidationError;

use crate::models::leave::LeaveType;

/// Validates user id format.
///
/// Requirements:
/// - Only alphanumeric characters, `-` and `_`
/// - 1-64 characters in length
pub fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    if user_id.is_empty() || user_id.len() > 64 {
        return Err(ValidationError::new("user_id_invalid_length"));
    }

    if !user_id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ValidationError::new("user_id_invalid_characters"));
    }

    Ok(())
}

/// Validates that leave hours are within acceptable range.
///
/// Requirements:
/// - Between 0.5 and 24.0 hours
/// - NaN is rejected
pub fn validate_leave_hours(hours: f64) -> Result<(), ValidationError> {
    if !(0.5..=24.0).contains(&hours) {
        return Err(ValidationError::new("leave_hours_out_of_range"));
    }
    Ok(())
}

/// Validates the date shape of a leave request.
///
/// Requirements:
/// - Vacation needs both a start and an end date
/// - Time off needs a single date or a start date
/// - An end date is never before its start date
pub fn validate_leave_dates(
    leave_type: LeaveType,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    date: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match leave_type {
        LeaveType::Vacation => {
            if start_date.is_none() || end_date.is_none() {
                return Err(ValidationError::new("vacation_requires_date_range"));
            }
        }
        LeaveType::TimeOff => {
            if date.is_none() && start_date.is_none() {
                return Err(ValidationError::new("time_off_requires_date"));
            }
        }
    }

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            return Err(ValidationError::new("end_date_before_start_date"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn user_id_rejects_empty() {
        assert!(validate_user_id("").is_err());
    }

    #[test]
    fn user_id_rejects_special_chars() {
        assert!(validate_user_id("user@name").is_err());
        assert!(validate_user_id("user name").is_err());
    }

    #[test]
    fn user_id_rejects_too_long() {
        let long = "u".repeat(65);
        assert!(validate_user_id(&long).is_err());
    }

    #[test]
    fn user_id_accepts_valid() {
        assert!(validate_user_id("user-11").is_ok());
        assert!(validate_user_id("valid_user123").is_ok());
    }

    #[test]
    fn leave_hours_rejects_out_of_range() {
        assert!(validate_leave_hours(0.25).is_err());
        assert!(validate_leave_hours(24.5).is_err());
    }

    #[test]
    fn leave_hours_rejects_nan() {
        let err = validate_leave_hours(f64::NAN).unwrap_err();
        assert_eq!(err.code, "leave_hours_out_of_range");
    }

    #[test]
    fn leave_hours_accepts_valid() {
        assert!(validate_leave_hours(0.5).is_ok());
        assert!(validate_leave_hours(8.0).is_ok());
        assert!(validate_leave_hours(24.0).is_ok());
    }

    #[test]
    fn vacation_requires_both_dates() {
        let err = validate_leave_dates(LeaveType::Vacation, ymd(2025, 1, 1), None, None).unwrap_err();
        assert_eq!(err.code, "vacation_requires_date_range");
    }

    #[test]
    fn time_off_accepts_single_date() {
        assert!(validate_leave_dates(LeaveType::TimeOff, None, None, ymd(2025, 1, 1)).is_ok());
    }

    #[test]
    fn time_off_requires_some_date() {
        let err = validate_leave_dates(LeaveType::TimeOff, None, None, None).unwrap_err();
        assert_eq!(err.code, "time_off_requires_date");
    }

    #[test]
    fn rejects_end_before_start() {
        let err = validate_leave_dates(
            LeaveType::Vacation,
            ymd(2025, 1, 10),
            ymd(2025, 1, 9),
            None,
        )
        .unwrap_err();
        assert_eq!(err.code, "end_date_before_start_date");
    }

    #[test]
    fn accepts_same_day_range() {
        assert!(validate_leave_dates(
            LeaveType::Vacation,
            ymd(2025, 1, 10),
            ymd(2025, 1, 10),
            None
        )
        .is_ok());
    }
}
