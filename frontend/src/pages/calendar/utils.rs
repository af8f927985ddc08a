use chrono::NaiveDate;
use leave_calendar_backend::error::AppError;
use leave_calendar_backend::models::{LeaveRequest, LeaveType};

fn parse_date_input(value: &str, field: &str) -> Result<Option<NaiveDate>, AppError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("{field} must be YYYY-MM-DD")))
}

/// Builds a request from `key=value` pairs.
///
/// Recognized keys: `type`, `user`, `start`, `end`, `date`, `hours`.
/// `type` defaults to vacation and `user` to `default_user`.
pub fn parse_leave_form<'a, I>(pairs: I, default_user: &str) -> Result<LeaveRequest, AppError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut request = LeaveRequest {
        user_id: default_user.to_string(),
        leave_type: LeaveType::Vacation,
        start_date: None,
        end_date: None,
        date: None,
        hours: None,
    };

    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| AppError::BadRequest(format!("expected key=value, got {pair:?}")))?;
        match key.trim() {
            "type" => request.leave_type = value.parse().map_err(AppError::BadRequest)?,
            "user" => request.user_id = value.trim().to_string(),
            "start" => request.start_date = parse_date_input(value, "start")?,
            "end" => request.end_date = parse_date_input(value, "end")?,
            "date" => request.date = parse_date_input(value, "date")?,
            "hours" => {
                let hours = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| AppError::BadRequest("hours must be a number".into()))?;
                request.hours = Some(hours);
            }
            other => return Err(AppError::BadRequest(format!("unknown field: {other}"))),
        }
    }

    Ok(request)
}
