//! Plain-text rendering of a store snapshot.

use leave_calendar_backend::error::AppError;
use leave_calendar_backend::models::Leave;
use leave_calendar_backend::utils::time::format_month;

use crate::state::leave::LeaveSnapshot;

pub fn render_leave(leave: &Leave) -> String {
    let day = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string())
    };
    let hours = leave
        .hours
        .map(|h| format!(" {h}h"))
        .unwrap_or_default();
    format!(
        "{} .. {}  {:<8}  {:<8}  {}{}",
        day(leave.start_date),
        day(leave.end_date),
        leave.leave_type.to_string(),
        leave.status.to_string(),
        leave.user_id,
        hours
    )
}

pub fn render_snapshot(snapshot: &LeaveSnapshot) -> Vec<String> {
    let mut lines = vec![format!(
        "== {} ({} leave{}) ==",
        format_month(snapshot.current_month),
        snapshot.leaves.len(),
        if snapshot.leaves.len() == 1 { "" } else { "s" }
    )];
    if snapshot.leaves.is_empty() {
        lines.push("No leaves this month.".to_string());
    }
    lines.extend(snapshot.leaves.iter().map(render_leave));
    lines
}

/// Pretty-printed JSON, one output line per JSON line.
pub fn render_json<T: serde::Serialize>(value: &T) -> Result<Vec<String>, AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|err| AppError::Internal(err.into()))?;
    Ok(json.lines().map(str::to_string).collect())
}

pub fn help_lines() -> Vec<String> {
    [
        "list                      show the current month",
        "next | prev               move one month forward or back",
        "goto YYYY-MM              jump to a month",
        "add key=value ...         type=vacation|time_off user= start= end= date= hours=",
        "json                      dump the current month as JSON",
        "help                      show this help",
        "quit                      exit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
