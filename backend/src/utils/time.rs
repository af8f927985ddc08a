//! Clock and calendar-month helpers.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

/// Normalizes a date to the first day of its month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shifts `month` by `delta` calendar months. The result is always the first
/// day of the target month, so day-of-month overflow cannot occur.
///
/// Saturates at the first of the source month if the target is outside the
/// representable range.
pub fn add_months(month: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(month);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

pub fn next_month(month: NaiveDate) -> NaiveDate {
    add_months(month, 1)
}

pub fn previous_month(month: NaiveDate) -> NaiveDate {
    add_months(month, -1)
}

/// True when both dates share calendar month and year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?;
    let next_month = first.checked_add_months(Months::new(1))?;
    let last = next_month.checked_sub_signed(Duration::days(1))?;
    Some((first, last))
}

/// Parses `YYYY-MM` (or a full `YYYY-MM-DD`) into the first day of that month.
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
        .map(first_of_month)
}

/// Formats a month as `YYYY-MM`.
pub fn format_month(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}
