use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Calendar date format used across the spreadsheet-shaped data (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format used across the spreadsheet-shaped data (`HH:MM`).
pub const TIME_FORMAT: &str = "%H:%M";

/// Combine a `YYYY-MM-DD` date string and a `HH:MM` time string into a single
/// comparable instant.
///
/// Inputs are trimmed before parsing. Returns `None` when either component
/// fails strict parsing; callers decide how to treat the failure.
pub fn combine_instant(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).ok()?;
    Some(date.and_time(time))
}
