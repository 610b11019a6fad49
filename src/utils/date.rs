//! Date helpers for the scanner formats (`MM/DD/YYYY`, `HH:MM:SS`, `HH:MM`)
//! and the 4 AM logical-day boundary.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Date format written by the scanners and used throughout the config.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Hour of the morning before which a scan still counts for the previous day.
pub const DAY_CUTOFF_HOURS: i64 = 4;

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Date plus a long time (`HH:MM:SS`), as written in scan logs.
pub fn parse_date_time(date: &str, time: &str) -> AppResult<NaiveDateTime> {
    let d = parse_date(date)?;
    let t = NaiveTime::parse_from_str(time.trim(), "%H:%M:%S")
        .map_err(|_| AppError::InvalidTime(time.to_string()))?;
    Ok(d.and_time(t))
}

/// Date plus a short time (`HH:MM`), as written in training definitions.
pub fn parse_date_short_time(date: &str, time: &str) -> AppResult<NaiveDateTime> {
    let d = parse_date(date)?;
    let t = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| AppError::InvalidTime(time.to_string()))?;
    Ok(d.and_time(t))
}

/// Logical attendance day of a timestamp: scans before 4:00 AM belong to
/// the previous calendar day.
pub fn logical_day(ts: NaiveDateTime) -> NaiveDate {
    (ts - Duration::hours(DAY_CUTOFF_HOURS)).date()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}
