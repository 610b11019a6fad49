//! Time utilities: hour arithmetic on timestamps and short formatting.

use chrono::NaiveDateTime;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Hours elapsed from `start` to `end` (negative if `end` is earlier).
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / SECONDS_PER_HOUR
}

/// `HH:MM` rendering used in warning messages.
pub fn format_hhmm(ts: NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

pub fn format_hhmm_list(times: &[NaiveDateTime]) -> String {
    times
        .iter()
        .map(|t| format_hhmm(*t))
        .collect::<Vec<_>>()
        .join(", ")
}
