use crate::errors::{AppError, AppResult};
use crate::utils::date::{logical_day, parse_date_short_time};
use crate::utils::time::hours_between;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// A scheduled training session, `[start, stop)` on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingEvent {
    pub name: String,
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
}

impl TrainingEvent {
    /// Parse `"MM/DD/YYYY HH:MM HH:MM"`.
    pub fn parse(name: &str, schedule: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidTraining {
            name: name.to_string(),
            value: schedule.to_string(),
        };

        let parts: Vec<&str> = schedule.split_whitespace().collect();
        let [date, start, stop] = parts.as_slice() else {
            return Err(invalid());
        };

        let start = parse_date_short_time(date, start).map_err(|_| invalid())?;
        let stop = parse_date_short_time(date, stop).map_err(|_| invalid())?;
        if stop <= start {
            return Err(invalid());
        }

        Ok(Self {
            name: name.to_string(),
            start,
            stop,
        })
    }

    /// Logical day the session belongs to.
    pub fn day(&self) -> NaiveDate {
        logical_day(self.start)
    }

    pub fn duration_hours(&self) -> f64 {
        hours_between(self.start, self.stop)
    }
}

/// Flatten the `name → [schedule]` table of a track section.
pub fn parse_trainings(table: &BTreeMap<String, Vec<String>>) -> AppResult<Vec<TrainingEvent>> {
    let mut result = Vec::new();
    for (name, times) in table {
        for schedule in times {
            result.push(TrainingEvent::parse(name, schedule)?);
        }
    }
    Ok(result)
}
