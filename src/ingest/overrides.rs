//! Manual hour overrides.
//!
//! ```yaml
//! <track name>:
//!   <MM/DD/YYYY>:
//!     <person name>: <hours>
//! ```
//! Each entry replaces whatever was scanned for that person on that date.

use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// `date → person → hours` for one track. May be empty (`null`) in YAML.
pub type DateOverrides = BTreeMap<String, BTreeMap<String, f64>>;

/// `track → date → person → hours`.
pub type ManualOverrides = BTreeMap<String, Option<DateOverrides>>;

/// Read an overrides file. A missing file means no overrides.
pub fn read_overrides(path: &Path) -> AppResult<ManualOverrides> {
    if !path.is_file() {
        return Ok(ManualOverrides::new());
    }
    let content = fs::read_to_string(path)?;
    parse_overrides(&content)
}

pub fn parse_overrides(content: &str) -> AppResult<ManualOverrides> {
    if content.trim().is_empty() {
        return Ok(ManualOverrides::new());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Override hours must be finite and non-negative.
pub fn check_hours(track: &str, date: &str, person: &str, hours: f64) -> AppResult<()> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "invalid manual hours {} for '{}' on {} in track '{}'",
            hours, person, date, track
        )))
    }
}

/// Check every entry with `check_hours`.
pub fn validate_overrides(overrides: &ManualOverrides) -> AppResult<()> {
    for (track, dates) in overrides {
        for (date, people) in dates.iter().flatten() {
            for (person, hours) in people {
                check_hours(track, date, person, *hours)?;
            }
        }
    }
    Ok(())
}

/// Layer `extra` on top of `base`; entries of `extra` win.
pub fn merge_overrides(base: &mut ManualOverrides, extra: ManualOverrides) {
    for (track, dates) in extra {
        let Some(dates) = dates else {
            base.entry(track).or_insert(None);
            continue;
        };
        let slot = base.entry(track).or_insert(None).get_or_insert_with(BTreeMap::new);
        for (date, people) in dates {
            slot.entry(date).or_default().extend(people);
        }
    }
}
