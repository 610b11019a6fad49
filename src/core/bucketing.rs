//! Assigns each scan to its logical day and track.

use crate::config::Config;
use crate::models::{PersonKey, RawScan, ScanEvent, TrackKind};
use crate::utils::date::logical_day;
use chrono::NaiveDate;

/// Date window and scanner rules of a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucketer {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kick_off: NaiveDate,
    pub bag_date: NaiveDate,
    pub business_scanner: String,
    pub mangle_names: bool,
}

impl Bucketer {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            start_date: cfg.start_date,
            end_date: cfg.end_date,
            kick_off: cfg.kick_off,
            bag_date: cfg.bag_date,
            business_scanner: cfg.business_scanner.clone(),
            mangle_names: cfg.mangle_names,
        }
    }

    pub fn in_window(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Track rules, first match wins: before kick-off, after bag day,
    /// business scanner, everything else.
    pub fn track_for(&self, day: NaiveDate, scanner: &str) -> TrackKind {
        if day < self.kick_off {
            TrackKind::PreSeason
        } else if day > self.bag_date {
            TrackKind::PostBag
        } else if scanner == self.business_scanner {
            TrackKind::Business
        } else {
            TrackKind::Technical
        }
    }

    pub fn person_key(&self, raw_name: &str) -> PersonKey {
        PersonKey::from_raw(raw_name, self.mangle_names)
    }

    /// Bucket a raw scan. `None` when its logical day is outside the window.
    pub fn bucket(&self, raw: &RawScan) -> Option<(TrackKind, NaiveDate, ScanEvent)> {
        let day = logical_day(raw.timestamp);
        if !self.in_window(day) {
            return None;
        }

        let track = self.track_for(day, raw.scanner.trim());
        let event = ScanEvent {
            person: self.person_key(&raw.name),
            timestamp: raw.timestamp,
            scanner: raw.scanner.trim().to_string(),
        };
        Some((track, day, event))
    }
}
