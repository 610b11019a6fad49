use crate::core::reconcile::calculate_hours;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

/// How a day's hours were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    #[default]
    Normal,
    /// A lone scan that could not be paired; contributes 0 hours.
    Error,
    /// Hours come from an administrator override.
    Manual,
}

impl DayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayState::Normal => "normal",
            DayState::Error => "error",
            DayState::Manual => "manual",
        }
    }
}

/// Scans of a single person on a single logical day within one track.
///
/// Filled while loading, reconciled once by `core::reconcile::fix_up`,
/// then only queried.
#[derive(Debug, Clone, Default)]
pub struct DayReport {
    pub(crate) scans: Vec<NaiveDateTime>,
    pub(crate) ignored: Vec<NaiveDateTime>,
    pub(crate) state: DayState,
    pub(crate) manual: Option<f64>,
    // event name → hours spent in that training
    pub(crate) training: BTreeMap<String, f64>,
}

impl DayReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scan. Ignored once the day carries a manual override.
    pub fn append(&mut self, time: NaiveDateTime) {
        if self.state == DayState::Manual {
            tracing::debug!(%time, "scan dropped: day has a manual override");
            return;
        }
        self.scans.push(time);
    }

    /// Replace scan-derived hours with a fixed value.
    pub fn manual_update(&mut self, hours: f64) {
        self.state = DayState::Manual;
        self.manual = Some(hours);
        self.scans.clear();
        self.ignored.clear();
        self.training.clear();
    }

    pub fn state(&self) -> DayState {
        self.state
    }

    pub fn scans(&self) -> &[NaiveDateTime] {
        &self.scans
    }

    pub fn ignored(&self) -> &[NaiveDateTime] {
        &self.ignored
    }

    pub fn training(&self) -> &BTreeMap<String, f64> {
        &self.training
    }

    /// Check-in/check-out pairs over the retained scans.
    pub fn pairs(&self) -> impl Iterator<Item = (NaiveDateTime, NaiveDateTime)> + '_ {
        self.scans.chunks_exact(2).map(|p| (p[0], p[1]))
    }

    /// Credited hours: the override for manual days, otherwise paired time
    /// minus the time attributed to trainings.
    pub fn hours(&self) -> f64 {
        if let (DayState::Manual, Some(hours)) = (self.state, self.manual) {
            return hours;
        }
        (calculate_hours(&self.scans) - self.training_hours()).max(0.0)
    }

    pub fn training_hours(&self) -> f64 {
        self.training.values().sum()
    }

    /// Was this person checked in at `time`?
    pub fn checked_in(&self, time: NaiveDateTime) -> bool {
        if self.state == DayState::Manual {
            return false;
        }
        self.scans
            .iter()
            .take_while(|s| **s <= time)
            .fold(false, |inside, _| !inside)
    }
}
