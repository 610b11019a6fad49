//! Per-track state: who scanned on which day, and the rolled-up totals.

use crate::core::reconcile::{DayContext, fix_up};
use crate::models::{
    DayReport, HoursState, PersonKey, Thresholds, TrackKind, TrainingEvent, Warning,
};
use crate::utils::date::logical_day;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet};

/// Everything one person did within one track.
#[derive(Debug, Clone, Default)]
pub struct PersonInTrack {
    days: BTreeMap<NaiveDate, DayReport>,
}

impl PersonInTrack {
    pub fn add_scan(&mut self, day: NaiveDate, time: NaiveDateTime) {
        self.days.entry(day).or_default().append(time);
    }

    pub fn manual_update(&mut self, day: NaiveDate, hours: f64) {
        self.days.entry(day).or_default().manual_update(hours);
    }

    pub fn day(&self, day: NaiveDate) -> Option<&DayReport> {
        self.days.get(&day)
    }

    pub fn days(&self) -> &BTreeMap<NaiveDate, DayReport> {
        &self.days
    }

    /// Hours spent in the named training across all days.
    pub fn event_hours(&self, event_name: &str) -> f64 {
        self.days
            .values()
            .filter_map(|r| r.training().get(event_name))
            .sum()
    }

    pub fn hours(&self) -> f64 {
        self.days.values().map(DayReport::hours).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Track {
    kind: TrackKind,
    thresholds: Thresholds,
    trainings: Vec<TrainingEvent>,
    people: BTreeMap<PersonKey, PersonInTrack>,
    dates: BTreeSet<NaiveDate>,
    totals: BTreeMap<PersonKey, f64>,
    // week index relative to kick-off → hours on site, trainings included
    by_week: BTreeMap<i64, f64>,
}

impl Track {
    pub fn new(kind: TrackKind, thresholds: Thresholds, trainings: Vec<TrainingEvent>) -> Self {
        Self {
            kind,
            thresholds,
            trainings,
            people: BTreeMap::new(),
            dates: BTreeSet::new(),
            totals: BTreeMap::new(),
            by_week: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn trainings(&self) -> &[TrainingEvent] {
        &self.trainings
    }

    pub fn add_scan(&mut self, person: PersonKey, day: NaiveDate, time: NaiveDateTime) {
        self.people.entry(person).or_default().add_scan(day, time);
        self.dates.insert(day);
    }

    pub fn manual_update(&mut self, person: PersonKey, day: NaiveDate, hours: f64) {
        self.people.entry(person).or_default().manual_update(day, hours);
        self.dates.insert(day);
    }

    /// Reconcile every day of every person, then rebuild the totals.
    pub fn fix_up(&mut self, kick_off: NaiveDate, min_separation: Duration, warnings: &mut Vec<Warning>) {
        self.totals.clear();
        self.by_week.clear();

        let track_name = self.kind.name();
        for (person, entry) in self.people.iter_mut() {
            let mut total = 0.0;
            for (day, report) in entry.days.iter_mut() {
                let trainings: Vec<&TrainingEvent> =
                    self.trainings.iter().filter(|t| t.day() == *day).collect();
                let ctx = DayContext {
                    person,
                    day: *day,
                    track: track_name,
                };
                fix_up(report, &ctx, &trainings, min_separation, warnings);

                total += report.hours();
                let week = week_index(kick_off, *day);
                *self.by_week.entry(week).or_insert(0.0) += report.hours() + report.training_hours();
            }
            self.totals.insert(person.clone(), total);
        }
    }

    /// Observed days, most recent first.
    pub fn dates_desc(&self) -> Vec<NaiveDate> {
        self.dates.iter().rev().copied().collect()
    }

    pub fn dates(&self) -> &BTreeSet<NaiveDate> {
        &self.dates
    }

    pub fn people(&self) -> &BTreeMap<PersonKey, PersonInTrack> {
        &self.people
    }

    pub fn day_report(&self, person: &PersonKey, day: NaiveDate) -> Option<&DayReport> {
        self.people.get(person).and_then(|p| p.day(day))
    }

    pub fn total(&self, person: &PersonKey) -> f64 {
        self.totals.get(person).copied().unwrap_or(0.0)
    }

    pub fn state(&self, person: &PersonKey) -> HoursState {
        self.thresholds.classify(self.total(person))
    }

    pub fn totals(&self) -> &BTreeMap<PersonKey, f64> {
        &self.totals
    }

    pub fn by_week(&self) -> &BTreeMap<i64, f64> {
        &self.by_week
    }

    /// Sorted names of the people checked in to this track at `time`.
    pub fn names_at_time(&self, time: NaiveDateTime) -> Vec<PersonKey> {
        let day = logical_day(time);
        self.people
            .iter()
            .filter(|(_, p)| p.day(day).is_some_and(|r| r.checked_in(time)))
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn training_names(&self) -> BTreeSet<String> {
        self.trainings.iter().map(|e| e.name.clone()).collect()
    }

    pub fn training_hours(&self, person: &PersonKey, event_name: &str) -> f64 {
        self.people
            .get(person)
            .map(|p| p.event_hours(event_name))
            .unwrap_or(0.0)
    }
}

/// Week number of `day` counted from kick-off; days before kick-off get
/// negative weeks.
pub fn week_index(kick_off: NaiveDate, day: NaiveDate) -> i64 {
    (day - kick_off).num_days().div_euclid(7)
}
