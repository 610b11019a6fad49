//! Top-level aggregation context: all tracks of a season plus the warning log.

use crate::config::Config;
use crate::core::bucketing::Bucketer;
use crate::core::track::Track;
use crate::errors::AppResult;
use crate::ingest::overrides::{ManualOverrides, check_hours};
use crate::models::{PersonKey, RawScan, TrackKind, WarnLevel, Warning};
use crate::utils::date::parse_date;
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct Timecards {
    bucketer: Bucketer,
    min_separation: Duration,
    tracks: BTreeMap<TrackKind, Track>,
    warnings: Vec<Warning>,
    discarded: usize,
}

impl Timecards {
    /// Empty season with one track per `TrackKind`, configured from `cfg`.
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let mut tracks = BTreeMap::new();
        for kind in TrackKind::ALL {
            tracks.insert(kind, Track::new(kind, cfg.thresholds(kind)?, cfg.trainings(kind)?));
        }

        Ok(Self {
            bucketer: Bucketer::from_config(cfg),
            min_separation: Duration::seconds(cfg.min_separation),
            tracks,
            warnings: Vec::new(),
            discarded: 0,
        })
    }

    /// Load, override and reconcile in the required order.
    pub fn build<I>(cfg: &Config, scans: I, overrides: &ManualOverrides) -> AppResult<Self>
    where
        I: IntoIterator<Item = RawScan>,
    {
        let mut timecards = Self::new(cfg)?;
        timecards.add_scans(scans);
        timecards.apply_overrides(overrides)?;
        timecards.fix_up();
        Ok(timecards)
    }

    /// Bucket scans into their tracks. Scans outside the season window are
    /// counted and dropped. Returns how many were kept.
    pub fn add_scans<I>(&mut self, scans: I) -> usize
    where
        I: IntoIterator<Item = RawScan>,
    {
        let mut kept = 0;
        for raw in scans {
            match self.bucketer.bucket(&raw) {
                Some((kind, day, event)) => {
                    tracing::trace!(
                        person = %event.person,
                        scanner = %event.scanner,
                        %day,
                        track = kind.name(),
                        "scan bucketed"
                    );
                    if let Some(track) = self.tracks.get_mut(&kind) {
                        track.add_scan(event.person, day, event.timestamp);
                        kept += 1;
                    }
                }
                None => self.discarded += 1,
            }
        }
        kept
    }

    /// Apply `track → date → name → hours` overrides. Must run after all
    /// scans are loaded and before `fix_up`.
    pub fn apply_overrides(&mut self, overrides: &ManualOverrides) -> AppResult<()> {
        for (track_name, dates) in overrides {
            let kind = TrackKind::from_name(track_name)?;
            let Some(dates) = dates else { continue };
            for (date_str, people) in dates {
                let day = parse_date(date_str)?;
                for (raw_name, hours) in people {
                    check_hours(track_name, date_str, raw_name, *hours)?;
                    let person = self.bucketer.person_key(raw_name);
                    tracing::debug!(%person, %day, track = kind.name(), hours, "manual override");
                    if let Some(track) = self.tracks.get_mut(&kind) {
                        track.manual_update(person, day, *hours);
                    }
                }
            }
        }
        Ok(())
    }

    /// Reconcile every track and sort the warning log.
    pub fn fix_up(&mut self) {
        self.warnings.clear();
        for track in self.tracks.values_mut() {
            track.fix_up(self.bucketer.kick_off, self.min_separation, &mut self.warnings);
        }
        self.warnings.sort();
    }

    pub fn track(&self, kind: TrackKind) -> &Track {
        // every kind is inserted in `new`
        &self.tracks[&kind]
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn bucketer(&self) -> &Bucketer {
        &self.bucketer
    }

    /// Scans dropped for falling outside the season window.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Everyone seen in any track, sorted.
    pub fn names(&self) -> Vec<PersonKey> {
        let names: BTreeSet<&PersonKey> = self
            .tracks
            .values()
            .flat_map(|t| t.people().keys())
            .collect();
        names.into_iter().cloned().collect()
    }

    /// Days from bag day to the latest post-bag day, 0 when there is none.
    pub fn post_bag_days(&self) -> i64 {
        match self.track(TrackKind::PostBag).dates().last() {
            Some(last) => (*last - self.bucketer.bag_date).num_days(),
            None => 0,
        }
    }

    /// Average weekly post-bag hours of `person`.
    pub fn post_bag_week(&self, person: &PersonKey) -> f64 {
        let days = self.post_bag_days();
        if days > 0 {
            self.track(TrackKind::PostBag).total(person) * 7.0 / days as f64
        } else {
            0.0
        }
    }

    pub fn warning_counts(&self) -> BTreeMap<WarnLevel, usize> {
        let mut counts = BTreeMap::new();
        for w in &self.warnings {
            *counts.entry(w.level).or_insert(0) += 1;
        }
        counts
    }

    /// Week indices present in any track, ascending.
    pub fn weeks(&self) -> Vec<i64> {
        let weeks: BTreeSet<i64> = self
            .tracks
            .values()
            .flat_map(|t| t.by_week().keys().copied())
            .collect();
        weeks.into_iter().collect()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.bucketer.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.bucketer.end_date
    }

    pub fn bag_date(&self) -> NaiveDate {
        self.bucketer.bag_date
    }
}
