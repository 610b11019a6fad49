// src/export/model.rs

use crate::core::Timecards;
use crate::core::track::Track;
use crate::models::{DayState, HoursState, PersonKey, TrackKind, Warning};
use crate::utils::date::format_date;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything a report needs, flattened out of `Timecards`.
#[derive(Serialize, Clone, Debug)]
pub struct Report {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub bag_date: NaiveDate,
    pub post_bag_days: i64,
    pub names: Vec<PersonKey>,
    pub tracks: Vec<TrackReport>,
    pub totals: Vec<TotalsRow>,
    pub weeks: Vec<WeekRow>,
    pub warnings: Vec<Warning>,
}

#[derive(Serialize, Clone, Debug)]
pub struct TrackReport {
    pub kind: TrackKind,
    pub required_hours: f64,
    /// Most recent first.
    pub dates: Vec<NaiveDate>,
    pub training_names: Vec<String>,
    pub rows: Vec<TrackRow>,
    pub by_week: BTreeMap<i64, f64>,
}

/// One person on one track sheet. `days` is aligned with `TrackReport::dates`.
#[derive(Serialize, Clone, Debug)]
pub struct TrackRow {
    pub name: PersonKey,
    pub total: f64,
    pub state: HoursState,
    /// Aligned with `TrackReport::training_names`.
    pub training: Vec<f64>,
    pub days: Vec<Option<DayCell>>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct DayCell {
    pub hours: f64,
    pub training_hours: f64,
    pub state: DayState,
}

/// One person on the totals sheet. `tracks` follows `TrackKind::ALL`.
#[derive(Serialize, Clone, Debug)]
pub struct TotalsRow {
    pub name: PersonKey,
    pub tracks: Vec<TrackTotal>,
    /// Technical + Business.
    pub pre_bag_total: f64,
    pub pre_bag_state: HoursState,
    pub post_bag_week: f64,
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct TrackTotal {
    pub kind: TrackKind,
    pub hours: f64,
    pub state: HoursState,
}

/// Hours on site per week, one value per `TrackKind::ALL`.
#[derive(Serialize, Clone, Debug)]
pub struct WeekRow {
    pub week: i64,
    pub hours: Vec<f64>,
}

/// Flat `(track, person, day)` record for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct DayRecord {
    pub track: String,
    pub name: String,
    pub date: String,
    pub hours: f64,
    pub training_hours: f64,
    pub state: String,
}

impl Report {
    pub fn from_timecards(tc: &Timecards) -> Self {
        let names = tc.names();

        let tracks = TrackKind::ALL
            .iter()
            .map(|k| track_report(tc.track(*k), &names))
            .collect();

        let totals = names
            .iter()
            .map(|name| {
                let per_track: Vec<TrackTotal> = TrackKind::ALL
                    .iter()
                    .map(|k| {
                        let t = tc.track(*k);
                        TrackTotal {
                            kind: *k,
                            hours: t.total(name),
                            state: t.state(name),
                        }
                    })
                    .collect();
                let tech = tc.track(TrackKind::Technical);
                let business = tc.track(TrackKind::Business);
                TotalsRow {
                    name: name.clone(),
                    tracks: per_track,
                    pre_bag_total: tech.total(name) + business.total(name),
                    pre_bag_state: tech.state(name).combine(business.state(name)),
                    post_bag_week: tc.post_bag_week(name),
                }
            })
            .collect();

        let weeks = tc
            .weeks()
            .into_iter()
            .map(|week| WeekRow {
                week,
                hours: TrackKind::ALL
                    .iter()
                    .map(|k| tc.track(*k).by_week().get(&week).copied().unwrap_or(0.0))
                    .collect(),
            })
            .collect();

        Report {
            start_date: tc.start_date(),
            end_date: tc.end_date(),
            bag_date: tc.bag_date(),
            post_bag_days: tc.post_bag_days(),
            names,
            tracks,
            totals,
            weeks,
            warnings: tc.warnings().to_vec(),
        }
    }

    /// Flat day records, track by track, names sorted, days ascending.
    pub fn day_records(&self) -> Vec<DayRecord> {
        let mut out = Vec::new();
        for track in &self.tracks {
            for row in &track.rows {
                for (date, cell) in track.dates.iter().zip(&row.days).rev() {
                    if let Some(cell) = cell {
                        out.push(DayRecord {
                            track: track.kind.name().to_string(),
                            name: row.name.to_string(),
                            date: format_date(*date),
                            hours: cell.hours,
                            training_hours: cell.training_hours,
                            state: cell.state.as_str().to_string(),
                        });
                    }
                }
            }
        }
        out
    }
}

fn track_report(track: &Track, names: &[PersonKey]) -> TrackReport {
    let dates = track.dates_desc();
    let training_names: Vec<String> = track.training_names().into_iter().collect();

    let rows = names
        .iter()
        .map(|name| TrackRow {
            name: name.clone(),
            total: track.total(name),
            state: track.state(name),
            training: training_names
                .iter()
                .map(|t| track.training_hours(name, t))
                .collect(),
            days: dates
                .iter()
                .map(|d| {
                    track.day_report(name, *d).map(|r| DayCell {
                        hours: r.hours(),
                        training_hours: r.training_hours(),
                        state: r.state(),
                    })
                })
                .collect(),
        })
        .collect();

    TrackReport {
        kind: track.kind(),
        required_hours: track.thresholds().required,
        dates,
        training_names,
        rows,
        by_week: track.by_week().clone(),
    }
}
