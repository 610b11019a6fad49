//! Day reconciliation: turns the raw scans of one person on one day into
//! clean check-in/check-out pairs, and reports what had to be fixed.

use crate::models::{DayReport, DayState, PersonKey, TrainingEvent, WarnLevel, Warning};
use crate::utils::time::{format_hhmm_list, hours_between};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Scans closer together than this are treated as one.
pub const MIN_SEPARATION_SECS: i64 = 120;

/// Who/when/where a day belongs to, for the warnings it produces.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    pub person: &'a PersonKey,
    pub day: NaiveDate,
    pub track: &'a str,
}

impl DayContext<'_> {
    fn warn(&self, warnings: &mut Vec<Warning>, level: WarnLevel, message: String) {
        warnings.push(Warning {
            level,
            person: self.person.clone(),
            day: self.day,
            track: self.track.to_string(),
            message,
        });
    }
}

/// Sum of `(out - in)` over pairs (0,1), (2,3), … A trailing unpaired scan
/// is ignored.
pub fn calculate_hours(times: &[NaiveDateTime]) -> f64 {
    times
        .chunks_exact(2)
        .map(|p| hours_between(p[0], p[1]))
        .sum()
}

/// Split sorted scans into (kept, ignored). A scan is ignored when the next
/// scan follows it by less than `min_separation`; the later one survives.
pub fn drop_near_duplicates(
    sorted: &[NaiveDateTime],
    min_separation: Duration,
) -> (Vec<NaiveDateTime>, Vec<NaiveDateTime>) {
    let mut kept: Vec<NaiveDateTime> = Vec::with_capacity(sorted.len());
    let mut ignored = Vec::new();

    for &scan in sorted {
        if let Some(&prev) = kept.last()
            && scan - prev < min_separation
        {
            kept.pop();
            ignored.push(prev);
        }
        kept.push(scan);
    }

    (kept, ignored)
}

/// Drop the first or the last scan of an odd-length list, whichever leaves
/// more paired hours. Ties drop the last scan.
pub fn resolve_odd(scans: &[NaiveDateTime]) -> Vec<NaiveDateTime> {
    match scans.len() {
        0 | 1 => Vec::new(),
        n => {
            let without_last = &scans[..n - 1];
            let without_first = &scans[1..];
            if calculate_hours(without_last) < calculate_hours(without_first) {
                without_first.to_vec()
            } else {
                without_last.to_vec()
            }
        }
    }
}

/// Hours of `event` covered by the check-in/check-out pairs in `scans`.
pub fn event_hours(scans: &[NaiveDateTime], event: &TrainingEvent) -> f64 {
    scans
        .chunks_exact(2)
        .filter(|p| p[0] < event.stop && p[1] > event.start)
        .map(|p| {
            let check_in = p[0].max(event.start);
            let check_out = p[1].min(event.stop);
            hours_between(check_in, check_out).max(0.0)
        })
        .sum()
}

/// Reconcile a day after all of its scans are loaded.
///
/// Sorts, merges near duplicates, fixes odd scan counts and attributes
/// training time. Manual days are left untouched. Running it again on a
/// reconciled day changes nothing.
pub fn fix_up(
    report: &mut DayReport,
    ctx: &DayContext<'_>,
    trainings: &[&TrainingEvent],
    min_separation: Duration,
    warnings: &mut Vec<Warning>,
) {
    if report.state == DayState::Manual {
        return;
    }

    let mut sorted = std::mem::take(&mut report.scans);
    sorted.sort();

    let (mut scans, ignored) = drop_near_duplicates(&sorted, min_separation);
    if !ignored.is_empty() {
        ctx.warn(
            warnings,
            WarnLevel::Info,
            format!("{} near duplicate events ignored", ignored.len()),
        );
        report.ignored.extend(ignored);
        report.ignored.sort();
    }

    if scans.len() % 2 != 0 {
        if scans.len() == 1 {
            report.state = DayState::Error;
            ctx.warn(
                warnings,
                WarnLevel::Error,
                format!("Odd number of events: {} (single scan)", format_hhmm_list(&scans)),
            );
        } else {
            ctx.warn(
                warnings,
                WarnLevel::Warn,
                format!("Odd number of events: {}", format_hhmm_list(&scans)),
            );
        }
        tracing::debug!(
            person = %ctx.person,
            day = %ctx.day,
            track = ctx.track,
            count = scans.len(),
            "resolving odd scan count"
        );
        scans = resolve_odd(&scans);
    }

    report.training.clear();
    for event in trainings {
        let hours = event_hours(&scans, event);
        if hours > 0.0 {
            *report.training.entry(event.name.clone()).or_insert(0.0) += hours;
        }
    }

    report.scans = scans;
}
