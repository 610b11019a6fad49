mod common;

use chrono::NaiveDate;
use common::{BUSINESS_SCANNER, TECH_SCANNER, approx, scan, test_config, ts};
use rtimecard::core::Timecards;
use rtimecard::core::bucketing::Bucketer;
use rtimecard::core::track::week_index;
use rtimecard::errors::AppError;
use rtimecard::ingest::overrides::{ManualOverrides, parse_overrides};
use rtimecard::models::person::mangle_name;
use rtimecard::models::{DayState, HoursState, PersonKey, RawScan, Thresholds, TrackKind, WarnLevel};

fn date(m: u32, d: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn jane() -> PersonKey {
    PersonKey::from_raw("Jane Doe", true)
}

fn john() -> PersonKey {
    PersonKey::from_raw("John Smith", true)
}

fn season_scans() -> Vec<RawScan> {
    vec![
        // pre-season, week -1
        scan("Jane Doe", TECH_SCANNER, "01/06/2017", "10:00:00"),
        scan("Jane Doe", TECH_SCANNER, "01/06/2017", "12:00:00"),
        // technical, week 0
        scan("Jane Doe", TECH_SCANNER, "01/09/2017", "09:00:00"),
        scan("Jane Doe", TECH_SCANNER, "01/09/2017", "12:00:00"),
        scan("Jane Doe", TECH_SCANNER, "01/10/2017", "17:00:00"),
        scan("Jane Doe", TECH_SCANNER, "01/10/2017", "19:00:00"),
        // technical, week 1, checkout after midnight
        scan("Jane Doe", TECH_SCANNER, "01/16/2017", "18:00:00"),
        scan("Jane Doe", TECH_SCANNER, "01/17/2017", "01:00:00"),
        // business
        scan("John Smith", BUSINESS_SCANNER, "01/09/2017", "17:00:00"),
        scan("John Smith", BUSINESS_SCANNER, "01/09/2017", "19:00:00"),
        // before the season starts
        scan("John Smith", TECH_SCANNER, "08/15/2016", "10:00:00"),
    ]
}

fn build(scans: Vec<RawScan>, overrides: &ManualOverrides) -> Timecards {
    Timecards::build(&test_config(), scans, overrides).unwrap()
}

#[test]
fn test_track_rules_in_priority_order() {
    let bucketer = Bucketer::from_config(&test_config());

    assert_eq!(bucketer.track_for(date(1, 6, 2017), BUSINESS_SCANNER), TrackKind::PreSeason);
    assert_eq!(bucketer.track_for(date(1, 7, 2017), BUSINESS_SCANNER), TrackKind::Business);
    assert_eq!(bucketer.track_for(date(1, 7, 2017), TECH_SCANNER), TrackKind::Technical);
    assert_eq!(bucketer.track_for(date(2, 21, 2017), TECH_SCANNER), TrackKind::Technical);
    assert_eq!(bucketer.track_for(date(2, 22, 2017), BUSINESS_SCANNER), TrackKind::PostBag);
}

#[test]
fn test_scans_before_four_am_belong_to_previous_day() {
    let bucketer = Bucketer::from_config(&test_config());
    let raw = scan("Jane Doe", TECH_SCANNER, "01/10/2017", "02:30:00");

    let (track, day, event) = bucketer.bucket(&raw).unwrap();
    assert_eq!(track, TrackKind::Technical);
    assert_eq!(day, date(1, 9, 2017));
    assert_eq!(event.person, jane());
}

#[test]
fn test_window_is_inclusive() {
    let bucketer = Bucketer::from_config(&test_config());

    assert!(bucketer.bucket(&scan("A B", TECH_SCANNER, "09/01/2016", "10:00:00")).is_some());
    assert!(bucketer.bucket(&scan("A B", TECH_SCANNER, "05/01/2017", "10:00:00")).is_some());
    assert!(bucketer.bucket(&scan("A B", TECH_SCANNER, "08/31/2016", "23:00:00")).is_none());
    assert!(bucketer.bucket(&scan("A B", TECH_SCANNER, "05/02/2017", "10:00:00")).is_none());
    // logical day 05/01
    assert!(bucketer.bucket(&scan("A B", TECH_SCANNER, "05/02/2017", "03:00:00")).is_some());
}

#[test]
fn test_season_totals_per_track() {
    let tc = build(season_scans(), &ManualOverrides::new());

    assert_eq!(tc.discarded(), 1);
    assert_eq!(tc.names(), vec![jane(), john()]);

    let tech = tc.track(TrackKind::Technical);
    // 3h + (2h - 1h CAD) + 7h
    assert!(approx(tech.total(&jane()), 11.0));
    assert!(approx(tech.training_hours(&jane(), "CAD"), 1.0));
    assert_eq!(tech.state(&jane()), HoursState::Warn);

    assert!(approx(tc.track(TrackKind::PreSeason).total(&jane()), 2.0));
    assert!(approx(tc.track(TrackKind::Business).total(&john()), 2.0));
    assert_eq!(tc.track(TrackKind::Business).total(&jane()), 0.0);
}

#[test]
fn test_weekly_buckets_include_training() {
    let tc = build(season_scans(), &ManualOverrides::new());

    let tech = tc.track(TrackKind::Technical);
    assert!(approx(tech.by_week()[&0], 5.0));
    assert!(approx(tech.by_week()[&1], 7.0));
    assert!(approx(tc.track(TrackKind::PreSeason).by_week()[&-1], 2.0));
    assert_eq!(tc.weeks(), vec![-1, 0, 1]);

    for track in tc.tracks() {
        let week_sum: f64 = track.by_week().values().sum();
        let day_sum: f64 = track
            .people()
            .values()
            .flat_map(|p| p.days().values())
            .map(|r| r.hours() + r.training_hours())
            .sum();
        assert!(approx(week_sum, day_sum), "track {}", track.name());
    }
}

#[test]
fn test_week_index_counts_from_kick_off() {
    let kick_off = date(1, 7, 2017);

    assert_eq!(week_index(kick_off, date(1, 7, 2017)), 0);
    assert_eq!(week_index(kick_off, date(1, 13, 2017)), 0);
    assert_eq!(week_index(kick_off, date(1, 14, 2017)), 1);
    assert_eq!(week_index(kick_off, date(1, 6, 2017)), -1);
    assert_eq!(week_index(kick_off, date(12, 31, 2016)), -1);
    assert_eq!(week_index(kick_off, date(12, 30, 2016)), -2);
}

#[test]
fn test_dates_are_listed_newest_first() {
    let tc = build(season_scans(), &ManualOverrides::new());

    assert_eq!(
        tc.track(TrackKind::Technical).dates_desc(),
        vec![date(1, 16, 2017), date(1, 10, 2017), date(1, 9, 2017)]
    );
}

#[test]
fn test_names_at_time_uses_logical_day() {
    let tc = build(season_scans(), &ManualOverrides::new());
    let tech = tc.track(TrackKind::Technical);

    assert_eq!(tech.names_at_time(ts("01/17/2017", "00:30:00")), vec![jane()]);
    assert_eq!(tech.names_at_time(ts("01/09/2017", "10:00:00")), vec![jane()]);
    assert!(tech.names_at_time(ts("01/09/2017", "13:00:00")).is_empty());
    assert_eq!(
        tc.track(TrackKind::Business).names_at_time(ts("01/09/2017", "18:00:00")),
        vec![john()]
    );
}

#[test]
fn test_manual_override_replaces_scanned_day() {
    let overrides = parse_overrides(
        r#"
Technical:
  "01/09/2017":
    Jane Doe: 6
Business:
"#,
    )
    .unwrap();
    let tc = build(season_scans(), &overrides);
    let tech = tc.track(TrackKind::Technical);

    let day = tech.day_report(&jane(), date(1, 9, 2017)).unwrap();
    assert_eq!(day.state(), DayState::Manual);
    assert_eq!(day.hours(), 6.0);
    assert!(approx(tech.total(&jane()), 14.0));
}

#[test]
fn test_override_for_day_without_scans_creates_it() {
    let overrides = parse_overrides(
        r#"
Post-Bag:
  "03/02/2017":
    John Smith: 4.5
"#,
    )
    .unwrap();
    let tc = build(season_scans(), &overrides);
    let post_bag = tc.track(TrackKind::PostBag);

    assert_eq!(post_bag.total(&john()), 4.5);
    assert!(post_bag.dates().contains(&date(3, 2, 2017)));
}

#[test]
fn test_override_for_unknown_track_is_rejected() {
    let overrides = parse_overrides(
        r#"
Robotics:
  "01/09/2017":
    Jane Doe: 2
"#,
    )
    .unwrap();
    let err = Timecards::build(&test_config(), season_scans(), &overrides).unwrap_err();

    assert!(matches!(err, AppError::UnknownTrack(name) if name == "Robotics"));
}

#[test]
fn test_override_hours_must_be_non_negative_numbers() {
    for hours in ["-1.5", ".nan", ".inf"] {
        let overrides = parse_overrides(&format!(
            "Technical:\n  \"01/09/2017\":\n    Jane Doe: {hours}\n"
        ))
        .unwrap();
        let err = Timecards::build(&test_config(), season_scans(), &overrides).unwrap_err();

        assert!(matches!(err, AppError::Config(_)), "hours {hours}");
    }
}

#[test]
fn test_post_bag_weekly_average() {
    let mut scans = season_scans();
    scans.extend([
        scan("Jane Doe", TECH_SCANNER, "02/25/2017", "10:00:00"),
        scan("Jane Doe", TECH_SCANNER, "02/25/2017", "14:00:00"),
        scan("Jane Doe", BUSINESS_SCANNER, "03/01/2017", "10:00:00"),
        scan("Jane Doe", BUSINESS_SCANNER, "03/01/2017", "13:00:00"),
    ]);
    let tc = build(scans, &ManualOverrides::new());

    assert_eq!(tc.post_bag_days(), 8);
    assert!(approx(tc.track(TrackKind::PostBag).total(&jane()), 7.0));
    assert!(approx(tc.post_bag_week(&jane()), 6.125));
    assert_eq!(tc.post_bag_week(&john()), 0.0);
}

#[test]
fn test_no_post_bag_scans_means_zero_days() {
    let tc = build(season_scans(), &ManualOverrides::new());

    assert_eq!(tc.post_bag_days(), 0);
    assert_eq!(tc.post_bag_week(&jane()), 0.0);
}

#[test]
fn test_warnings_are_sorted_by_level() {
    let mut scans = season_scans();
    scans.extend([
        scan("John Smith", BUSINESS_SCANNER, "01/10/2017", "09:00:00"),
        scan("John Smith", BUSINESS_SCANNER, "01/10/2017", "12:00:00"),
        scan("John Smith", BUSINESS_SCANNER, "01/10/2017", "12:30:00"),
        scan("Jane Doe", TECH_SCANNER, "01/11/2017", "10:00:00"),
    ]);
    let tc = build(scans, &ManualOverrides::new());

    let levels: Vec<WarnLevel> = tc.warnings().iter().map(|w| w.level).collect();
    assert_eq!(levels, vec![WarnLevel::Error, WarnLevel::Warn]);
    assert_eq!(tc.warnings()[0].person, jane());
    assert_eq!(tc.warnings()[0].track, "Technical");
    assert_eq!(tc.warnings()[1].day, date(1, 10, 2017));

    let counts = tc.warning_counts();
    assert_eq!(counts[&WarnLevel::Error], 1);
    assert_eq!(counts[&WarnLevel::Warn], 1);
    assert!(!counts.contains_key(&WarnLevel::Info));
}

#[test]
fn test_fix_up_is_repeatable() {
    let mut tc = build(season_scans(), &ManualOverrides::new());
    let before = tc.track(TrackKind::Technical).total(&jane());

    tc.fix_up();

    assert_eq!(tc.track(TrackKind::Technical).total(&jane()), before);
    assert!(tc.warnings().is_empty());
}

#[test]
fn test_names_are_kept_raw_without_mangling() {
    let mut cfg = test_config();
    cfg.mangle_names = false;
    let tc = Timecards::build(&cfg, season_scans(), &ManualOverrides::new()).unwrap();

    assert_eq!(
        tc.names(),
        vec![
            PersonKey::from_raw("Jane Doe", false),
            PersonKey::from_raw("John Smith", false)
        ]
    );
}

#[test]
fn test_mangle_name_splits_on_last_whitespace() {
    assert_eq!(mangle_name("Jane Doe"), "Doe, Jane");
    assert_eq!(mangle_name("Mary Ann  Smith"), "Smith, Mary Ann");
    assert_eq!(mangle_name("  Jane Doe "), "Doe, Jane");
    assert_eq!(mangle_name("Cher"), "Cher");
}

#[test]
fn test_thresholds_classify_into_bands() {
    let t = Thresholds {
        required: 90.0,
        goal: Some(60.0),
        warn: Some(20.0),
    };

    assert_eq!(t.classify(95.0), HoursState::Done);
    assert_eq!(t.classify(90.0), HoursState::Done);
    assert_eq!(t.classify(60.0), HoursState::Goal);
    assert_eq!(t.classify(30.0), HoursState::Normal);
    assert_eq!(t.classify(20.0), HoursState::Normal);
    assert_eq!(t.classify(10.0), HoursState::Warn);

    let plain = Thresholds::new(10.0);
    assert_eq!(plain.classify(0.0), HoursState::Normal);
    assert_eq!(plain.classify(10.0), HoursState::Done);
}

#[test]
fn test_combining_states_keeps_the_most_urgent() {
    assert_eq!(HoursState::Warn.combine(HoursState::Done), HoursState::Warn);
    assert_eq!(HoursState::Goal.combine(HoursState::Done), HoursState::Goal);
    assert_eq!(HoursState::Normal.combine(HoursState::Goal), HoursState::Normal);
    assert_eq!(HoursState::Done.combine(HoursState::Done), HoursState::Done);
}
