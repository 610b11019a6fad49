use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Timecards;
use crate::errors::AppResult;
use crate::ingest;
use crate::models::{TrackKind, WarnLevel};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_state, colorize};
use crate::utils::date::format_date;
use crate::utils::hours2readable;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary = cmd {
        let timecards = ingest::load(cfg, &[])?;
        print_summary(&timecards);
        print_totals(&timecards);
    }
    Ok(())
}

/// Date window, day counts per track and warning counts.
pub fn print_summary(tc: &Timecards) {
    info(format!(
        "Dates: start: {}, end: {}, bag: {}",
        format_date(tc.start_date()),
        format_date(tc.end_date()),
        format_date(tc.bag_date())
    ));
    info(format!(
        "Total of {} names with {} pre-season, {} technical, {} business, and {} post-bag days",
        tc.names().len(),
        tc.track(TrackKind::PreSeason).dates().len(),
        tc.track(TrackKind::Technical).dates().len(),
        tc.track(TrackKind::Business).dates().len(),
        tc.post_bag_days()
    ));

    let counts = tc.warning_counts();
    let parts: Vec<String> = [WarnLevel::Error, WarnLevel::Warn, WarnLevel::Info]
        .iter()
        .map(|l| format!("{}: {}", l, counts.get(l).copied().unwrap_or(0)))
        .collect();
    info(format!("Warnings: {}", parts.join(", ")));

    if tc.discarded() > 0 {
        info(format!("{} scans outside the season window ignored", tc.discarded()));
    }
}

fn print_totals(tc: &Timecards) {
    header("Totals");

    let mut headers = vec!["Name".to_string()];
    headers.extend(TrackKind::ALL.iter().map(|k| k.name().to_string()));
    headers.push("Pre-Bag".to_string());
    let mut table = Table::new(headers);

    let tech = tc.track(TrackKind::Technical);
    let business = tc.track(TrackKind::Business);
    for name in tc.names() {
        let mut row = vec![name.to_string()];
        for kind in TrackKind::ALL {
            let track = tc.track(kind);
            row.push(colorize(
                &hours2readable(track.total(&name)),
                color_for_state(track.state(&name)),
            ));
        }
        let pre_bag = tech.total(&name) + business.total(&name);
        let state = tech.state(&name).combine(business.state(&name));
        row.push(colorize(&hours2readable(pre_bag), color_for_state(state)));
        table.add_row(row);
    }

    if table.is_empty() {
        println!("No scans found inside the season window.");
    } else {
        print!("{}", table.render());
    }
}
