use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest;
use crate::models::TrackKind;
use crate::utils::date::parse_date_time;

/// Handle the `who` subcommand: names checked in on a track at an instant.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Who {
        track,
        date,
        time,
        raw_names,
    } = cmd
    {
        let kind = TrackKind::from_name(track)?;
        let at = parse_date_time(date, time)?;

        let mut cfg = cfg.clone();
        if *raw_names {
            cfg.mangle_names = false;
        }

        let timecards = ingest::load(&cfg, &[])?;
        for name in timecards.track(kind).names_at_time(at) {
            println!("{}", name);
        }
    }
    Ok(())
}
