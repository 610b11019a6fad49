use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest;
use crate::models::WarnLevel;
use crate::utils::colors::{color_for_level, colorize};
use crate::utils::date::format_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Warnings { level } = cmd {
        let filter: Option<WarnLevel> = level.as_deref().map(str::parse::<WarnLevel>).transpose()?;

        let timecards = ingest::load(cfg, &[])?;

        let mut table = Table::new(["Level", "Name", "Date", "Track", "Warning"]);
        for w in timecards
            .warnings()
            .iter()
            .filter(|w| filter.is_none_or(|l| w.level == l))
        {
            table.add_row(vec![
                colorize(w.level.as_str(), color_for_level(w.level)),
                w.person.to_string(),
                format_date(w.day),
                w.track.clone(),
                w.message.clone(),
            ]);
        }

        if table.is_empty() {
            println!("No warnings.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
