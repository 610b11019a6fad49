use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ingest;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        files,
        output,
        format,
        start,
        end,
        force,
    } = cmd
    {
        let mut cfg = cfg.clone();
        if let Some(s) = start {
            cfg.start_date = parse_date(s)?;
        }
        if let Some(e) = end {
            cfg.end_date = parse_date(e)?;
        }
        cfg.validate()?;

        let timecards = ingest::load(&cfg, files)?;
        super::summary::print_summary(&timecards);

        let path = output.clone().unwrap_or_else(|| cfg.output_path());
        ExportLogic::export(&timecards, *format, &path, *force)?;
    }
    Ok(())
}
