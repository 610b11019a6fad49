use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TrackKind;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // loading already validated the file
        if *check || !*print_config {
            for kind in TrackKind::ALL {
                let t = cfg.track(kind)?;
                info(format!(
                    "{:<11} required {:>6.1}h, {} training sessions",
                    kind.name(),
                    t.hours,
                    cfg.trainings(kind)?.len()
                ));
            }
            success("Configuration is valid");
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }
    }

    Ok(())
}
