//! rTimecard library root.
//! Exposes the CLI parser, the high-level run() function and the
//! reconciliation engine for use in tests and other tools.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Summary => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Who { .. } => cli::commands::who::handle(&cli.command, cfg),
        Commands::Warnings { .. } => cli::commands::warnings::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // the config is loaded once and shared by every command
    let path = cli.config.clone().unwrap_or_else(Config::default_path);
    let cfg = Config::load(&path)?;

    dispatch(&cli, &cfg)
}
