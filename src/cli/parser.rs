use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rTimecard
#[derive(Parser)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn badge-scanner logs into attendance hours per track",
    long_about = None
)]
pub struct Cli {
    /// Season configuration file (default: ./config.yaml)
    #[arg(global = true, long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or validate the configuration file
    Config {
        #[arg(long = "print", help = "Print the parsed configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,
    },

    /// Build the timecard report
    Report {
        /// Scan logs to read instead of walking the data root
        files: Vec<PathBuf>,

        #[arg(long, short = 'o', value_name = "FILE", help = "Output file (default from config)")]
        output: Option<PathBuf>,

        #[arg(long, value_enum, help = "Output format (default: from extension, else xlsx)")]
        format: Option<ExportFormat>,

        #[arg(long, short = 's', value_name = "MM/DD/YYYY", help = "Override the season start date")]
        start: Option<String>,

        #[arg(long, short = 'e', value_name = "MM/DD/YYYY", help = "Override the season end date")]
        end: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print totals, day counts and warning counts
    Summary,

    /// List who was checked in on a track at a given moment
    Who {
        /// Track name (Pre-season, Technical, Business, Post-Bag)
        track: String,

        /// Date (MM/DD/YYYY)
        date: String,

        /// Time (HH:MM:SS)
        time: String,

        #[arg(long = "raw-names", help = "Do not rewrite names as 'Last, First'")]
        raw_names: bool,
    },

    /// Print the warning log
    Warnings {
        #[arg(long, value_name = "LEVEL", help = "Only show one level (info, WARN, ERR)")]
        level: Option<String>,
    },
}
