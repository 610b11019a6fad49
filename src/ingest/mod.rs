//! Reading the season's inputs: scan logs and manual overrides.

pub mod overrides;
pub mod scan_log;
pub mod walk;

use crate::config::Config;
use crate::core::Timecards;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use overrides::{merge_overrides, read_overrides};
use std::path::PathBuf;

/// Read every scan log (explicit `files`, or everything under the data
/// root), apply overrides from the config and `<dataRoot>/manual.yaml`,
/// and reconcile.
pub fn load(cfg: &Config, files: &[PathBuf]) -> AppResult<Timecards> {
    let files = if files.is_empty() {
        walk::find_scan_logs(&cfg.data_root_path())?
    } else {
        files.to_vec()
    };

    let mut scans = Vec::new();
    let mut skipped = 0;
    for file in &files {
        info(format!("Reading file {}", file.display()));
        let log = scan_log::read_scan_log(file)?;
        skipped += log.skipped;
        scans.extend(log.scans);
    }
    if skipped > 0 {
        warning(format!("{} malformed scan rows skipped", skipped));
    }

    let mut manual = cfg.manual.clone();
    merge_overrides(&mut manual, read_overrides(&cfg.overrides_path())?);

    Timecards::build(cfg, scans, &manual)
}
