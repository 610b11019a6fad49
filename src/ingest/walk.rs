//! Finds scanner logs under the data root.

use crate::errors::{AppError, AppResult};
use crate::utils::path::is_scan_log;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// All `*.TXT` files below `root`, in path order so that repeated runs
/// read files in the same sequence.
pub fn find_scan_logs(root: &Path) -> AppResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AppError::Config(format!(
            "data root is not a directory: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_scan_log(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(e) => tracing::warn!("error accessing entry: {}", e),
        }
    }

    tracing::debug!(count = files.len(), root = %root.display(), "scan logs found");
    Ok(files)
}
