// src/export/logic.rs

use crate::core::Timecards;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::Report;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level report writing.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the report for `timecards` to `path`.
    ///
    /// `format` defaults to the one implied by the file extension, then xlsx.
    pub fn export(
        timecards: &Timecards,
        format: Option<ExportFormat>,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        let format = match format {
            Some(f) => f,
            None => match path.extension() {
                None => ExportFormat::Xlsx,
                Some(ext) => ExportFormat::from_path(path).ok_or_else(|| {
                    AppError::InvalidExportFormat(ext.to_string_lossy().to_string())
                })?,
            },
        };

        ensure_writable(path, force)?;

        let report = Report::from_timecards(timecards);
        if report.names.is_empty() {
            warning("No scans found inside the season window.");
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(&report, path)?,
            ExportFormat::Csv => export_csv(&report, path)?,
            ExportFormat::Json => export_json(&report, path)?,
        }

        Ok(())
    }
}
