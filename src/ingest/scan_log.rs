//! Scanner log parsing. One row per scan:
//! `name,scannerId,HH:MM:SS,MM/DD/YYYY`, `#` starts a comment row.

use crate::errors::AppResult;
use crate::models::RawScan;
use crate::utils::date::parse_date_time;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Scans of one log plus the count of malformed rows that were skipped.
#[derive(Debug, Default, Clone)]
pub struct ScanLog {
    pub scans: Vec<RawScan>,
    pub skipped: usize,
}

pub fn read_scan_log(path: &Path) -> AppResult<ScanLog> {
    let file = File::open(path)?;
    parse_scan_log(file)
}

pub fn parse_scan_log<R: Read>(reader: R) -> AppResult<ScanLog> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote(b'|')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut log = ScanLog::default();
    for (line, record) in rdr.byte_records().enumerate() {
        let record = match record.map(StringRecord::from_byte_record) {
            Ok(Ok(record)) => record,
            Ok(Err(e)) => {
                tracing::warn!(line = line + 1, error = %e, "skipping scan row with invalid UTF-8");
                log.skipped += 1;
                continue;
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                tracing::warn!(line = line + 1, error = %e, "skipping unreadable scan row");
                log.skipped += 1;
                continue;
            }
        };
        if is_comment_or_empty(&record) {
            continue;
        }
        match parse_row(&record) {
            Some(scan) => log.scans.push(scan),
            None => {
                tracing::warn!(line = line + 1, row = ?record, "skipping malformed scan row");
                log.skipped += 1;
            }
        }
    }
    Ok(log)
}

fn is_comment_or_empty(record: &StringRecord) -> bool {
    match record.get(0) {
        None => true,
        Some(first) => (record.len() == 1 && first.is_empty()) || first.starts_with('#'),
    }
}

/// Parse a single row; `None` when a field is missing or unparsable.
pub fn parse_row(record: &StringRecord) -> Option<RawScan> {
    let name = record.get(0)?;
    let scanner = record.get(1)?;
    let time = record.get(2)?;
    let date = record.get(3)?;

    if name.is_empty() {
        return None;
    }

    let timestamp = parse_date_time(date, time).ok()?;
    Some(RawScan {
        name: name.to_string(),
        scanner: scanner.to_string(),
        timestamp,
    })
}
