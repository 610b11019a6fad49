// src/export/excel_date.rs

use chrono::NaiveDate;

/// Number format applied to date header cells.
pub(crate) const DATE_NUM_FORMAT: &str = "mm/dd/yy";

/// Excel serial number of a date (days since 1899-12-30).
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default();
    (d - excel_epoch).num_days() as f64
}
