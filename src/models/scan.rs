use super::person::PersonKey;
use chrono::NaiveDateTime;

/// One parsed scan-log row, before bucketing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScan {
    pub name: String,
    pub scanner: String,
    pub timestamp: NaiveDateTime,
}

/// A scan attributed to a canonical person. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEvent {
    pub person: PersonKey,
    pub timestamp: NaiveDateTime,
    pub scanner: String,
}
