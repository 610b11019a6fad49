use super::person::PersonKey;
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Severity of a reconciliation anomaly.
///
/// Declaration order is the sort order of the warnings sheet:
/// `ERR` first, `info` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WarnLevel {
    /// Needs a manual override; the day contributes nothing until then.
    #[serde(rename = "ERR")]
    Error,
    /// Auto-corrected, worth a look.
    #[serde(rename = "WARN")]
    Warn,
    /// Auto-corrected, nothing to do.
    #[serde(rename = "info")]
    Info,
}

impl WarnLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarnLevel::Error => "ERR",
            WarnLevel::Warn => "WARN",
            WarnLevel::Info => "info",
        }
    }
}

impl fmt::Display for WarnLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarnLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "err" | "error" => Ok(WarnLevel::Error),
            "warn" | "warning" => Ok(WarnLevel::Warn),
            "info" => Ok(WarnLevel::Info),
            _ => Err(AppError::InvalidLevel(s.to_string())),
        }
    }
}

/// One entry of the warnings sheet. Field order is the sort key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Warning {
    pub level: WarnLevel,
    pub person: PersonKey,
    pub day: NaiveDate,
    pub track: String,
    pub message: String,
}
