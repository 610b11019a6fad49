use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// The four tracks events are partitioned into, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TrackKind {
    #[serde(rename = "Pre-season")]
    PreSeason,
    Technical,
    Business,
    #[serde(rename = "Post-Bag")]
    PostBag,
}

impl TrackKind {
    pub const ALL: [TrackKind; 4] = [
        TrackKind::PreSeason,
        TrackKind::Technical,
        TrackKind::Business,
        TrackKind::PostBag,
    ];

    /// Name used as config key, sheet name and warning column.
    pub fn name(&self) -> &'static str {
        match self {
            TrackKind::PreSeason => "Pre-season",
            TrackKind::Technical => "Technical",
            TrackKind::Business => "Business",
            TrackKind::PostBag => "Post-Bag",
        }
    }

    pub fn from_name(s: &str) -> AppResult<Self> {
        TrackKind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::UnknownTrack(s.to_string()))
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
