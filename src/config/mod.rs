use crate::errors::{AppError, AppResult};
use crate::ingest::overrides::{ManualOverrides, validate_overrides};
use crate::models::training::parse_trainings;
use crate::models::{Thresholds, TrackKind, TrainingEvent};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

mod serde_helpers;

/// Season configuration, usually `config.yaml` next to the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_data_root")]
    pub data_root: String,
    #[serde(with = "serde_helpers::mdy_date")]
    pub start_date: NaiveDate,
    #[serde(with = "serde_helpers::mdy_date")]
    pub end_date: NaiveDate,
    #[serde(with = "serde_helpers::mdy_date")]
    pub kick_off: NaiveDate,
    #[serde(with = "serde_helpers::mdy_date")]
    pub bag_date: NaiveDate,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub business_scanner: String,
    #[serde(default = "default_mangle_names")]
    pub mangle_names: bool,
    /// Seconds below which two scans count as one.
    #[serde(default = "default_min_separation")]
    pub min_separation: i64,
    pub tracks: BTreeMap<String, TrackConfig>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub manual: ManualOverrides,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Required hours.
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warn: Option<f64>,
    /// Training name → list of `"MM/DD/YYYY HH:MM HH:MM"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub training: BTreeMap<String, Vec<String>>,
}

fn default_output() -> String {
    "timecard.xlsx".to_string()
}
fn default_data_root() -> String {
    "data".to_string()
}
fn default_mangle_names() -> bool {
    true
}
fn default_min_separation() -> i64 {
    crate::core::reconcile::MIN_SEPARATION_SECS
}

impl Config {
    /// Default config location: `./config.yaml`.
    pub fn default_path() -> PathBuf {
        PathBuf::from("config.yaml")
    }

    /// Load and validate the configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        let cfg = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the pieces serde cannot: required tracks, date order,
    /// thresholds and training schedules.
    pub fn validate(&self) -> AppResult<()> {
        if self.start_date > self.end_date {
            return Err(AppError::Config("startDate is after endDate".into()));
        }
        if self.kick_off > self.bag_date {
            return Err(AppError::Config("kickOff is after bagDate".into()));
        }
        if self.min_separation < 0 {
            return Err(AppError::Config("minSeparation must not be negative".into()));
        }
        for name in self.tracks.keys() {
            TrackKind::from_name(name)?;
        }
        for kind in TrackKind::ALL {
            let t = self.track(kind)?;
            if t.hours < 0.0 || t.goal.is_some_and(|g| g < 0.0) || t.warn.is_some_and(|w| w < 0.0) {
                return Err(AppError::Config(format!(
                    "negative hour threshold in track '{}'",
                    kind
                )));
            }
            self.trainings(kind)?;
        }
        for track in self.manual.keys() {
            TrackKind::from_name(track)?;
        }
        validate_overrides(&self.manual)?;
        Ok(())
    }

    pub fn track(&self, kind: TrackKind) -> AppResult<&TrackConfig> {
        self.tracks
            .iter()
            .find(|(name, _)| TrackKind::from_name(name).ok() == Some(kind))
            .map(|(_, t)| t)
            .ok_or_else(|| {
                AppError::Config(format!("missing section for track '{}'", kind))
            })
    }

    pub fn thresholds(&self, kind: TrackKind) -> AppResult<Thresholds> {
        let t = self.track(kind)?;
        Ok(Thresholds {
            required: t.hours,
            goal: t.goal,
            warn: t.warn,
        })
    }

    pub fn trainings(&self, kind: TrackKind) -> AppResult<Vec<TrainingEvent>> {
        parse_trainings(&self.track(kind)?.training)
    }

    pub fn data_root_path(&self) -> PathBuf {
        expand_tilde(&self.data_root)
    }

    /// `<dataRoot>/manual.yaml`.
    pub fn overrides_path(&self) -> PathBuf {
        self.data_root_path().join("manual.yaml")
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output)
    }
}
