pub mod day_report;
pub mod hours_state;
pub mod person;
pub mod scan;
pub mod track_kind;
pub mod training;
pub mod warning;

pub use day_report::{DayReport, DayState};
pub use hours_state::{HoursState, Thresholds};
pub use person::PersonKey;
pub use scan::{RawScan, ScanEvent};
pub use track_kind::TrackKind;
pub use training::TrainingEvent;
pub use warning::{WarnLevel, Warning};
