pub mod bucketing;
pub mod reconcile;
pub mod timecards;
pub mod track;

pub use timecards::Timecards;
