pub mod config;
pub mod report;
pub mod summary;
pub mod warnings;
pub mod who;
