//! ANSI colours for hour states and warning levels.

use crate::models::{HoursState, WarnLevel};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_state(state: HoursState) -> &'static str {
    match state {
        HoursState::Done => GREEN,
        HoursState::Goal => CYAN,
        HoursState::Normal => RESET,
        HoursState::Warn => RED,
    }
}

pub fn color_for_level(level: WarnLevel) -> &'static str {
    match level {
        WarnLevel::Error => RED,
        WarnLevel::Warn => YELLOW,
        WarnLevel::Info => GREY,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
