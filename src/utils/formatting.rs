//! Formatting utilities used for CLI and export outputs.

/// Hours with two decimals, matching the `0.00` spreadsheet number format.
pub fn hours2readable(hours: f64) -> String {
    format!("{:.2}", hours)
}
