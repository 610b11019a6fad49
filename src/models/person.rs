use serde::Serialize;
use std::fmt;

/// Canonical identity of a person across tracks, scanners and overrides.
///
/// Built once at ingestion; lookups compare keys, never raw names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonKey(String);

impl PersonKey {
    /// Build the key for a raw scanner/override name, optionally rewriting
    /// it to `Last, First` so that reports sort by last name.
    pub fn from_raw(raw: &str, mangle: bool) -> Self {
        if mangle {
            Self(mangle_name(raw))
        } else {
            Self(raw.trim().to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `"Mary Ann Smith"` → `"Smith, Mary Ann"`, splitting on the last run of
/// whitespace. Single-word names come back trimmed but otherwise unchanged.
pub fn mangle_name(name: &str) -> String {
    let name = name.trim();
    match name.rfind(char::is_whitespace) {
        Some(idx) => {
            let first = name[..idx].trim_end();
            let last = name[idx..].trim_start();
            format!("{}, {}", last, first)
        }
        None => name.to_string(),
    }
}
