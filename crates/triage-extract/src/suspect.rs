//! Suspect description capture.
//!
//! Captures the clause after "suspect" (optionally "described as") up to the
//! next period. Abbreviations such as "Jr." cut the clause short.

use once_cell::sync::Lazy;
use regex::Regex;
use triage_core::NOT_FOUND;

static SUSPECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)suspect (?:described as )?([^.]+)\.").unwrap());

/// First captured description, trimmed.
pub fn find_suspect_description(text: &str) -> Option<String> {
    SUSPECT_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Description or the sentinel.
pub fn extract_suspect_description(text: &str) -> String {
    find_suspect_description(text).unwrap_or_else(|| NOT_FOUND.to_string())
}
