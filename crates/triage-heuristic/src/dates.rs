//! Strict date normalizer.
//!
//! Accepts a date expression only when day, month and year are all
//! written out. Relative phrases ("tomorrow", "next Tuesday") and partial
//! dates ("March 3") resolve to nothing rather than a guess.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use triage_extract::DateNormalizer;

use crate::patterns::{WEEKDAYS, WEEKDAY_ABBREVS};

/// Leading "the", weekday (full or abbreviated) and a second "the", as in
/// "the 3rd of March" or "Tue., the 3rd of March".
static LEADING_WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:the\s+)?(?:(?:{WEEKDAYS}|{WEEKDAY_ABBREVS})\.?,?\s+)?(?:the\s+)?"
    ))
    .unwrap()
});

static TRAILING_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:,?\s+at)?,?\s+\d{1,2}(?::\d{2})?\s*(?:a\.?m\.?|p\.?m\.?)$|(?:,?\s+at)?,?\s+\d{1,2}:\d{2}$")
        .unwrap()
});

static ORDINAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").unwrap());

static YMD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})$").unwrap());

static MDY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[-/.](\d{1,2})[-/.](\d{2}|\d{4})$").unwrap());

/// Month-name layouts tried after cleanup. `%B` also accepts abbreviations.
const NAMED_FORMATS: [&str; 2] = ["%B %d %Y", "%d %B %Y"];

/// Day/month/year normalizer for US-style English expressions.
#[derive(Debug, Clone, Default)]
pub struct StrictDateNormalizer;

impl StrictDateNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn clean(expression: &str) -> String {
        let trimmed = expression.trim().trim_end_matches('.');
        let no_weekday = LEADING_WEEKDAY_RE.replace(trimmed, "");
        let no_time = TRAILING_TIME_RE.replace(&no_weekday, "");
        let no_ordinal = ORDINAL_RE.replace_all(&no_time, "$1");
        no_ordinal
            .replace(',', " ")
            .split_whitespace()
            .filter(|w| !w.eq_ignore_ascii_case("of"))
            .map(|w| w.trim_end_matches('.'))
            .map(|w| if w.eq_ignore_ascii_case("sept") { "Sep" } else { w })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn numeric(cleaned: &str) -> Option<NaiveDate> {
        if let Some(cap) = YMD_RE.captures(cleaned) {
            let (y, m, d) = (cap[1].parse().ok()?, cap[2].parse().ok()?, cap[3].parse().ok()?);
            return NaiveDate::from_ymd_opt(y, m, d);
        }
        if let Some(cap) = MDY_RE.captures(cleaned) {
            let (m, d) = (cap[1].parse().ok()?, cap[2].parse().ok()?);
            let year: i32 = cap[3].parse().ok()?;
            let year = if cap[3].len() == 2 { 2000 + year } else { year };
            return NaiveDate::from_ymd_opt(year, m, d);
        }
        None
    }
}

impl DateNormalizer for StrictDateNormalizer {
    fn normalize(&self, expression: &str) -> Option<NaiveDate> {
        let cleaned = Self::clean(expression);
        if cleaned.is_empty() {
            return None;
        }
        Self::numeric(&cleaned).or_else(|| {
            NAMED_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(expr: &str) -> Option<String> {
        StrictDateNormalizer::new()
            .normalize(expr)
            .map(|d| d.format("%Y-%m-%d").to_string())
    }

    #[test]
    fn test_month_name_forms() {
        assert_eq!(norm("March 3, 2024").as_deref(), Some("2024-03-03"));
        assert_eq!(norm("January 5, 2023").as_deref(), Some("2023-01-05"));
        assert_eq!(norm("Mar. 3rd 2024").as_deref(), Some("2024-03-03"));
        assert_eq!(norm("3rd of March, 2024").as_deref(), Some("2024-03-03"));
        assert_eq!(norm("12 December 2022").as_deref(), Some("2022-12-12"));
        assert_eq!(norm("Sept 3, 2024").as_deref(), Some("2024-09-03"));
        assert_eq!(norm("Sept. 3rd, 2024").as_deref(), Some("2024-09-03"));
        assert_eq!(norm("the 3rd of March, 2024").as_deref(), Some("2024-03-03"));
    }

    #[test]
    fn test_weekday_and_time_are_ignored() {
        assert_eq!(norm("Friday, June 7, 2024 at 9:30 pm").as_deref(), Some("2024-06-07"));
        assert_eq!(norm("June 7, 2024 10pm").as_deref(), Some("2024-06-07"));
        assert_eq!(norm("Tue, March 3, 2024").as_deref(), Some("2024-03-03"));
        assert_eq!(norm("Thurs. June 6, 2024").as_deref(), Some("2024-06-06"));
        assert_eq!(norm("Sunday the 3rd of March, 2024").as_deref(), Some("2024-03-03"));
    }

    #[test]
    fn test_numeric_forms() {
        assert_eq!(norm("2024-03-03").as_deref(), Some("2024-03-03"));
        assert_eq!(norm("2024/3/3").as_deref(), Some("2024-03-03"));
        assert_eq!(norm("03/04/2024").as_deref(), Some("2024-03-04"));
        assert_eq!(norm("3-4-24").as_deref(), Some("2024-03-04"));
    }

    #[test]
    fn test_partial_and_relative_rejected() {
        for expr in ["next Tuesday", "tomorrow", "last week", "March 3", "2024", "9:30 pm", "", "   "] {
            assert_eq!(norm(expr), None, "{expr:?} should not resolve");
        }
    }

    #[test]
    fn test_impossible_dates_rejected() {
        assert_eq!(norm("February 30, 2024"), None);
        assert_eq!(norm("13/01/2024"), None);
    }
}
