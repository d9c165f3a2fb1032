//! Regex entity tagger standing in for a transformer NER model.
//!
//! Tags street addresses, calendar/time expressions and capitalized place
//! phrases after a locative preposition. Overlapping matches are resolved
//! the same way for every kind: earliest start wins, longest on ties.

use once_cell::sync::Lazy;
use regex::Regex;
use triage_core::Result;
use triage_extract::{Span, SpanKind, SpanProducer};

use crate::patterns::{is_calendar_word, MONTHS, STREET_TYPES, WEEKDAYS};

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b\d{{1,6}}\s+(?:[NSEW]\.?\s+)?(?:[A-Z][a-z]+\s+){{1,3}}(?:{STREET_TYPES})\b\.?(?:,\s*[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)?(?:,\s*[A-Z]{{2}})?(?:\s+\d{{5}})?"
    ))
    .unwrap()
});

static DATE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(
            r"\b(?:(?:{WEEKDAYS}),?\s+)?(?:{MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?(?:,?\s*\d{{4}})?\b"
        ),
        format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{MONTHS})\.?(?:,?\s+\d{{4}})?\b"),
        r"\b\d{4}[-/]\d{1,2}[-/]\d{1,2}\b".to_string(),
        r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b".to_string(),
        format!(
            r"(?i)\b(?:last|next|this|previous)\s+(?:week|month|year|night|morning|afternoon|evening|{WEEKDAYS})\b"
        ),
        r"(?i)\b(?:yesterday|today|tonight|tomorrow)\b".to_string(),
        r"(?i)\b\d{1,2}:\d{2}\s*(?:am|pm)?\b".to_string(),
        r"(?i)\b\d{1,2}\s*(?:am|pm)\b".to_string(),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static PLACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:in|at|near|outside|inside|behind|from)\s+(?:the\s+)?([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)")
        .unwrap()
});

/// Heuristic NER over a narrative.
#[derive(Debug, Clone, Default)]
pub struct RegexEntityTagger;

impl RegexEntityTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tagged spans in narrative order.
    pub fn tag(&self, text: &str) -> Vec<Span> {
        let mut found: Vec<(usize, usize, SpanKind)> = Vec::new();

        for m in ADDRESS_RE.find_iter(text) {
            found.push((m.start(), m.end(), SpanKind::Address));
        }
        for re in DATE_RES.iter() {
            for m in re.find_iter(text) {
                found.push((m.start(), m.end(), SpanKind::DateTime));
            }
        }
        for cap in PLACE_RE.captures_iter(text) {
            if let Some(m) = cap.get(1) {
                let first_word = m.as_str().split_whitespace().next().unwrap_or_default();
                if !is_calendar_word(first_word) {
                    found.push((m.start(), m.end(), SpanKind::Location));
                }
            }
        }

        found.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut spans = Vec::new();
        let mut last_end = 0;
        for (start, end, kind) in found {
            if start >= last_end {
                last_end = end;
                spans.push(Span::new(&text[start..end], kind));
            }
        }
        spans
    }
}

impl SpanProducer for RegexEntityTagger {
    fn name(&self) -> &str {
        "regex-ner"
    }

    fn produce(&self, text: &str) -> Result<Vec<Span>> {
        Ok(self.tag(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text(text: &str) -> Vec<(SpanKind, String)> {
        RegexEntityTagger::new()
            .tag(text)
            .into_iter()
            .map(|s| (s.kind, s.text))
            .collect()
    }

    #[test]
    fn test_address_with_city() {
        let spans = kinds_and_text("robbed the store at 123 Main St, Springfield on January 5, 2023.");
        assert_eq!(
            spans,
            vec![
                (SpanKind::Address, "123 Main St, Springfield".to_string()),
                (SpanKind::DateTime, "January 5, 2023".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_postal_address() {
        let spans = kinds_and_text("Send help to 77 North Lake Avenue, Pasadena, CA 91101 quickly");
        assert_eq!(spans[0].0, SpanKind::Address);
        assert_eq!(spans[0].1, "77 North Lake Avenue, Pasadena, CA 91101");
    }

    #[test]
    fn test_dates_and_relative_expressions() {
        let spans = kinds_and_text("It happened next Tuesday, or maybe on 3rd of March, 2024 at 9:30 pm.");
        let texts: Vec<&str> = spans.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["next Tuesday", "3rd of March, 2024", "9:30 pm"]);
        assert!(spans.iter().all(|(k, _)| *k == SpanKind::DateTime));
    }

    #[test]
    fn test_places_skip_calendar_words() {
        let spans = kinds_and_text("We were in Boston in March and later near the Riverside Mall.");
        assert_eq!(
            spans,
            vec![
                (SpanKind::Location, "Boston".to_string()),
                (SpanKind::Location, "Riverside Mall".to_string()),
            ]
        );
    }

    #[test]
    fn test_nothing_in_plain_text() {
        assert!(kinds_and_text("").is_empty());
        assert!(kinds_and_text("someone took my bike").is_empty());
    }
}
