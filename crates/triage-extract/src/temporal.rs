//! Incident date resolution.
//!
//! Only the first DATE_TIME span is considered, and only a fully explicit
//! day/month/year is accepted. A guessed date is worse than none.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use triage_core::NOT_FOUND;

use crate::span::{first_of_kind, Span, SpanKind};

/// Output format for resolved dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turns a date expression into a calendar date.
///
/// Implementations must return `None` unless day, month and year are all
/// stated in the expression. Relative phrases never resolve.
pub trait DateNormalizer: Send + Sync {
    fn normalize(&self, expression: &str) -> Option<NaiveDate>;
}

pub struct TemporalResolver {
    normalizer: Arc<dyn DateNormalizer>,
}

impl TemporalResolver {
    pub fn new(normalizer: Arc<dyn DateNormalizer>) -> Self {
        Self { normalizer }
    }

    pub fn resolve_date(&self, spans: &[Span]) -> Option<NaiveDate> {
        let span = first_of_kind(spans, SpanKind::DateTime)?;
        let date = self.normalizer.normalize(&span.text);
        if date.is_none() {
            debug!("Date expression '{}' is not fully explicit", span.text);
        }
        date
    }

    /// `YYYY-MM-DD`, or the sentinel.
    pub fn resolve(&self, spans: &[Span]) -> String {
        self.resolve_date(spans)
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}
