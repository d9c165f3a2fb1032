//! Entity spans and the adapter that merges span producers.
//!
//! Producers are whatever tags entities in a narrative: an NER model, a
//! regional address parser, a fallback address tagger. The adapter chains
//! them into one lazy stream and swallows producer failures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use triage_core::{Error, Result};

/// Coarse entity kind the resolvers care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpanKind {
    Address,
    Location,
    DateTime,
    Other,
}

impl SpanKind {
    /// Map an NER label (OntoNotes-style) onto a span kind.
    pub fn from_ner_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "ADDRESS" => SpanKind::Address,
            "GPE" | "LOC" | "FACILITY" | "FAC" => SpanKind::Location,
            "DATE" | "TIME" => SpanKind::DateTime,
            _ => SpanKind::Other,
        }
    }
}

/// A labelled excerpt of the narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Anything that can tag entity spans in a narrative.
pub trait SpanProducer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Tag the narrative. Errors are treated by the adapter as "found nothing".
    fn produce(&self, text: &str) -> Result<Vec<Span>>;
}

/// Chains span producers into one sequence, in registration order.
#[derive(Clone, Default)]
pub struct EntitySourceAdapter {
    producers: Vec<Arc<dyn SpanProducer>>,
}

impl EntitySourceAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a producer after the existing ones.
    pub fn with_producer(mut self, producer: Arc<dyn SpanProducer>) -> Self {
        self.producers.push(producer);
        self
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Lazily tag `text`. A producer is only invoked once the spans of every
    /// producer before it have been consumed.
    pub fn spans<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Span> + 'a {
        self.producers
            .iter()
            .flat_map(move |producer| match producer.produce(text) {
                Ok(spans) => {
                    debug!("{} produced {} spans", producer.name(), spans.len());
                    spans
                }
                Err(Error::RepeatedLabel(detail)) => {
                    debug!("{} reported repeated label ({}), skipping", producer.name(), detail);
                    Vec::new()
                }
                Err(e) => {
                    warn!("Span producer {} failed: {}", producer.name(), e);
                    Vec::new()
                }
            })
    }
}

/// First span of the given kind, in producer order.
pub fn first_of_kind(spans: &[Span], kind: SpanKind) -> Option<&Span> {
    spans.iter().find(|s| s.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Producer returning a fixed span list.
    struct FixedSpans(Vec<Span>);

    impl SpanProducer for FixedSpans {
        fn name(&self) -> &str {
            "fixed"
        }
        fn produce(&self, _text: &str) -> Result<Vec<Span>> {
            Ok(self.0.clone())
        }
    }

    struct Failing(Error);

    impl SpanProducer for Failing {
        fn name(&self) -> &str {
            "failing"
        }
        fn produce(&self, _text: &str) -> Result<Vec<Span>> {
            Err(match &self.0 {
                Error::RepeatedLabel(d) => Error::RepeatedLabel(d.clone()),
                other => Error::collaborator("failing", other.to_string()),
            })
        }
    }

    struct Counting(AtomicUsize);

    impl SpanProducer for Counting {
        fn name(&self) -> &str {
            "counting"
        }
        fn produce(&self, _text: &str) -> Result<Vec<Span>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Span::new("later", SpanKind::Other)])
        }
    }

    #[test]
    fn test_ner_label_mapping() {
        assert_eq!(SpanKind::from_ner_label("ADDRESS"), SpanKind::Address);
        assert_eq!(SpanKind::from_ner_label("GPE"), SpanKind::Location);
        assert_eq!(SpanKind::from_ner_label("fac"), SpanKind::Location);
        assert_eq!(SpanKind::from_ner_label("TIME"), SpanKind::DateTime);
        assert_eq!(SpanKind::from_ner_label("PERSON"), SpanKind::Other);
    }

    #[test]
    fn test_failing_producers_yield_nothing() {
        let adapter = EntitySourceAdapter::new()
            .with_producer(Arc::new(Failing(Error::RepeatedLabel("AddressNumber".into()))))
            .with_producer(Arc::new(Failing(Error::Input("boom".into()))))
            .with_producer(Arc::new(FixedSpans(vec![Span::new("Boston", SpanKind::Location)])));

        let spans: Vec<Span> = adapter.spans("anything").collect();
        assert_eq!(spans, vec![Span::new("Boston", SpanKind::Location)]);
    }

    #[test]
    fn test_spans_are_lazy() {
        let counting = Arc::new(Counting(AtomicUsize::new(0)));
        let adapter = EntitySourceAdapter::new()
            .with_producer(Arc::new(FixedSpans(vec![Span::new("1 Elm St", SpanKind::Address)])))
            .with_producer(counting.clone());

        let first = adapter.spans("text").find(|s| s.kind == SpanKind::Address);
        assert!(first.is_some());
        assert_eq!(counting.0.load(Ordering::SeqCst), 0);

        let all: Vec<Span> = adapter.spans("text").collect();
        assert_eq!(all.len(), 2);
        assert_eq!(counting.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_adapter() {
        let adapter = EntitySourceAdapter::new();
        assert!(adapter.is_empty());
        assert_eq!(adapter.spans("text").count(), 0);
    }
}
