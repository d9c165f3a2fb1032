//! Pipeline: wires collaborators into extraction and action planning.
//!
//! Collaborators arrive already initialized; the pipeline never loads or
//! caches a model itself. One `Pipeline` is immutable after `build()` and
//! can be shared across threads.

use std::sync::Arc;

use tracing::{debug, info};
use triage_core::{CategoryClassifier, Classification, Error, Result, TriageConfig};
use triage_extract::{
    AddressParser, AddressTagger, DateNormalizer, EntitySourceAdapter, InsightBundle,
    InsightExtractor, LocationResolver, SignalDetector, Span, SpanProducer, TemporalResolver,
};
use triage_heuristic::{
    KeywordClassifier, RegexEntityTagger, StrictDateNormalizer, UsAddressParser, UsAddressTagger,
};
use triage_rules::{ActionPlan, ActionRuleEngine};

use crate::types::IncidentReport;

pub struct Pipeline {
    config: TriageConfig,
    entities: EntitySourceAdapter,
    extractor: InsightExtractor,
    rules: ActionRuleEngine,
    classifier: Arc<dyn CategoryClassifier>,
}

impl Pipeline {
    pub fn builder(config: TriageConfig) -> PipelineBuilder {
        PipelineBuilder::new(config)
    }

    /// Pipeline backed by the regex/keyword collaborators.
    pub fn heuristic(config: TriageConfig) -> Result<Self> {
        let classifier = Arc::new(KeywordClassifier::from_config(&config));
        Self::builder(config)
            .span_producer(Arc::new(RegexEntityTagger::new()))
            .address_parser(Arc::new(UsAddressParser::new()))
            .address_tagger(Arc::new(UsAddressTagger::new()))
            .date_normalizer(Arc::new(StrictDateNormalizer::new()))
            .classifier(classifier)
            .build()
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Entity spans for a narrative, fetched once.
    pub fn spans(&self, text: &str) -> Vec<Span> {
        self.entities.spans(text.trim()).collect()
    }

    /// Insight bundle for one narrative.
    pub fn extract(&self, text: &str) -> InsightBundle {
        let text = text.trim();
        let spans: Vec<Span> = self.entities.spans(text).collect();
        debug!("{} entity spans", spans.len());
        self.extractor.extract(text, &spans)
    }

    /// Action plan for a bundle under a category label.
    pub fn plan(&self, bundle: &InsightBundle, category: &str) -> ActionPlan {
        self.rules.evaluate(bundle, category)
    }

    /// Full report with a caller-supplied category.
    pub fn analyze(&self, text: &str, category: &str) -> IncidentReport {
        self.report(text, Classification::given(category))
    }

    /// Classify first, then extract and plan. A classifier failure is
    /// returned before any bundle is built.
    pub fn classify_and_analyze(&self, text: &str) -> Result<IncidentReport> {
        let labels = self.config.category_labels();
        let category = self.classifier.classify(text.trim(), &labels)?;
        info!(
            "Category: {} (confidence {})",
            category.label,
            category.confidence_percent()
        );
        Ok(self.report(text, category))
    }

    fn report(&self, text: &str, category: Classification) -> IncidentReport {
        let insights = self.extract(text);
        let actions = self.plan(&insights, &category.label);
        IncidentReport {
            category,
            insights,
            actions,
        }
    }
}

/// Collects collaborators for a [`Pipeline`].
pub struct PipelineBuilder {
    config: TriageConfig,
    producers: Vec<Arc<dyn SpanProducer>>,
    parser: Option<Arc<dyn AddressParser>>,
    tagger: Option<Arc<dyn AddressTagger>>,
    normalizer: Option<Arc<dyn DateNormalizer>>,
    classifier: Option<Arc<dyn CategoryClassifier>>,
}

impl PipelineBuilder {
    pub fn new(config: TriageConfig) -> Self {
        Self {
            config,
            producers: Vec::new(),
            parser: None,
            tagger: None,
            normalizer: None,
            classifier: None,
        }
    }

    /// Add an entity span producer. Producers are consulted in the order added.
    pub fn span_producer(mut self, producer: Arc<dyn SpanProducer>) -> Self {
        self.producers.push(producer);
        self
    }

    pub fn address_parser(mut self, parser: Arc<dyn AddressParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    pub fn address_tagger(mut self, tagger: Arc<dyn AddressTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    pub fn date_normalizer(mut self, normalizer: Arc<dyn DateNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn classifier(mut self, classifier: Arc<dyn CategoryClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn build(self) -> Result<Pipeline> {
        self.config.validate()?;
        let missing = |what: &str| Error::Config(format!("pipeline needs {}", what));

        let parser = self.parser.ok_or_else(|| missing("an address parser"))?;
        let tagger = self.tagger.ok_or_else(|| missing("an address tagger"))?;
        let normalizer = self.normalizer.ok_or_else(|| missing("a date normalizer"))?;
        let classifier = self.classifier.ok_or_else(|| missing("a category classifier"))?;

        let entities = self
            .producers
            .into_iter()
            .fold(EntitySourceAdapter::new(), |adapter, p| adapter.with_producer(p));

        let extractor = InsightExtractor::new(
            LocationResolver::standard(parser, tagger, &self.config.default_country),
            TemporalResolver::new(normalizer),
            SignalDetector::new(&self.config),
        );
        let rules = ActionRuleEngine::from_config(&self.config);

        info!(
            "Pipeline ready: {} span producers, {} categories, classifier={}",
            entities.len(),
            self.config.categories.len(),
            classifier.name()
        );

        Ok(Pipeline {
            config: self.config,
            entities,
            extractor,
            rules,
            classifier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_collaborators() {
        let err = Pipeline::builder(TriageConfig::default()).build();
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let mut config = TriageConfig::default();
        config.categories.clear();
        assert!(Pipeline::heuristic(config).is_err());
    }

    #[test]
    fn test_heuristic_pipeline_trims_input() {
        let pipeline = Pipeline::heuristic(TriageConfig::default()).unwrap();
        let bundle = pipeline.extract("   a man near the Riverside Mall has a rifle\n");
        assert_eq!(bundle.location, "Riverside Mall");
        assert_eq!(bundle.weapon_involved.matched_terms, vec!["rifle"]);
    }
}
