//! Keyword-count category classifier standing in for a zero-shot model.

use std::collections::HashMap;

use tracing::debug;
use triage_core::{CategoryClassifier, CategorySpec, Classification, Error, Result, TriageConfig};

pub struct KeywordClassifier {
    keywords: HashMap<String, Vec<String>>,
}

impl KeywordClassifier {
    pub fn new(categories: &[CategorySpec]) -> Self {
        let keywords = categories
            .iter()
            .map(|c| {
                let kws = c.keywords.iter().map(|k| k.to_lowercase()).collect();
                (c.label.clone(), kws)
            })
            .collect();
        Self { keywords }
    }

    pub fn from_config(config: &TriageConfig) -> Self {
        Self::new(&config.categories)
    }

    /// Distinct keywords of `label` present in the lowered text.
    fn hits(&self, lowered: &str, label: &str) -> usize {
        self.keywords
            .get(label)
            .map(|kws| kws.iter().filter(|k| lowered.contains(k.as_str())).count())
            .unwrap_or(0)
    }
}

impl CategoryClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword-classifier"
    }

    fn classify(&self, text: &str, labels: &[&str]) -> Result<Classification> {
        let first = labels
            .first()
            .ok_or_else(|| Error::Input("no candidate labels".into()))?;

        let lowered = text.to_lowercase();
        let scores: Vec<(&str, usize)> = labels.iter().map(|l| (*l, self.hits(&lowered, l))).collect();
        let total: usize = scores.iter().map(|(_, s)| s).sum();

        // ties go to the earlier label
        let mut best = (*first, 0usize);
        for (label, score) in &scores {
            if *score > best.1 {
                best = (*label, *score);
            }
        }

        let confidence = if total == 0 {
            0.0
        } else {
            best.1 as f64 / total as f64
        };
        debug!("Classified as {} ({} of {} keyword hits)", best.0, best.1, total);

        Ok(Classification {
            label: best.0.to_string(),
            confidence,
        })
    }
}
