//! Insight bundle and the assembler that fills it.

use serde::{Deserialize, Serialize};
use tracing::debug;
use triage_core::NOT_FOUND;

use crate::location::LocationResolver;
use crate::signals::{SignalDetector, Urgency, WeaponFinding};
use crate::span::Span;
use crate::suspect::extract_suspect_description;
use crate::temporal::TemporalResolver;

/// Structured summary of one narrative. Every field is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBundle {
    pub location: String,
    pub occurred_at: String,
    pub urgency: Urgency,
    pub weapon_involved: WeaponFinding,
    pub injury_reported: bool,
    pub suspect_description: String,
    pub witness_present: bool,
}

impl InsightBundle {
    /// Bundle for a narrative where nothing was found.
    pub fn empty() -> Self {
        Self {
            location: NOT_FOUND.to_string(),
            occurred_at: NOT_FOUND.to_string(),
            urgency: Urgency::Normal,
            weapon_involved: WeaponFinding::default(),
            injury_reported: false,
            suspect_description: NOT_FOUND.to_string(),
            witness_present: false,
        }
    }

    pub fn has_location(&self) -> bool {
        self.location != NOT_FOUND
    }

    /// Flat `(label, value)` rows for table rendering.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Location", self.location.clone()),
            ("Time", self.occurred_at.clone()),
            ("Urgency", self.urgency.to_string()),
            ("Weapon Involved", self.weapon_involved.to_string()),
            ("Injury Reported", yes_no(self.injury_reported)),
            ("Suspect Description", self.suspect_description.clone()),
            ("Witness Present", yes_no(self.witness_present)),
        ]
    }
}

fn yes_no(flag: bool) -> String {
    String::from(if flag { "Yes" } else { "No" })
}

/// Runs every resolver and detector over one narrative.
pub struct InsightExtractor {
    location: LocationResolver,
    temporal: TemporalResolver,
    signals: SignalDetector,
}

impl InsightExtractor {
    pub fn new(location: LocationResolver, temporal: TemporalResolver, signals: SignalDetector) -> Self {
        Self {
            location,
            temporal,
            signals,
        }
    }

    /// Assemble a bundle from the narrative and its pre-fetched spans.
    pub fn extract(&self, text: &str, spans: &[Span]) -> InsightBundle {
        let bundle = InsightBundle {
            location: self.location.resolve(text, spans),
            occurred_at: self.temporal.resolve(spans),
            urgency: self.signals.urgency(text),
            weapon_involved: self.signals.weapon(text),
            injury_reported: self.signals.injury_reported(text),
            suspect_description: extract_suspect_description(text),
            witness_present: self.signals.witness_present(text),
        };
        debug!(
            "Extracted insights: location={}, time={}, urgency={}",
            bundle.location, bundle.occurred_at, bundle.urgency
        );
        bundle
    }
}
