//! Category classification contract.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Winning label and the classifier's confidence in it (0.0..=1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub confidence: f64,
}

impl Classification {
    /// A label supplied by the caller rather than a model.
    pub fn given(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            confidence: 1.0,
        }
    }

    /// Confidence as a whole percentage, e.g. `"87%"`. Non-finite values
    /// render as `"0%"`.
    pub fn confidence_percent(&self) -> String {
        let confidence = if self.confidence.is_finite() {
            self.confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        format!("{:.0}%", confidence * 100.0)
    }
}

/// Picks one label from a closed set for a narrative.
pub trait CategoryClassifier: Send + Sync {
    fn name(&self) -> &str;

    fn classify(&self, text: &str, labels: &[&str]) -> Result<Classification>;
}
