//! Runtime types.

use std::fmt::Write;

use serde::Serialize;
use triage_core::Classification;
use triage_extract::InsightBundle;
use triage_rules::ActionPlan;

/// Everything derived from one narrative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentReport {
    pub category: Classification,
    pub insights: InsightBundle,
    pub actions: ActionPlan,
}

impl IncidentReport {
    /// Insight rows followed by the category rows.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = self.insights.rows();
        rows.push(("Complaint Category", self.category.label.clone()));
        rows.push(("Category Confidence", self.category.confidence_percent()));
        rows
    }

    /// Plain-text rendering: insight table, then numbered next steps.
    pub fn render(&self) -> String {
        let rows = self.rows();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "=== Extracted Insights ===");
        for (label, value) in &rows {
            let _ = writeln!(out, "{:<width$}  {}", label, value, width = width);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "=== Actionable Next Steps ===");
        for (i, action) in self.actions.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, action.text);
        }
        out
    }
}
