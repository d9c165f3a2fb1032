//! Action rule engine: fixed, ordered decision table.
//!
//! Rules are independent: each one looks at the bundle and the category
//! only, never at what earlier rules produced. Evaluation order is the
//! output order.

use tracing::debug;
use triage_core::TriageConfig;
use triage_extract::InsightBundle;

use crate::types::*;

/// Inputs a rule may look at besides the bundle.
pub struct RuleContext<'a> {
    pub category: &'a str,
    pub cyber_category: &'a str,
}

/// One row of the decision table.
pub struct ActionRule {
    pub kind: ActionKind,
    applies: fn(&InsightBundle, &RuleContext<'_>) -> bool,
    describe: fn(&InsightBundle) -> String,
}

impl ActionRule {
    pub fn applies(&self, bundle: &InsightBundle, ctx: &RuleContext<'_>) -> bool {
        (self.applies)(bundle, ctx)
    }
}

/// Decision table in priority order. Manual review is not a row: it is
/// appended only when no row fires.
pub static RULES: [ActionRule; 5] = [
    ActionRule {
        kind: ActionKind::Dispatch,
        applies: |b, _| b.has_location(),
        describe: |b| format!("Dispatch nearest unit to {}.", b.location),
    },
    ActionRule {
        kind: ActionKind::FlagPriority,
        applies: |b, _| b.urgency.is_elevated(),
        describe: |_| "Flag as high-priority response.".into(),
    },
    ActionRule {
        kind: ActionKind::ArmedResponse,
        applies: |b, _| b.weapon_involved.present,
        describe: |_| "Notify armed response team.".into(),
    },
    ActionRule {
        kind: ActionKind::MedicalAssistance,
        applies: |b, _| b.injury_reported,
        describe: |_| "Send medical assistance.".into(),
    },
    ActionRule {
        kind: ActionKind::PreserveEvidence,
        applies: |_, ctx| ctx.category == ctx.cyber_category,
        describe: |_| "Preserve digital evidence and system logs.".into(),
    },
];

/// Stateless evaluator over [`RULES`].
#[derive(Debug, Clone)]
pub struct ActionRuleEngine {
    cyber_category: String,
}

impl ActionRuleEngine {
    pub fn new(cyber_category: impl Into<String>) -> Self {
        Self {
            cyber_category: cyber_category.into(),
        }
    }

    pub fn from_config(config: &TriageConfig) -> Self {
        Self::new(config.cyber_category.clone())
    }

    /// Evaluate every rule in order and collect the actions that fire.
    pub fn evaluate(&self, bundle: &InsightBundle, category: &str) -> ActionPlan {
        let ctx = RuleContext {
            category,
            cyber_category: &self.cyber_category,
        };
        let fired: Vec<Action> = RULES
            .iter()
            .filter(|rule| rule.applies(bundle, &ctx))
            .map(|rule| Action {
                kind: rule.kind,
                text: (rule.describe)(bundle),
            })
            .collect();
        let plan = ActionPlan::from_fired(fired);
        debug!("Action plan for category {}: {:?}", category, plan.kinds());
        plan
    }
}

impl Default for ActionRuleEngine {
    fn default() -> Self {
        Self::from_config(&TriageConfig::default())
    }
}
