//! Triage Rules: maps an insight bundle and a category label to actions.

pub mod engine;
pub mod types;

pub use engine::{ActionRule, ActionRuleEngine, RuleContext, RULES};
pub use types::*;
