//! Action plan types.

use serde::{Deserialize, Serialize};

/// Kinds of recommended response, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Send the nearest unit to the resolved location.
    Dispatch,
    /// Mark the incident high-priority.
    FlagPriority,
    /// Notify the armed response team.
    ArmedResponse,
    /// Send medical assistance.
    MedicalAssistance,
    /// Preserve digital evidence and system logs.
    PreserveEvidence,
    /// Nothing actionable; route to manual review.
    ManualReview,
}

/// One recommended action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub text: String,
}

/// Ordered, never-empty list of recommended actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionPlan {
    actions: Vec<Action>,
}

impl ActionPlan {
    /// Wrap fired actions, falling back to the manual review action.
    pub(crate) fn from_fired(mut actions: Vec<Action>) -> Self {
        if actions.is_empty() {
            actions.push(Action {
                kind: ActionKind::ManualReview,
                text: "Review details and assign follow-up investigation.".into(),
            });
        }
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn kinds(&self) -> Vec<ActionKind> {
        self.actions.iter().map(|a| a.kind).collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Never true for a plan built by the engine.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionPlan {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
