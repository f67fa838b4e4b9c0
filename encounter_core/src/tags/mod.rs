//! Narrative tags - named signals that switch on as tag values accumulate.

mod catalog;

pub use catalog::*;

use encounter_rules::{ApproachTag, EncounterState, TagValues};
use serde::{Deserialize, Serialize};

use crate::conditions::ActivationCondition;

/// A named, read-only signal driven by an activation condition.
///
/// Narrative tags never mutate encounter state. A tag kind that needs to
/// change state would be a separate type, not a variation of this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeTag {
    /// Stable identifier used for lookups.
    pub id: String,

    /// Display name.
    pub name: String,

    /// What the tag means for the player.
    #[serde(default)]
    pub description: String,

    pub condition: ActivationCondition,

    /// Approach that choice filtering should block while this tag is active.
    #[serde(default)]
    pub blocked_approach: Option<ApproachTag>,
}

impl NarrativeTag {
    pub fn new(id: impl Into<String>, name: impl Into<String>, condition: ActivationCondition) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            condition,
            blocked_approach: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_blocked_approach(mut self, approach: ApproachTag) -> Self {
        self.blocked_approach = Some(approach);
        self
    }

    pub fn is_active(&self, tags: &impl TagValues) -> bool {
        self.condition.is_active(tags)
    }

    /// Narrative tags carry no mechanical effect; this does nothing.
    ///
    /// Takes the state by shared reference, so it cannot change it.
    pub fn apply_effect(&self, _state: &EncounterState) {}

    pub fn activation_description(&self) -> String {
        self.condition.description()
    }
}
