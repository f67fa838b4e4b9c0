//! Encounter event log entries.

use serde::{Deserialize, Serialize};

/// Kinds of entries recorded in the encounter log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EncounterEventType {
    /// A payload's mechanical effect was applied to the state.
    PayloadApplied,
}

/// An immutable record in the encounter's event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterEvent {
    pub event_type: EncounterEventType,

    /// Player-facing text describing what happened.
    pub description: String,

    /// Duration counter at the time the event was recorded.
    pub timestamp: u32,
}

impl EncounterEvent {
    pub fn new(event_type: EncounterEventType, description: impl Into<String>, timestamp: u32) -> Self {
        Self {
            event_type,
            description: description.into(),
            timestamp,
        }
    }
}

impl std::fmt::Display for EncounterEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}: {}", self.timestamp, self.event_type, self.description)
    }
}
