//! Encounter session - one encounter's state plus the shared catalogs it
//! runs against.

use encounter_rules::{
    ApproachTag, EncounterConfig, EncounterEvent, EncounterId, EncounterState, EncounterStatus,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::payloads::{PayloadId, PayloadOutcome, PayloadProcessor, PayloadRegistry};
use crate::tags::{NarrativeTag, TagCatalog};

/// A running encounter.
///
/// The session owns its state and only hands out shared references to it;
/// the state changes solely through [`EncounterSession::apply_payload`].
#[derive(Debug)]
pub struct EncounterSession {
    state: EncounterState,
    processor: PayloadProcessor,
    tags: Arc<TagCatalog>,
}

impl EncounterSession {
    pub fn new(config: &EncounterConfig, tags: Arc<TagCatalog>, registry: Arc<PayloadRegistry>) -> Self {
        let state = EncounterState::new(config);
        info!(
            encounter = %state.id(),
            tags = tags.len(),
            payloads = registry.len(),
            "encounter started"
        );
        Self {
            state,
            processor: PayloadProcessor::new(registry),
            tags,
        }
    }

    pub fn id(&self) -> EncounterId {
        self.state.id()
    }

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    pub fn tags(&self) -> &TagCatalog {
        &self.tags
    }

    /// Apply the chosen action's payload.
    pub fn apply_payload(&mut self, id: &PayloadId) -> Result<PayloadOutcome> {
        self.processor.apply_payload(id, &mut self.state)
    }

    /// Tags active for the current state, in catalog order.
    pub fn active_tags(&self) -> Vec<&NarrativeTag> {
        self.tags.active_tags(&self.state)
    }

    /// Approaches that active tags currently block.
    pub fn blocked_approaches(&self) -> BTreeSet<ApproachTag> {
        self.tags.blocked_approaches(&self.state)
    }

    pub fn status(&self) -> EncounterStatus {
        self.state.status()
    }

    pub fn is_over(&self) -> bool {
        self.status() != EncounterStatus::InProgress
    }

    pub fn event_log(&self) -> &[EncounterEvent] {
        self.state.event_log()
    }

    /// Serialize the event log as JSON for replay.
    pub fn export_log(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.state.event_log())
    }
}
