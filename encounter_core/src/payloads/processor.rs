//! Payload processor - resolve, apply, log, goal-check.

use encounter_rules::{EncounterEventType, EncounterState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use super::{PayloadId, PayloadRegistry};
use crate::error::Result;

/// What happened when a payload was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadOutcome {
    pub payload_id: PayloadId,

    /// Player-facing description recorded in the event log.
    pub description: String,

    /// Duration counter stamped on the log entry.
    pub timestamp: u32,

    /// Result of the goal-completion check that followed.
    pub goal_completed: bool,
}

/// Applies payloads to an encounter's state.
///
/// One processor per encounter session; the registry behind it is shared.
#[derive(Debug, Clone)]
pub struct PayloadProcessor {
    registry: Arc<PayloadRegistry>,
}

impl PayloadProcessor {
    pub fn new(registry: Arc<PayloadRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PayloadRegistry {
        &self.registry
    }

    /// Apply the payload named `id` to `state`.
    ///
    /// On success the effect has been applied once, exactly one
    /// `PayloadApplied` event has been appended, and the goal check has run
    /// once. An unregistered id fails with `PayloadNotFound` before anything
    /// is touched. The steps are not rolled back if a later one misbehaves.
    pub fn apply_payload(&self, id: &PayloadId, state: &mut EncounterState) -> Result<PayloadOutcome> {
        let effect = self.registry.get_effect(id).map_err(|err| {
            warn!(payload = %id, encounter = %state.id(), "payload lookup failed");
            err
        })?;

        effect.apply(state);

        // The timestamp is read after the effect so it reflects any duration
        // the effect itself advanced.
        let description = effect.description_for_player();
        let timestamp = state
            .record_event(EncounterEventType::PayloadApplied, description.clone())
            .timestamp;

        let goal_completed = state.check_goal_completion();

        debug!(
            payload = %id,
            encounter = %state.id(),
            timestamp,
            progress = state.progress(),
            pressure = state.pressure(),
            momentum = state.momentum(),
            goal_completed,
            "payload applied"
        );

        Ok(PayloadOutcome {
            payload_id: id.clone(),
            description,
            timestamp,
            goal_completed,
        })
    }
}
