//! Payloads - identifiers naming mechanical effects, and the pipeline that
//! applies them.
//!
//! The pipeline for a single payload:
//! 1. **Resolve**: look the payload up in the [`PayloadRegistry`]
//! 2. **Apply**: run the effect against the encounter state
//! 3. **Log**: append a `PayloadApplied` event stamped with the duration counter
//! 4. **Check**: run the state's goal-completion check

mod effects;
mod processor;
mod registry;

pub use effects::*;
pub use processor::*;
pub use registry::*;

use encounter_rules::EncounterState;
use serde::{Deserialize, Serialize};

/// Identifier of a registered payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayloadId(pub String);

impl PayloadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PayloadId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PayloadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A unit of state mutation with a player-facing description.
///
/// Effects hold no per-session state of their own. Looking an effect up is
/// free of side effects; applying it is not idempotent.
pub trait MechanicalEffect: std::fmt::Debug + Send + Sync {
    /// Mutate the encounter state. Must not panic for normal game ranges.
    fn apply(&self, state: &mut EncounterState);

    fn description_for_player(&self) -> String;
}
