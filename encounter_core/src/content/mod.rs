//! Content loading - builds the shared tag catalog and payload registry from
//! TOML.
//!
//! ```toml
//! [encounter]
//! max_focus = 6
//! progress_goal = 10
//!
//! [[tags]]
//! id = "intimidation_tactics"
//! name = "Intimidation Tactics"
//! blocked_approach = "Rapport"
//! condition = { kind = "threshold", tag = "Dominance", threshold = 3 }
//!
//! [[payloads]]
//! id = "press_advantage"
//! effect = { kind = "momentum", amount = 2 }
//! ```

use encounter_rules::{ConfigError, EncounterConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::error::{EngineError, Result};
use crate::payloads::{EffectSpec, PayloadId, PayloadRegistry, MAX_EFFECT_DEPTH};
use crate::session::EncounterSession;
use crate::tags::{NarrativeTag, TagCatalog};

/// Errors raised while reading content files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A payload entry in a content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadDefinition {
    pub id: PayloadId,
    pub effect: EffectSpec,
}

/// Raw content as written in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub encounter: EncounterConfig,
    pub tags: Vec<NarrativeTag>,
    pub payloads: Vec<PayloadDefinition>,
}

impl ContentConfig {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, ContentError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ContentError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate the content and build the shared catalogs.
    pub fn build(self) -> Result<EncounterContent> {
        self.encounter.validate().map_err(ContentError::from)?;

        let tags = TagCatalog::new(self.tags)?;

        let mut registry = PayloadRegistry::new();
        for payload in self.payloads {
            let depth = payload.effect.depth();
            if depth > MAX_EFFECT_DEPTH {
                return Err(EngineError::EffectTooDeep {
                    payload: payload.id,
                    depth,
                    max: MAX_EFFECT_DEPTH,
                });
            }
            registry.register(payload.id, payload.effect)?;
        }

        info!(tags = tags.len(), payloads = registry.len(), "encounter content loaded");

        Ok(EncounterContent {
            config: self.encounter,
            tags: Arc::new(tags),
            registry: Arc::new(registry),
        })
    }
}

/// Validated content, ready to start sessions from.
#[derive(Debug, Clone)]
pub struct EncounterContent {
    pub config: EncounterConfig,
    pub tags: Arc<TagCatalog>,
    pub registry: Arc<PayloadRegistry>,
}

impl EncounterContent {
    /// Load and build content from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        ContentConfig::load(path)?.build()
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        ContentConfig::from_toml_str(text)?.build()
    }

    /// Start a new encounter that shares this content's catalogs.
    pub fn start_session(&self) -> EncounterSession {
        EncounterSession::new(&self.config, self.tags.clone(), self.registry.clone())
    }
}
