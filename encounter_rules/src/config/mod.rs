//! Encounter configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating an [`EncounterConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Parameters of a single encounter session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// Upper bound for focus points.
    pub max_focus: u32,

    /// Focus points at the start of the encounter.
    pub starting_focus: u32,

    /// Number of duration steps before the encounter runs out.
    pub max_duration: u32,

    /// Progress needed to complete the encounter goal.
    pub progress_goal: u32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            max_focus: 6,
            starting_focus: 6,
            max_duration: 8,
            progress_goal: 10,
        }
    }
}

impl EncounterConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EncounterConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_focus == 0 {
            return Err(ConfigError::Invalid("max_focus must be positive".into()));
        }
        if self.starting_focus > self.max_focus {
            return Err(ConfigError::Invalid(format!(
                "starting_focus {} exceeds max_focus {}",
                self.starting_focus, self.max_focus
            )));
        }
        if self.max_duration == 0 {
            return Err(ConfigError::Invalid("max_duration must be positive".into()));
        }
        if self.progress_goal == 0 {
            return Err(ConfigError::Invalid("progress_goal must be positive".into()));
        }
        Ok(())
    }
}
