// File: src/core/config.rs
use crate::core::types::Verbosity;
use crate::error::{Result, SpellError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;
/// Delete-variant counts grow as O(len^K); beyond this the index is unusable.
pub const MAX_SUPPORTED_EDIT_DISTANCE: usize = 8;

/// Construction-time settings of a `SpellEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Bounds both the delete-index depth and the lookup radius.
    pub max_edit_distance: usize,
    /// Which suggestions `SpellEngine::suggest` keeps.
    pub verbosity: Verbosity,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            verbosity: Verbosity::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_max_edit_distance(mut self, max_edit_distance: usize) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Parses and validates a JSON document; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SUPPORTED_EDIT_DISTANCE).contains(&self.max_edit_distance) {
            return Err(SpellError::config(format!(
                "max_edit_distance must be between 1 and {}, got {}",
                MAX_SUPPORTED_EDIT_DISTANCE, self.max_edit_distance
            )));
        }
        Ok(())
    }
}
