//! Parser configuration
//!
//! Limits on the parser's scratch buffers. Every limit bounds memory for
//! adversarial input; exceeding one truncates rather than failing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_MAX_PARAMS;

/// Scratch-buffer limits for [`Parser`](crate::parser::Parser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum number of CSI parameters kept per sequence
    pub max_params: usize,
    /// Maximum number of intermediate/private-prefix bytes kept per sequence
    pub max_intermediates: usize,
    /// Maximum OSC payload length in bytes
    pub max_osc_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_params: DEFAULT_MAX_PARAMS,
            max_intermediates: 4,
            max_osc_len: 65536,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ParserConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject limits that would make the parser unable to decode anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_params == 0 {
            return Err(ConfigError::Invalid("max_params must be at least 1".into()));
        }
        if self.max_intermediates == 0 {
            return Err(ConfigError::Invalid(
                "max_intermediates must be at least 1".into(),
            ));
        }
        if self.max_osc_len == 0 {
            return Err(ConfigError::Invalid("max_osc_len must be at least 1".into()));
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
