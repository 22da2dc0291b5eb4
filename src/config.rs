//! Indexer configuration
//!
//! Loaded from TOML; every field has a default, so a partial file (or no
//! file at all) is valid. The defaults reproduce the standard tokenizer
//! and query behaviour.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SubtitleError};

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Tokens shorter than this many characters are dropped
    pub min_word_len: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { min_word_len: 2 }
    }
}

/// Query configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Window used by `words_near_default`, centred on the playback position
    pub default_window_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_window_ms: 2000,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabConfig {
    pub tokenizer: TokenizerConfig,
    pub query: QueryConfig,
    pub logging: LoggingConfig,
}

impl VocabConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: VocabConfig =
            toml::from_str(content).map_err(|e| SubtitleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SubtitleError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tokenizer.min_word_len == 0 {
            return Err(SubtitleError::Config(
                "tokenizer.min_word_len must be at least 1".to_string(),
            ));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(SubtitleError::Config(format!(
                "unknown logging.format {:?} (expected \"pretty\" or \"json\")",
                other
            ))),
        }
    }
}
