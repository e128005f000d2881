//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use lemur_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default word-lookup endpoint (Datamuse `/words`)
pub const DEFAULT_ENDPOINT: &str = "https://api.datamuse.com/words";

/// Largest `max` value the Datamuse API honours
pub const MAX_RESULTS_LIMIT: u32 = 1000;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("max_results must be between 1 and 1000, got {0}")]
    InvalidMaxResults(u32),

    #[error("word_source endpoint cannot be empty")]
    EmptyEndpoint,
}

/// Raw word source configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWordSourceConfig {
    /// Word-lookup endpoint URL
    pub endpoint: String,
    /// Number of candidate words requested per lookup
    pub max_results: u32,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileWordSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_results: MAX_RESULTS_LIMIT,
            timeout_seconds: 5,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Word-lookup service settings
    pub word_source: FileWordSourceConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.word_source.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if !(1..=MAX_RESULTS_LIMIT).contains(&self.word_source.max_results) {
            return Err(ConfigValidationError::InvalidMaxResults(
                self.word_source.max_results,
            ));
        }

        if self.word_source.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        Ok(())
    }
}
