//! Datamuse adapter configuration

use crate::config::{DEFAULT_ENDPOINT, FileWordSourceConfig, MAX_RESULTS_LIMIT};
use std::time::Duration;

/// Settings for [`DatamuseWordSource`](super::DatamuseWordSource)
///
/// Built once at startup from the loaded file configuration and handed to
/// the adapter; nothing is read from global state afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatamuseConfig {
    pub endpoint: String,
    pub max_results: u32,
    pub timeout: Duration,
}

impl Default for DatamuseConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_results: MAX_RESULTS_LIMIT,
            timeout: Duration::from_secs(5),
        }
    }
}

impl From<&FileWordSourceConfig> for DatamuseConfig {
    fn from(config: &FileWordSourceConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            max_results: config.max_results,
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_file_default() {
        let from_file = DatamuseConfig::from(&FileWordSourceConfig::default());
        assert_eq!(from_file, DatamuseConfig::default());
    }

    #[test]
    fn test_timeout_in_seconds() {
        let file = FileWordSourceConfig {
            timeout_seconds: 3,
            ..Default::default()
        };
        assert_eq!(DatamuseConfig::from(&file).timeout, Duration::from_secs(3));
    }
}
