//! Configuration file loading for laughing-lemur
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `LEMUR_*` environment variables
//! 3. Project root: `./lemur.toml` or `./.lemur.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/laughing-lemur/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_ENDPOINT, FileConfig, FileOutputConfig, FileWordSourceConfig,
    MAX_RESULTS_LIMIT,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
