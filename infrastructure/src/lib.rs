//! Infrastructure layer for laughing-lemur
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod datamuse;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileWordSourceConfig,
};
pub use datamuse::{DatamuseConfig, DatamuseWordSource};
