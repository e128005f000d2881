//! Application layer for laughing-lemur
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::word_source::{WordSource, WordSourceError};
pub use use_cases::generate_combos::{
    GenerateCombosError, GenerateCombosInput, GenerateCombosOutput, GenerateCombosUseCase,
};
