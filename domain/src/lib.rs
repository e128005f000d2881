//! Domain layer for laughing-lemur
//!
//! This crate contains the core logic for building alliterative
//! "adjective animal" pairs. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Letter**: the validated, case-insensitive starting letter
//! - **Animal catalog**: a fixed per-letter list of animal names
//! - **Word records**: candidate words with part-of-speech tags, filtered
//!   down to words tagged only as adjectives
//! - **Combos**: both lists shuffled and paired by position, truncated to the
//!   requested size

pub mod animal;
pub mod combo;
pub mod config;
pub mod core;
pub mod word;

// Re-export commonly used types
pub use animal::catalog::animals_for;
pub use combo::{
    generator::generate_combos,
    value_objects::{Combo, ListKind, ListSize, Shortfall},
};
pub use config::OutputFormat;
pub use crate::core::{error::DomainError, letter::Letter};
pub use word::{
    filter::filter_adjectives,
    record::{ADJECTIVE_TAG, WordRecord},
};
