//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Input character ({0}) is not a valid letter")]
    InvalidLetter(String),

    #[error("List size must be a positive integer, got {0}")]
    InvalidListSize(i64),

    #[error("Empty animal list generated")]
    NoAnimals,

    #[error("Empty adjective list generated")]
    NoAdjectives,

    #[error("Missing required prop [word] in word record #{index} (tags: {tags:?})")]
    MissingWord { index: usize, tags: Vec<String> },
}

impl DomainError {
    /// Check if this error means one side of the pairing had nothing to offer
    pub fn is_empty_result(&self) -> bool {
        matches!(self, DomainError::NoAnimals | DomainError::NoAdjectives)
    }
}
