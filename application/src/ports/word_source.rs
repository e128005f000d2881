//! Word source port
//!
//! Defines the interface for looking up candidate words by starting letter.

use async_trait::async_trait;
use lemur_domain::{Letter, WordRecord};
use thiserror::Error;

/// Errors that can occur while querying a word source
#[derive(Error, Debug)]
pub enum WordSourceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Word service timed out")]
    Timeout,

    #[error("API response status {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Source of candidate words for a letter
///
/// Implementations return raw records, tags included; deciding which of them
/// are adjectives is left to the caller. The HTTP-backed adapter lives in the
/// infrastructure layer, test fakes live next to the tests that use them.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Candidate words beginning with `letter`, in service order
    async fn candidates(&self, letter: Letter) -> Result<Vec<WordRecord>, WordSourceError>;
}
