//! Core domain concepts shared across all subdomains.
//!
//! - [`letter::Letter`] — the validated starting letter
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod letter;
