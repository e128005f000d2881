//! Value objects for combo generation

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// An "adjective animal" alliteration (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    pub adjective: String,
    pub animal: String,
}

impl Combo {
    pub fn new(adjective: impl Into<String>, animal: impl Into<String>) -> Self {
        Self {
            adjective: adjective.into(),
            animal: animal.into(),
        }
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.adjective, self.animal)
    }
}

/// Number of combos requested, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSize(NonZeroUsize);

impl ListSize {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for ListSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN)
    }
}

impl TryFrom<i64> for ListSize {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(DomainError::InvalidListSize(value))
    }
}

impl std::fmt::Display for ListSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which source list a shortfall refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Animal,
    Adjective,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Animal => "animal",
            ListKind::Adjective => "adjective",
        }
    }
}

/// A source list holding fewer entries than the requested list size
///
/// Non-fatal: output continues with however many combos can be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub list: ListKind,
    pub available: usize,
    pub requested: usize,
}

impl Shortfall {
    /// Check both source lists against the requested size, animals first
    pub fn detect(size: ListSize, animals: usize, adjectives: usize) -> Vec<Shortfall> {
        [(ListKind::Animal, animals), (ListKind::Adjective, adjectives)]
            .into_iter()
            .filter(|(_, available)| size.get() > *available)
            .map(|(list, available)| Shortfall {
                list,
                available,
                requested: size.get(),
            })
            .collect()
    }
}
