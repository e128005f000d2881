//! Generate Combos use case
//!
//! Looks up animals and adjectives for a letter and pairs them at random.

use crate::ports::word_source::{WordSource, WordSourceError};
use lemur_domain::{
    Combo, DomainError, Letter, ListSize, Shortfall, animals_for, filter_adjectives,
    generate_combos,
};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while generating combos
#[derive(Error, Debug)]
pub enum GenerateCombosError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Source(#[from] WordSourceError),
}

/// Input for the GenerateCombos use case
#[derive(Debug, Clone, Copy)]
pub struct GenerateCombosInput {
    pub letter: Letter,
    pub size: ListSize,
}

impl GenerateCombosInput {
    pub fn new(letter: Letter) -> Self {
        Self {
            letter,
            size: ListSize::default(),
        }
    }

    pub fn with_size(mut self, size: ListSize) -> Self {
        self.size = size;
        self
    }
}

/// Result of a GenerateCombos run
///
/// `adjectives` and `animals` are the full candidate lists, left in the
/// order the pairing shuffle produced.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateCombosOutput {
    pub letter: Letter,
    pub combos: Vec<Combo>,
    pub shortfalls: Vec<Shortfall>,
    pub adjectives: Vec<String>,
    pub animals: Vec<String>,
}

/// Use case for generating alliterative combos
pub struct GenerateCombosUseCase<S: WordSource + 'static> {
    source: Arc<S>,
}

impl<S: WordSource + 'static> GenerateCombosUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Execute the use case with the thread-local random generator
    pub async fn execute(
        &self,
        input: GenerateCombosInput,
    ) -> Result<GenerateCombosOutput, GenerateCombosError> {
        let (animals, adjectives) = self.gather(input.letter).await?;
        Self::pair(input, animals, adjectives, &mut rand::rng())
    }

    /// Execute the use case with a caller-supplied random generator
    pub async fn execute_with_rng<R: Rng + ?Sized>(
        &self,
        input: GenerateCombosInput,
        rng: &mut R,
    ) -> Result<GenerateCombosOutput, GenerateCombosError> {
        let (animals, adjectives) = self.gather(input.letter).await?;
        Self::pair(input, animals, adjectives, rng)
    }

    /// Collect both candidate lists for the letter
    async fn gather(
        &self,
        letter: Letter,
    ) -> Result<(Vec<String>, Vec<String>), GenerateCombosError> {
        let animals: Vec<String> = animals_for(letter).iter().map(|a| a.to_string()).collect();
        debug!("{} animals in catalog for '{}'", animals.len(), letter);

        let records = self.source.candidates(letter).await?;
        let untagged = records.iter().filter(|r| r.tags.is_empty()).count();
        if untagged > 0 {
            debug!("{} of {} word records carry no tags", untagged, records.len());
        }

        let adjectives = filter_adjectives(records)?;
        info!("{} adjectives found for '{}'", adjectives.len(), letter);

        Ok((animals, adjectives))
    }

    fn pair<R: Rng + ?Sized>(
        input: GenerateCombosInput,
        mut animals: Vec<String>,
        mut adjectives: Vec<String>,
        rng: &mut R,
    ) -> Result<GenerateCombosOutput, GenerateCombosError> {
        let shortfalls = Shortfall::detect(input.size, animals.len(), adjectives.len());
        let combos = generate_combos(&mut animals, &mut adjectives, input.size, rng)?;

        Ok(GenerateCombosOutput {
            letter: input.letter,
            combos,
            shortfalls,
            adjectives,
            animals,
        })
    }
}
