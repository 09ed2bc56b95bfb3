//! Scored entity and collection types.

use std::collections::HashSet;

use crate::error::SelectError;

/// A single scored entity: a loan-application identifier and its model score.
///
/// The score is a predicted default probability in this application, but the
/// selection logic only requires it to be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntity {
    id: u64,
    score: f64,
}

impl ScoredEntity {
    /// Creates a new scored entity.
    pub fn new(id: u64, score: f64) -> Self {
        Self { id, score }
    }

    /// Returns the entity identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the entity score.
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// An ordered collection of scored entities with unique identifiers.
///
/// Construction validates the invariants the selection logic relies on:
/// the collection is non-empty, every score is finite, and no identifier
/// appears twice. Input order is preserved and used to break score ties.
#[derive(Debug, Clone)]
pub struct ScoredCollection {
    entities: Vec<ScoredEntity>,
}

impl ScoredCollection {
    /// Creates a collection from entities, validating its invariants.
    ///
    /// # Errors
    ///
    /// - [`SelectError::EmptyCollection`] if `entities` is empty
    /// - [`SelectError::NonFiniteScore`] if any score is NaN or infinite
    /// - [`SelectError::DuplicateId`] if an identifier appears twice
    pub fn new(entities: Vec<ScoredEntity>) -> Result<Self, SelectError> {
        if entities.is_empty() {
            return Err(SelectError::EmptyCollection);
        }
        let mut seen = HashSet::with_capacity(entities.len());
        for e in &entities {
            if !e.score().is_finite() {
                return Err(SelectError::NonFiniteScore { id: e.id() });
            }
            if !seen.insert(e.id()) {
                return Err(SelectError::DuplicateId { id: e.id() });
            }
        }
        Ok(Self { entities })
    }

    /// Returns the entities in input order.
    pub fn entities(&self) -> &[ScoredEntity] {
        &self.entities
    }

    /// Returns the number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Always `false`: construction rejects empty input. Provided for
    /// completeness of the container API.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the score for `id`, if present.
    pub fn score_of(&self, id: u64) -> Option<f64> {
        self.entities
            .iter()
            .find(|e| e.id() == id)
            .map(|e| e.score())
    }
}
