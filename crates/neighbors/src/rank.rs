//! Rank index: descending-score order and id-to-rank lookup.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::entity::{ScoredCollection, ScoredEntity};

/// Per-query ranking of a collection by descending score.
///
/// Rank 0 is the highest score. The sort is stable, so entities with equal
/// scores keep their input order, which makes repeated queries over the same
/// collection return identical windows. The caller's collection is never
/// touched: ranking is an index over borrowed entities.
#[derive(Debug)]
pub(crate) struct RankIndex<'a> {
    /// Entities in rank order (rank -> entity).
    ranked: Vec<&'a ScoredEntity>,
    /// Identifier -> rank.
    by_id: HashMap<u64, usize>,
}

impl<'a> RankIndex<'a> {
    /// Builds the rank index for `collection`.
    pub(crate) fn new(collection: &'a ScoredCollection) -> Self {
        let mut ranked: Vec<&ScoredEntity> = collection.entities().iter().collect();
        // Stable sort — ties keep input order. Scores are validated finite
        // at collection construction, so the Equal fallback is unreachable.
        ranked.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(Ordering::Equal)
        });

        let by_id = ranked
            .iter()
            .enumerate()
            .map(|(rank, e)| (e.id(), rank))
            .collect();

        Self { ranked, by_id }
    }

    /// Returns the rank of `id`, if present.
    pub(crate) fn rank_of(&self, id: u64) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Returns the entity at `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= len()`.
    pub(crate) fn entity_at(&self, rank: usize) -> &ScoredEntity {
        self.ranked[rank]
    }

    /// Returns the number of ranked entities.
    pub(crate) fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns owned copies of the entities in the rank range `lo..=hi`.
    pub(crate) fn slice(&self, lo: usize, hi: usize) -> Vec<ScoredEntity> {
        self.ranked[lo..=hi].iter().map(|e| **e).collect()
    }
}
