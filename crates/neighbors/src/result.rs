//! Output type for window selection queries.

use crate::entity::ScoredEntity;

/// How the returned window was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// A proper peer window of up to the requested size.
    Windowed,
    /// Degraded mode: the full collection, sorted but unfiltered, returned
    /// because the requested window size was odd.
    DegradedFullSort,
}

/// Result of a neighbor window query.
///
/// Entries are in descending score order and always include the target.
/// `first_rank` anchors the window in the global ranking so callers can
/// recover each entry's rank as `first_rank + offset`.
#[derive(Debug, Clone)]
pub struct NeighborWindow {
    entries: Vec<ScoredEntity>,
    target_rank: usize,
    first_rank: usize,
    mode: WindowMode,
}

impl NeighborWindow {
    pub(crate) fn new(
        entries: Vec<ScoredEntity>,
        target_rank: usize,
        first_rank: usize,
        mode: WindowMode,
    ) -> Self {
        Self {
            entries,
            target_rank,
            first_rank,
            mode,
        }
    }

    /// Returns the window entries in descending score order.
    pub fn entries(&self) -> &[ScoredEntity] {
        &self.entries
    }

    /// Returns the target's rank in the full descending ordering.
    pub fn target_rank(&self) -> usize {
        self.target_rank
    }

    /// Returns the global rank of the first window entry.
    pub fn first_rank(&self) -> usize {
        self.first_rank
    }

    /// Returns how the window was produced.
    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    /// Returns `true` if the window is the degraded full sort.
    pub fn is_degraded(&self) -> bool {
        self.mode == WindowMode::DegradedFullSort
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the window has no entries. Never the case for a
    /// window produced by a successful selection.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` is among the window entries.
    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    /// Returns the `(lowest, highest)` scores in the window.
    ///
    /// Entries are sorted descending, so this is the last and first entry.
    ///
    /// # Panics
    ///
    /// Panics if the window is empty.
    pub fn score_range(&self) -> (f64, f64) {
        let first = self.entries.first().expect("window is never empty");
        let last = self.entries.last().expect("window is never empty");
        (last.score(), first.score())
    }
}
