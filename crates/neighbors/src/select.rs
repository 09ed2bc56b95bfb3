//! Window selection entry point.

use tracing::{debug, warn};

use crate::config::WindowConfig;
use crate::entity::ScoredCollection;
use crate::error::SelectError;
use crate::rank::RankIndex;
use crate::result::{NeighborWindow, WindowMode};
use crate::window::window_bounds;

/// Selects the window of entities whose scores are nearest by rank to the
/// target's score, target included.
///
/// The collection is ranked descending by score (stable: equal scores keep
/// input order) and a contiguous rank window of `window_size` entities around
/// the target is returned. When the target sits near either extreme of the
/// score distribution, slots the short side cannot fill are borrowed by the
/// opposite side, so the window keeps its full length whenever the
/// collection is large enough. A window size larger than the collection
/// clamps to the whole collection.
///
/// An odd `window_size` is a caller mistake with an explicit fallback: the
/// full sorted collection is returned unfiltered, the window is marked
/// [`WindowMode::DegradedFullSort`], and a warning is logged. Callers detect
/// this via [`NeighborWindow::is_degraded`] rather than console output.
///
/// The input collection is treated as read-only: ranking happens on an
/// internal index and the result holds copies.
///
/// # Errors
///
/// - [`SelectError::InvalidWindowSize`] if `window_size` is zero
/// - [`SelectError::TargetNotFound`] if `target_id` is absent
pub fn select_neighbors(
    collection: &ScoredCollection,
    target_id: u64,
    config: &WindowConfig,
) -> Result<NeighborWindow, SelectError> {
    config.validate()?;

    let index = RankIndex::new(collection);
    let rank = index
        .rank_of(target_id)
        .ok_or(SelectError::TargetNotFound { id: target_id })?;

    if !config.is_even() {
        warn!(
            window_size = config.window_size(),
            "odd window size: returning full sorted collection unfiltered"
        );
        let entries = index.slice(0, index.len() - 1);
        return Ok(NeighborWindow::new(
            entries,
            rank,
            0,
            WindowMode::DegradedFullSort,
        ));
    }

    let (lo, hi) = window_bounds(rank, index.len(), config.window_size());
    debug!(
        target_id,
        rank,
        lo,
        hi,
        window_size = config.window_size(),
        "selected neighbor window"
    );

    let entries = index.slice(lo, hi);
    Ok(NeighborWindow::new(entries, rank, lo, WindowMode::Windowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ScoredEntity;

    /// Ten entities, ids 0..10, scores descending 0.9, 0.8, ... 0.0.
    /// Entity id i sits at rank i.
    fn ranked_ten() -> ScoredCollection {
        let entities = (0..10)
            .map(|i| ScoredEntity::new(i, (9 - i) as f64 / 10.0))
            .collect();
        ScoredCollection::new(entities).unwrap()
    }

    #[test]
    fn test_interior_window() {
        let c = ranked_ten();
        let w = select_neighbors(&c, 5, &WindowConfig::new(4)).unwrap();
        let ids: Vec<u64> = w.entries().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![3, 4, 5, 6]);
        assert_eq!(w.target_rank(), 5);
        assert_eq!(w.first_rank(), 3);
        assert!(!w.is_degraded());
    }

    #[test]
    fn test_target_not_found() {
        let c = ranked_ten();
        let result = select_neighbors(&c, 42, &WindowConfig::new(4));
        assert!(matches!(result, Err(SelectError::TargetNotFound { id: 42 })));
    }

    #[test]
    fn test_zero_window_size() {
        let c = ranked_ten();
        let result = select_neighbors(&c, 0, &WindowConfig::new(0));
        assert!(matches!(
            result,
            Err(SelectError::InvalidWindowSize { size: 0 })
        ));
    }

    #[test]
    fn test_odd_window_degrades() {
        let c = ranked_ten();
        let w = select_neighbors(&c, 5, &WindowConfig::new(5)).unwrap();
        assert!(w.is_degraded());
        assert_eq!(w.len(), 10);
        assert_eq!(w.first_rank(), 0);
        // Still fully sorted descending.
        let ids: Vec<u64> = w.entries().iter().map(|e| e.id()).collect();
        assert_eq!(ids, (0..10).collect::<Vec<u64>>());
    }
}
