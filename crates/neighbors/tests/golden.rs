//! Golden boundary cases for the window arithmetic.

use peerscope_neighbors::{ScoredCollection, ScoredEntity, WindowConfig, select_neighbors};

/// Scores [9, 8, ..., 0]: entity id i sits at rank i.
fn descending_ten() -> ScoredCollection {
    let entities = (0..10)
        .map(|i| ScoredEntity::new(i, (9 - i) as f64))
        .collect();
    ScoredCollection::new(entities).unwrap()
}

fn ids(c: &ScoredCollection, target: u64, window_size: usize) -> Vec<u64> {
    select_neighbors(c, target, &WindowConfig::new(window_size))
        .unwrap()
        .entries()
        .iter()
        .map(|e| e.id())
        .collect()
}

/// Target at rank 0: nothing above, all peer slots borrowed from below.
#[test]
fn top_rank_window() {
    let c = descending_ten();
    assert_eq!(ids(&c, 0, 4), vec![0, 1, 2, 3]);
}

/// Mirror of the top-rank case at the bottom rank.
#[test]
fn bottom_rank_window() {
    let c = descending_ten();
    assert_eq!(ids(&c, 9, 4), vec![6, 7, 8, 9]);
}

/// One step in from the top: one rank above, the rest below.
#[test]
fn near_top_window() {
    let c = descending_ten();
    assert_eq!(ids(&c, 1, 4), vec![0, 1, 2, 3]);
    assert_eq!(ids(&c, 1, 6), vec![0, 1, 2, 3, 4, 5]);
}

/// One step in from the bottom.
#[test]
fn near_bottom_window() {
    let c = descending_ten();
    assert_eq!(ids(&c, 8, 4), vec![6, 7, 8, 9]);
    assert_eq!(ids(&c, 8, 6), vec![4, 5, 6, 7, 8, 9]);
}

/// Interior target: half the window above, the remainder below.
#[test]
fn interior_window() {
    let c = descending_ten();
    assert_eq!(ids(&c, 5, 4), vec![3, 4, 5, 6]);
    assert_eq!(ids(&c, 5, 6), vec![2, 3, 4, 5, 6, 7]);
}

/// Window size equal to the collection: everything, descending.
#[test]
fn window_covers_collection() {
    let c = descending_ten();
    assert_eq!(ids(&c, 5, 10), (0..10).collect::<Vec<u64>>());
}

/// Window size beyond the collection clamps to the whole collection.
#[test]
fn window_exceeds_collection() {
    let c = descending_ten();
    assert_eq!(ids(&c, 5, 40), (0..10).collect::<Vec<u64>>());
    assert_eq!(ids(&c, 0, 40), (0..10).collect::<Vec<u64>>());
}
