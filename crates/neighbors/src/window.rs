//! Window boundary arithmetic with boundary balancing.

/// Computes the inclusive rank bounds `(lo, hi)` of a window of up to
/// `window_size` entities around `rank` in a sequence of `len` ranks.
///
/// The window counts the target itself. Allocation:
///
/// 1. Take up to `window_size / 2` ranks above the target, clamped at rank 0.
/// 2. Fill the remaining slots below the target, clamped at the end.
/// 3. If the lower side hit the end, hand its shortfall back above.
///
/// An interior target therefore gets `half` ranks above and `half - 1` below;
/// a target near either extreme keeps the full window length by borrowing the
/// missing slots from the opposite side. When `window_size >= len` the bounds
/// cover the whole sequence.
///
/// # Panics
///
/// Debug-asserts that `rank < len` and `window_size >= 1`.
pub(crate) fn window_bounds(rank: usize, len: usize, window_size: usize) -> (usize, usize) {
    debug_assert!(rank < len);
    debug_assert!(window_size >= 1);

    let half = window_size / 2;
    // Slots available to peers, target excluded.
    let peers = window_size - 1;

    let up = rank.min(half);
    let down = (len - 1 - rank).min(peers - up);
    let up = rank.min(peers - down);

    (rank - up, rank + down)
}
