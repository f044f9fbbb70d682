//! Rank-biased parent selection.
//!
//! The default selection scheme of the engine. It assumes the population is
//! already rank-sorted, best first, and biases parent picks toward low
//! (better) ranks with a selection-probability density that decreases
//! approximately linearly with rank.

use crate::random::RandomSource;

/// Selects two distinct parent indices from a rank-sorted population of
/// `size` individuals, biased toward low ranks.
///
/// Rejection sampling: a candidate index `p` is drawn uniformly in
/// `[0, size)` together with an independent ceiling draw `f`, and kept only
/// when `p <= f`. An index `p` therefore survives with probability
/// proportional to `size - p`, which makes the induced density over rank
/// linearly decreasing: rank 0 is about twice as likely as the uniform
/// probability, the worst rank almost never selected. The second parent is
/// drawn the same way with the extra rejection condition `p2 == p1`.
///
/// The exact draw order (`f` before `p`, pair redrawn together on
/// rejection) is part of the engine's determinism contract; reordering the
/// draws changes every downstream result for a fixed seed.
///
/// # Panics
/// Panics if `size < 2`: two distinct indices cannot be selected.
pub fn select_rank_biased(size: usize, rng: &mut RandomSource) -> (usize, usize) {
    assert!(size >= 2, "parent selection requires at least 2 individuals");

    let p1 = loop {
        let f1 = rng.uniform_int(size);
        let p1 = rng.uniform_int(size);
        if p1 <= f1 {
            break p1;
        }
    };

    let p2 = loop {
        let f2 = rng.uniform_int(size);
        let p2 = rng.uniform_int(size);
        if p2 != p1 && p2 <= f2 {
            break p2;
        }
    };

    (p1, p2)
}
