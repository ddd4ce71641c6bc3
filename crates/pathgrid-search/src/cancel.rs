//! Ready-made cancellation predicates.

use std::time::{Duration, Instant};

/// A predicate that reports cancellation once `at` has passed.
pub fn deadline(at: Instant) -> impl FnMut() -> bool {
    move || Instant::now() >= at
}

/// A predicate that reports cancellation `budget` after its creation.
pub fn timeout(budget: Duration) -> impl FnMut() -> bool {
    deadline(Instant::now() + budget)
}

/// A predicate that allows `n` polls and cancels on the next one.
///
/// Since the search polls once per expanded cell, this caps the number of
/// expansions at `n`.
pub fn after_polls(n: usize) -> impl FnMut() -> bool {
    let mut polls = 0usize;
    move || {
        polls += 1;
        polls > n
    }
}
