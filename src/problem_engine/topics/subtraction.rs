use rand::Rng;

use crate::problem_engine::{
    helpers,
    models::{OperationPattern, Problem, Tier},
    ranges,
};

/// `a − b = ?` with `b` drawn from `1..=a`, so the result is never negative.
///
/// The minuend range starts at 1 (see `ranges.rs`), which keeps the
/// subtrahend range non-empty. A zero answer (`a == b`) is allowed.
pub fn build<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let r = ranges::for_tier(tier);
    let a = rng.gen_range(r.minuend);
    let b = rng.gen_range(1..=a);
    let correct = a - b;

    helpers::problem(rng, a, b, None, OperationPattern::Subtract, correct, r.offset_near)
}
