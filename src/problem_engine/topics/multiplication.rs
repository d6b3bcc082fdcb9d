use rand::Rng;

use crate::problem_engine::{
    helpers,
    models::{OperationPattern, Problem, Tier},
    ranges,
};

/// `a × b = ?` — multiplicand from the full tier range, multiplier from the
/// smaller multiplier range so products stay readable.
pub fn build<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let r = ranges::for_tier(tier);
    let a = rng.gen_range(r.multiplicand);
    let b = rng.gen_range(r.multiplier);
    let correct = a * b;

    helpers::problem(rng, a, b, None, OperationPattern::Multiply, correct, r.offset_wide)
}
