use rand::Rng;

use crate::problem_engine::{
    helpers,
    models::{OperationPattern, Problem, Tier},
    ranges,
};

/// `a + b − c = ?` with `c` drawn from `0..=a + b`, so the result is never
/// negative.
pub fn build<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let r = ranges::for_tier(tier);
    let a = rng.gen_range(r.term.clone());
    let b = rng.gen_range(r.term);
    let c = rng.gen_range(0..=a + b);
    let correct = a + b - c;

    helpers::problem(
        rng,
        a,
        b,
        Some(c),
        OperationPattern::AddSubtract,
        correct,
        r.offset_near,
    )
}
