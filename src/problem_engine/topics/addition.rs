use rand::Rng;

use crate::problem_engine::{
    helpers,
    models::{OperationPattern, Problem, Tier},
    ranges,
};

/// `a + b = ?` with both terms drawn independently from the tier's term range.
pub fn build<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let r = ranges::for_tier(tier);
    let a = rng.gen_range(r.term.clone());
    let b = rng.gen_range(r.term);
    let correct = a + b;

    helpers::problem(rng, a, b, None, OperationPattern::Add, correct, r.offset_near)
}
