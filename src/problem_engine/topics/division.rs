use rand::Rng;

use crate::problem_engine::{
    helpers,
    models::{OperationPattern, Problem, Tier},
    ranges,
};

/// `dividend ÷ divisor = ?` — always exact.
///
/// The quotient and divisor are sampled and the dividend is synthesized as
/// their product, never sampled independently, so there is no remainder by
/// construction.
pub fn build<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let r = ranges::for_tier(tier);
    let quotient = rng.gen_range(r.quotient);
    let divisor = rng.gen_range(r.divisor);
    let dividend = quotient * divisor;

    helpers::problem(
        rng,
        dividend,
        divisor,
        None,
        OperationPattern::Divide,
        quotient,
        r.offset_near,
    )
}
