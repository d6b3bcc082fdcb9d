use rand::Rng;

use crate::problem_engine::{
    helpers,
    models::{OperationPattern, Problem, Tier},
    ranges,
};

/// Compound two-step problems — `a × b ± c` or `a ÷ b ± c`.
///
/// One of the four sub-patterns is chosen uniformly at random each call. The
/// multiply/divide halves reuse the same sampling rules as the plain
/// multiplication and division families; the trailing term is picked so the
/// final answer never goes negative.
pub fn build<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match rng.gen_range(0..4) {
        0 => multiply_add(rng, tier),
        1 => multiply_subtract(rng, tier),
        2 => divide_add(rng, tier),
        _ => divide_subtract(rng, tier),
    }
}

fn multiply_add<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let r = ranges::for_tier(tier);
    let a = rng.gen_range(r.multiplicand);
    let b = rng.gen_range(r.multiplier);
    let c = rng.gen_range(r.bonus);
    let correct = a * b + c;

    helpers::problem(
        rng,
        a,
        b,
        Some(c),
        OperationPattern::MultiplyAdd,
        correct,
        r.offset_wide,
    )
}

fn multiply_subtract<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let r = ranges::for_tier(tier);
    let a = rng.gen_range(r.multiplicand);
    let b = rng.gen_range(r.multiplier);
    let product = a * b;
    let c = rng.gen_range(1..=product.max(1));
    let correct = product - c;

    helpers::problem(
        rng,
        a,
        b,
        Some(c),
        OperationPattern::MultiplySubtract,
        correct,
        r.offset_wide,
    )
}

fn divide_add<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let r = ranges::for_tier(tier);
    let quotient = rng.gen_range(r.quotient);
    let divisor = rng.gen_range(r.divisor);
    let dividend = quotient * divisor;
    let c = rng.gen_range(r.bonus);
    let correct = quotient + c;

    helpers::problem(
        rng,
        dividend,
        divisor,
        Some(c),
        OperationPattern::DivideAdd,
        correct,
        r.offset_near,
    )
}

fn divide_subtract<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let r = ranges::for_tier(tier);
    let quotient = rng.gen_range(r.quotient);
    let divisor = rng.gen_range(r.divisor);
    let dividend = quotient * divisor;
    let c = rng.gen_range(1..=quotient.max(1));
    let correct = quotient - c;

    helpers::problem(
        rng,
        dividend,
        divisor,
        Some(c),
        OperationPattern::DivideSubtract,
        correct,
        r.offset_near,
    )
}
