//! Per-tier operand and distractor-offset range tables.
//!
//! These tables are the single place where operand magnitudes live. Builders
//! never sample outside them, which is also what structurally rules out the
//! forbidden cases: `divisor` and `multiplier` ranges never contain 0, and
//! `minuend` never starts below 1 so the subtrahend range `1..=a` is never
//! empty. Multiplier/divisor ranges are deliberately smaller than the term
//! ranges to keep products and dividends readable for kids.

use std::ops::RangeInclusive;

use crate::problem_engine::models::Tier;

/// Sampling ranges for one difficulty tier.
#[derive(Debug, Clone)]
pub struct TierRanges {
    /// Addition / add-then-subtract terms.
    pub term: RangeInclusive<i32>,
    /// Subtraction `a`. Never starts below 1.
    pub minuend: RangeInclusive<i32>,
    /// Multiplication / compound-multiply `a`.
    pub multiplicand: RangeInclusive<i32>,
    /// Multiplication / compound-multiply `b`. Never contains 0.
    pub multiplier: RangeInclusive<i32>,
    /// Division / compound-divide quotient.
    pub quotient: RangeInclusive<i32>,
    /// Division / compound-divide divisor. Never contains 0.
    pub divisor: RangeInclusive<i32>,
    /// Trailing `+ c` term in the compound patterns.
    pub bonus: RangeInclusive<i32>,
    /// Distractor offsets for addition/subtraction/division-sized answers.
    pub offset_near: RangeInclusive<i32>,
    /// Distractor offsets for multiplication and compound products.
    pub offset_wide: RangeInclusive<i32>,
}

/// Look up the range table for a tier.
pub fn for_tier(tier: Tier) -> TierRanges {
    match tier {
        Tier::SingleDigit => TierRanges {
            term:         0..=9,
            minuend:      1..=9,
            multiplicand: 1..=9,
            multiplier:   1..=9,
            quotient:     1..=9,
            divisor:      1..=9,
            bonus:        0..=9,
            offset_near:  -6..=6,
            offset_wide:  -15..=15,
        },
        Tier::Teens => TierRanges {
            term:         10..=19,
            minuend:      10..=19,
            multiplicand: 10..=19,
            multiplier:   2..=9,
            quotient:     10..=19,
            divisor:      2..=9,
            bonus:        0..=19,
            offset_near:  -9..=9,
            offset_wide:  -20..=20,
        },
        Tier::TwoDigit => TierRanges {
            term:         20..=99,
            minuend:      20..=99,
            multiplicand: 20..=99,
            multiplier:   2..=9,
            quotient:     10..=50,
            divisor:      2..=9,
            bonus:        0..=99,
            offset_near:  -15..=15,
            offset_wide:  -30..=30,
        },
    }
}
