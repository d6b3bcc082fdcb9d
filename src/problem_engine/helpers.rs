//! Shared assembly used by every topic builder.
//!
//! All builders end the same way: generate two distractors around the correct
//! answer, shuffle the three choices, and wrap everything in a [`Problem`].
//! Centralising that keeps the topic files down to their sampling rules.
//!
//! ## RNG ordering
//!
//! Operands are always sampled before distractors, and distractor offsets
//! before the final choice shuffle. Tests rely on this call order for
//! seed-stable output, so new builders must keep it.

use rand::Rng;

use crate::problem_engine::{
    distractors,
    models::{OperationPattern, Problem},
};

/// Build a [`Problem`] from sampled operands and their computed answer.
///
/// `offsets` is the distractor window for this pattern (near for
/// addition/subtraction/division-sized answers, wide for products).
pub fn problem<R: Rng>(
    rng: &mut R,
    a: i32,
    b: i32,
    c: Option<i32>,
    pattern: OperationPattern,
    correct: i32,
    offsets: std::ops::RangeInclusive<i32>,
) -> Problem {
    let wrong = distractors::wrong_answers(rng, correct, offsets);
    let choices = distractors::shuffled_choices(rng, correct, wrong);
    Problem {
        a,
        b,
        c,
        pattern,
        correct_answer: correct,
        choices,
    }
}
