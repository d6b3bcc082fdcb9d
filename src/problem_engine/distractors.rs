//! Wrong-answer generation and choice shuffling.
//!
//! Distractors must stay plausible (drawn from a difficulty-scaled offset
//! window around the correct answer) while remaining clearly distinct: every
//! choice is at least 3 away from every other choice, and nothing is ever
//! negative.

use rand::Rng;

/// Produce exactly 2 wrong answers for `correct`.
///
/// Candidate offsets are the members of `offsets` whose magnitude is ≥ 3,
/// shuffled, then greedily accepted while they keep ≥ 3 spacing from the
/// correct answer and each other and stay non-negative. If the shuffled
/// candidates run out (small windows near zero), an expanding search over
/// `correct + 3, correct + 6, correct + 9, …` fills the remaining slots —
/// that search always terminates because the offsets grow without bound.
pub fn wrong_answers<R: Rng>(
    rng: &mut R,
    correct: i32,
    offsets: std::ops::RangeInclusive<i32>,
) -> [i32; 2] {
    let mut candidates: Vec<i32> = offsets.filter(|o| o.abs() >= 3).collect();

    // Fisher-Yates shuffle
    for i in (1..candidates.len()).rev() {
        let j = rng.gen_range(0..=i);
        candidates.swap(i, j);
    }

    let mut wrong: Vec<i32> = Vec::with_capacity(2);
    for offset in candidates {
        if wrong.len() == 2 {
            break;
        }
        let candidate = correct + offset;
        // |offset| >= 3 already guarantees spacing from the correct answer.
        if candidate >= 0 && wrong.iter().all(|w| (w - candidate).abs() >= 3) {
            wrong.push(candidate);
        }
    }

    // Expanding fallback. Candidates here are always >= correct + 3, so
    // non-negativity and distance from the correct answer hold for free.
    let mut step = 3;
    while wrong.len() < 2 {
        let candidate = correct + step;
        if wrong.iter().all(|w| (w - candidate).abs() >= 3) {
            wrong.push(candidate);
        }
        step += 3;
    }

    [wrong[0], wrong[1]]
}

/// Place `correct` and the two distractors in uniformly random order.
pub fn shuffled_choices<R: Rng>(rng: &mut R, correct: i32, wrong: [i32; 2]) -> [i32; 3] {
    let mut choices = [correct, wrong[0], wrong[1]];

    // Fisher-Yates shuffle
    for i in (1..choices.len()).rev() {
        let j = rng.gen_range(0..=i);
        choices.swap(i, j);
    }

    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spacing_ok(values: &[i32]) -> bool {
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                if (values[i] - values[j]).abs() < 3 {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn wrong_answers_keep_spacing_and_sign() {
        let mut rng = StdRng::seed_from_u64(42);
        for correct in 0..=120 {
            let wrong = wrong_answers(&mut rng, correct, -15..=15);
            let all = [correct, wrong[0], wrong[1]];
            assert!(spacing_ok(&all), "spacing violated for correct={correct}: {all:?}");
            assert!(wrong[0] >= 0 && wrong[1] >= 0, "negative distractor for correct={correct}");
        }
    }

    #[test]
    fn zero_correct_answer_still_yields_two_distractors() {
        // Near zero, most negative offsets are unusable; the generator must
        // still find two well-spaced non-negative values.
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let wrong = wrong_answers(&mut rng, 0, -6..=6);
            assert!(wrong[0] >= 3 && wrong[1] >= 3, "seed={seed}: {wrong:?}");
            assert!((wrong[0] - wrong[1]).abs() >= 3, "seed={seed}: {wrong:?}");
        }
    }

    #[test]
    fn tight_window_triggers_expanding_fallback() {
        // Offsets -3..=3 leave only {-3, +3}; with correct=1 the negative
        // side lands below zero, so at most one shuffled candidate survives
        // and the expanding search must supply the rest.
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let wrong = wrong_answers(&mut rng, 1, -3..=3);
            let all = [1, wrong[0], wrong[1]];
            assert!(spacing_ok(&all), "seed={seed}: {all:?}");
            assert!(wrong[0] >= 0 && wrong[1] >= 0, "seed={seed}: {wrong:?}");
        }
    }

    #[test]
    fn shuffled_choices_contain_all_three_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let choices = shuffled_choices(&mut rng, 10, [14, 3]);
        let mut sorted = choices;
        sorted.sort_unstable();
        assert_eq!(sorted, [3, 10, 14]);
    }

    #[test]
    fn shuffle_puts_correct_answer_in_every_position() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let choices = shuffled_choices(&mut rng, 10, [14, 3]);
            let pos = choices.iter().position(|&v| v == 10).unwrap();
            seen[pos] = true;
        }
        assert_eq!(seen, [true; 3], "correct answer never landed in some slot");
    }

    #[test]
    fn wrong_answers_are_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            wrong_answers(&mut rng, 24, -15..=15)
        };
        assert_eq!(make(5), make(5));
    }
}
