use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::problem_engine::{
    models::{Problem, ProblemRequest, Tier, Topic},
    topics,
};

/// Generation attempts before giving up on uniqueness.
const MAX_ATTEMPTS: usize = 100;

/// Build one candidate problem, ignoring the dedup set.
fn build<R: Rng>(rng: &mut R, topic: Topic, tier: Tier) -> Problem {
    match topic {
        Topic::Addition       => topics::addition::build(rng, tier),
        Topic::Subtraction    => topics::subtraction::build(rng, tier),
        Topic::AddSubtract    => topics::add_subtract::build(rng, tier),
        Topic::Multiplication => topics::multiplication::build(rng, tier),
        Topic::Division       => topics::division::build(rng, tier),
        Topic::MoreComplex    => topics::more_complex::build(rng, tier),
    }
}

/// Core generation loop over a caller-owned RNG.
///
/// Attempts up to 100 candidates and returns the first whose
/// [`unique_key`](Problem::unique_key) is absent from `used_keys`, inserting
/// the key on acceptance. If every attempt collides (the problem space is
/// effectively exhausted — only realistic for the smallest ranges), one final
/// candidate is returned without checking or recording its key: a rare,
/// harmless repeat rather than a failure.
pub fn generate_problem_with<R: Rng>(
    rng: &mut R,
    topic: Topic,
    tier: Tier,
    used_keys: &mut HashSet<String>,
) -> Problem {
    for _ in 0..MAX_ATTEMPTS {
        let problem = build(rng, topic, tier);
        let key = problem.unique_key();
        if !used_keys.contains(&key) {
            used_keys.insert(key);
            return problem;
        }
    }

    // Fallback of last resort: accept a repeat.
    build(rng, topic, tier)
}

/// Generate one problem whose key is not yet in `used_keys`.
///
/// The RNG comes from `request.rng_seed` (reproducible) or OS entropy. On
/// success the problem's key is inserted into `used_keys`; see
/// [`generate_problem_with`] for the exhausted-space fallback.
pub fn generate_problem(request: &ProblemRequest, used_keys: &mut HashSet<String>) -> Problem {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    generate_problem_with(&mut rng, request.topic, request.tier, used_keys)
}
