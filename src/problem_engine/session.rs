use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::problem_engine::{
    generator,
    models::{Problem, Tier, Topic},
};

/// One play-through of 15 questions at a fixed topic and tier.
///
/// The session owns the dedup key set, the running counters, and the RNG the
/// generator draws from — there is no ambient global state. `reset` starts a
/// fresh play-through with the same topic and tier.
#[derive(Debug)]
pub struct Session {
    topic: Topic,
    tier: Tier,
    current_question: u32,
    correct_answers: u32,
    used_keys: HashSet<String>,
    rng: StdRng,
}

impl Session {
    pub const TOTAL_QUESTIONS: u32 = 15;

    /// New entropy-seeded session.
    pub fn new(topic: Topic, tier: Tier) -> Self {
        Self::from_rng(topic, tier, StdRng::from_entropy())
    }

    /// New session with a fixed seed — the full question sequence becomes
    /// reproducible.
    pub fn with_seed(topic: Topic, tier: Tier, seed: u64) -> Self {
        Self::from_rng(topic, tier, StdRng::seed_from_u64(seed))
    }

    fn from_rng(topic: Topic, tier: Tier, rng: StdRng) -> Self {
        Session {
            topic,
            tier,
            current_question: 0,
            correct_answers: 0,
            used_keys: HashSet::new(),
            rng,
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Pull the next problem, recording its key so it will not repeat within
    /// this session.
    pub fn next_problem(&mut self) -> Problem {
        generator::generate_problem_with(&mut self.rng, self.topic, self.tier, &mut self.used_keys)
    }

    /// Record the outcome of the current question and advance.
    pub fn record_answer(&mut self, correct: bool) {
        if correct {
            self.correct_answers += 1;
        }
        self.current_question += 1;
    }

    pub fn current_question(&self) -> u32 {
        self.current_question
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn is_complete(&self) -> bool {
        self.current_question >= Self::TOTAL_QUESTIONS
    }

    /// Progress line for the question screen, e.g. `"Question 4 of 15"`.
    pub fn progress_text(&self) -> String {
        format!(
            "Question {} of {}",
            self.current_question + 1,
            Self::TOTAL_QUESTIONS
        )
    }

    /// Star rating for the results screen.
    ///
    /// Canonical band table: 0–3 → 1, 4–6 → 2, 7–10 → 3, 11–14 → 4, 15 → 5.
    pub fn stars_earned(&self) -> u8 {
        match self.correct_answers {
            0..=3   => 1,
            4..=6   => 2,
            7..=10  => 3,
            11..=14 => 4,
            _       => 5,
        }
    }

    /// Start a fresh play-through: counters and the dedup set are cleared.
    pub fn reset(&mut self) {
        self.current_question = 0;
        self.correct_answers = 0;
        self.used_keys.clear();
    }

    /// Keys of every problem handed out so far this session.
    pub fn used_keys(&self) -> &HashSet<String> {
        &self.used_keys
    }
}
