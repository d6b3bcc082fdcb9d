//! # math_drill_gen
//!
//! A fully offline, deterministic arithmetic quiz generator for a children's
//! math game.
//!
//! This library produces multiple-choice arithmetic problems across six
//! operation families (addition, subtraction, add & subtract, multiplication,
//! division, and compound "more complex" two-step expressions) at three
//! difficulty tiers. Each problem carries a correct answer and two plausible
//! distractors, shuffled into three choices, and a per-session dedup set
//! keeps questions from repeating.
//!
//! ## How it works
//!
//! 1. Create a [`ProblemRequest`] with a topic, tier, and optional RNG seed —
//!    or a [`Session`] for a full 15-question play-through.
//! 2. Call [`generate_problem`] — the engine samples operands from the tier's
//!    range table, computes the answer, builds two distractors at least 3
//!    away from everything else, shuffles the choices, and retries (up to
//!    100 times) until the problem's signature is new for this session.
//! 3. The returned [`Problem`] has the question text, the correct answer, and
//!    the three choices — ready to display in any UI.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` (or
//!   [`Session::with_seed`]) to reproduce the exact same problems every time
//!   — useful for tests and progress tracking.
//! - **Safe by construction**: subtraction never goes negative, division is
//!   always exact (the dividend is synthesized from quotient × divisor), and
//!   divisor ranges never contain zero.
//! - **Unique keys**: each problem has a `unique_key` that normalizes
//!   commutative operand order, so `3 + 7` and `7 + 3` count as the same
//!   question.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashSet;
//! use math_drill_gen::{generate_problem, ProblemRequest, Session, Tier, Topic};
//!
//! // One-off problem with an explicit dedup set:
//! let mut used = HashSet::new();
//! let request = ProblemRequest {
//!     topic: Topic::Multiplication,
//!     tier: Tier::SingleDigit,
//!     rng_seed: Some(42),
//! };
//! let problem = generate_problem(&request, &mut used);
//! println!("Q: {}", problem.display_text());
//! assert!(problem.choices.contains(&problem.correct_answer));
//!
//! // Full session — it owns the dedup set and the counters:
//! let mut session = Session::with_seed(Topic::MoreComplex, Tier::TwoDigit, 7);
//! while !session.is_complete() {
//!     let p = session.next_problem();
//!     let picked = p.choices[0];
//!     session.record_answer(picked == p.correct_answer);
//! }
//! println!("Stars: {}", session.stars_earned());
//! ```

pub mod problem_engine;
pub mod ui_adapter;

// Convenience re-exports so callers can use `math_drill_gen::generate_problem`
// directly without reaching into `problem_engine::`.
pub use problem_engine::{
    generate_problem, generate_problem_with, OperationPattern, Problem, ProblemRequest, Session,
    Tier, Topic,
};
