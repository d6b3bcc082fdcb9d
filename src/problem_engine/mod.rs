//! Core problem engine — generation, distractors, deduplication, and session
//! progress.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: topics, tiers, patterns, `Problem`, request struct |
//! | `ranges`      | Per-tier operand and distractor-offset range tables |
//! | `distractors` | Wrong-answer generation with ≥3 spacing and the choice shuffle |
//! | `helpers`     | Shared assembly that every topic builder ends with |
//! | `generator`   | Entry points `generate_problem` / `generate_problem_with` — dispatch + dedup retry |
//! | `topics`      | Six operation-family builders (addition … compound) |
//! | `session`     | 15-question session: counters, star rating, owns the dedup set |

pub mod distractors;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod ranges;
pub mod session;
pub mod topics;

// Re-export the public API surface so callers can use
// `problem_engine::generate_problem` without reaching into sub-modules.
pub use generator::{generate_problem, generate_problem_with};
pub use models::{OperationPattern, Problem, ProblemRequest, Tier, Topic};
pub use session::Session;
