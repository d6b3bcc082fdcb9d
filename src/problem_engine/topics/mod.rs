//! One builder per operation family.
//!
//! Every public function follows the same signature:
//!
//! ```ignore
//! pub fn build<R: Rng>(rng: &mut R, tier: Tier) -> Problem
//! ```
//!
//! Builders only sample operands and compute the answer; distractor
//! generation and choice shuffling are shared via `helpers::problem`.
//! The generator dispatches to these via `generator.rs`.

pub mod add_subtract;
pub mod addition;
pub mod division;
pub mod more_complex;
pub mod multiplication;
pub mod subtraction;
