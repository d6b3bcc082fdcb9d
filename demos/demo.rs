//! Full demo of all six operation families and the session flow.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `math_drill_gen` works end to end:
//!
//! 1. **One-off problems** — one question per topic at each tier, with fixed
//!    seeds so the output is deterministic and reproducible.
//! 2. **A complete session** — 15 questions of the compound family, answered
//!    by a toy "player" that always taps the first button, ending with the
//!    star rating.
//! 3. **UI payloads** — the JSON a display client consumes for the question
//!    and results screens.

use math_drill_gen::{
    generate_problem, ui_adapter, ProblemRequest, Session, Tier, Topic,
};
use std::collections::HashSet;

/// Generate and pretty-print one problem.
fn print_problem(topic: Topic, tier: Tier, seed: u64, used: &mut HashSet<String>) {
    let problem = generate_problem(
        &ProblemRequest { topic, tier, rng_seed: Some(seed) },
        used,
    );
    println!("  [{} {}]  {}  Tier: {}", topic.symbol(), topic, problem.display_text(), tier);
    for (i, choice) in problem.choices.iter().enumerate() {
        let marker = if *choice == problem.correct_answer { "✓" } else { " " };
        println!("      ({}) {marker} {}", i + 1, choice);
    }
    println!("      key: {}", problem.unique_key());
    println!();
}

fn main() {
    // ── One problem per topic and tier ───────────────────────────────────────
    println!();
    println!("══ All six families, all three tiers ══");
    println!();

    let topics = [
        Topic::Addition,
        Topic::Subtraction,
        Topic::AddSubtract,
        Topic::Multiplication,
        Topic::Division,
        Topic::MoreComplex,
    ];
    let mut used = HashSet::new();
    let mut seed = 1001u64;
    for tier in [Tier::SingleDigit, Tier::Teens, Tier::TwoDigit] {
        for topic in topics {
            print_problem(topic, tier, seed, &mut used);
            seed += 1;
        }
    }

    // ── A full deterministic session ─────────────────────────────────────────
    // Same seed = same 15 questions every run.
    println!();
    println!("══ One full session: More Complex / Two Digit, seed=4004 ══");
    println!();

    let mut session = Session::with_seed(Topic::MoreComplex, Tier::TwoDigit, 4004);
    while !session.is_complete() {
        let problem = session.next_problem();
        // Toy player: always taps the first button.
        let picked = problem.choices[0];
        let correct = picked == problem.correct_answer;
        println!(
            "  {}  {}  tapped {} → {}",
            session.progress_text(),
            problem.display_text(),
            picked,
            if correct { "correct!" } else { "wrong" },
        );
        session.record_answer(correct);
    }
    println!();
    println!(
        "  Result: {}/{} correct — {} star(s)",
        session.correct_answers(),
        Session::TOTAL_QUESTIONS,
        session.stars_earned(),
    );

    // ── UI payloads ──────────────────────────────────────────────────────────
    // What a display client actually receives.
    println!();
    println!("══ JSON payloads for a display client ══");
    println!();

    let mut screen_session = Session::with_seed(Topic::Division, Tier::Teens, 7);
    let problem = screen_session.next_problem();
    let question = ui_adapter::question_payload(&problem, &screen_session);
    println!("{}", serde_json::to_string_pretty(&question).unwrap());

    for i in 0..Session::TOTAL_QUESTIONS {
        screen_session.record_answer(i % 2 == 0);
    }
    let results = ui_adapter::results_payload(&screen_session);
    println!("{}", serde_json::to_string_pretty(&results).unwrap());
}
