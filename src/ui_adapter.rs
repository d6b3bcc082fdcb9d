//! JSON payloads for a display client.
//!
//! The crate itself does no rendering or transport; these builders produce
//! the `serde_json::Value` shapes a question screen and a results screen
//! consume. The client compares the tapped choice against `correct_answer`
//! and reports the outcome back via [`Session::record_answer`].

use serde_json::{json, Value};

use crate::problem_engine::{Problem, Session};

/// Build one answer-button entry.
fn choice_slot(id: usize, value: i32, correct: i32) -> Value {
    json!({
        "id": id,
        "value": value,
        "is_correct": value == correct,
    })
}

/// Payload for the question screen: question text, the three answer
/// buttons in display order, and the progress line.
pub fn question_payload(problem: &Problem, session: &Session) -> Value {
    let choices: Vec<Value> = problem
        .choices
        .iter()
        .enumerate()
        .map(|(id, &value)| choice_slot(id, value, problem.correct_answer))
        .collect();

    json!({
        "question": problem.display_text(),
        "choices": choices,
        "correct_answer": problem.correct_answer,
        "progress": session.progress_text(),
        "topic": session.topic().to_string(),
        "topic_symbol": session.topic().symbol(),
        "tier": session.tier().to_string(),
    })
}

/// Payload for the results screen: star rating and the final tally.
pub fn results_payload(session: &Session) -> Value {
    json!({
        "stars": session.stars_earned(),
        "correct": session.correct_answers(),
        "total": Session::TOTAL_QUESTIONS,
        "complete": session.is_complete(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem_engine::{Session, Tier, Topic};

    #[test]
    fn question_payload_has_three_choices_and_one_correct() {
        let mut session = Session::with_seed(Topic::Addition, Tier::SingleDigit, 11);
        let problem = session.next_problem();
        let payload = question_payload(&problem, &session);

        let choices = payload["choices"].as_array().unwrap();
        assert_eq!(choices.len(), 3);
        let correct = choices
            .iter()
            .filter(|c| c["is_correct"].as_bool().unwrap())
            .count();
        assert_eq!(correct, 1);
        assert_eq!(payload["progress"], "Question 1 of 15");
        assert_eq!(payload["topic_symbol"], "+");
    }

    #[test]
    fn results_payload_reports_stars_and_tally() {
        let mut session = Session::with_seed(Topic::Division, Tier::Teens, 5);
        for i in 0..Session::TOTAL_QUESTIONS {
            let _ = session.next_problem();
            session.record_answer(i < 8);
        }
        let payload = results_payload(&session);
        assert_eq!(payload["stars"], 3);
        assert_eq!(payload["correct"], 8);
        assert_eq!(payload["total"], 15);
        assert_eq!(payload["complete"], true);
    }
}
