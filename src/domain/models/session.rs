#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use super::QuizError;

// Deliberately word-boundary aware: "Incorrect: ..." contains "correct" as a
// substring but must not count as a correct answer.
static CORRECT_WORD: Lazy<Regex> = Lazy::new(|| return Regex::new(r"(?i)\bcorrect\b").unwrap());

pub fn feedback_is_correct(feedback: &str) -> bool {
    return CORRECT_WORD.is_match(feedback);
}

/// One question/answer exchange. Append-only; never mutated once recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub question: String,
    pub user_answer: String,
    pub concept: String,
    pub feedback: String,
    pub nest_level: u32,
    pub compliment: String,
}

impl Turn {
    pub fn is_correct(&self) -> bool {
        return feedback_is_correct(&self.feedback);
    }
}

/// An in-progress quiz, scoped to a single requester.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuiz {
    pub topic: String,
    pub document_summary: String,
    pub step: u32,
    pub nest_level: u32,
    pub history: Vec<Turn>,
    pub current_compliment: String,
    pub current_question: String,
}

impl ActiveQuiz {
    /// Guards against stale session ids and topic switches mid-quiz.
    pub fn ensure_topic(&self, topic: &str) -> Result<(), QuizError> {
        if self.topic != topic {
            return Err(QuizError::SessionMismatch {
                expected: self.topic.to_string(),
                requested: topic.to_string(),
            });
        }

        return Ok(());
    }

    pub fn score(&self) -> u32 {
        return self
            .history
            .iter()
            .filter(|turn| return turn.is_correct())
            .count() as u32;
    }
}

/// Final results emitted when a quiz runs out of steps. Terminal: a fresh
/// topic selection is required to quiz again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub topic: String,
    pub document_summary: String,
    pub total_steps: u32,
    pub score: u32,
    pub percentage: f64,
    pub history: Vec<Turn>,
}

impl QuizSummary {
    pub fn from_quiz(quiz: ActiveQuiz, total_steps: u32) -> QuizSummary {
        let score = quiz.score();
        let mut percentage = 0.0;
        if total_steps > 0 {
            percentage = (f64::from(score) / f64::from(total_steps) * 1000.0).round() / 10.0;
        }

        return QuizSummary {
            topic: quiz.topic,
            document_summary: quiz.document_summary,
            total_steps,
            score,
            percentage,
            history: quiz.history,
        };
    }
}

/// The quiz state machine's states. Topic collection happens before a state
/// exists; completion has no outgoing transitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QuizState {
    Active(ActiveQuiz),
    Complete(QuizSummary),
}
