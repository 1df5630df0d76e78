use super::ActiveQuiz;
use super::QuizSummary;
use super::Turn;
use crate::domain::models::QuizError;

fn turn(feedback: &str) -> Turn {
    return Turn {
        question: "What is a JVM?".to_string(),
        user_answer: "A virtual machine that runs bytecode".to_string(),
        concept: "JVM".to_string(),
        feedback: feedback.to_string(),
        nest_level: 0,
        compliment: "Nice!".to_string(),
    };
}

fn quiz_with_feedback(feedbacks: Vec<&str>) -> ActiveQuiz {
    return ActiveQuiz {
        topic: "java".to_string(),
        document_summary: "".to_string(),
        step: feedbacks.len() as u32 + 1,
        nest_level: 0,
        history: feedbacks.iter().map(|e| return turn(e)).collect(),
        current_compliment: "".to_string(),
        current_question: "".to_string(),
    };
}

#[test]
fn it_counts_correct_feedback() {
    assert!(turn("Correct!").is_correct());
    assert!(turn("correct, well done").is_correct());
    assert!(turn("That is Correct.").is_correct());
}

#[test]
fn it_does_not_count_incorrect_as_correct() {
    // "Incorrect" contains "correct" as a substring. A naive contains() check
    // would misclassify it.
    assert!(!turn("Incorrect: a JVM is not a compiler.").is_correct());
    assert!(!turn("incorrect").is_correct());
    assert!(!turn("Not quite.").is_correct());
}

#[test]
fn it_guards_the_session_topic() {
    let quiz = quiz_with_feedback(vec![]);
    assert!(quiz.ensure_topic("java").is_ok());

    let err = quiz.ensure_topic("reactjs").unwrap_err();
    match err {
        QuizError::SessionMismatch {
            expected,
            requested,
        } => {
            assert_eq!(expected, "java");
            assert_eq!(requested, "reactjs");
        }
        _ => panic!("wrong error variant"),
    }
}

#[test]
fn it_computes_completion_arithmetic() {
    let quiz = quiz_with_feedback(vec![
        "Correct!",
        "Incorrect: missed the point.",
        "Correct!",
        "Correct! Nicely put.",
        "Incorrect: not this time.",
    ]);

    let summary = QuizSummary::from_quiz(quiz, 5);
    assert_eq!(summary.score, 3);
    assert_eq!(summary.percentage, 60.0);
    assert_eq!(summary.total_steps, 5);
    assert_eq!(summary.history.len(), 5);
}

#[test]
fn it_rounds_percentage_to_one_decimal() {
    let quiz = quiz_with_feedback(vec!["Correct!"]);
    let summary = QuizSummary::from_quiz(quiz, 3);

    assert_eq!(summary.score, 1);
    assert_eq!(summary.percentage, 33.3);
}
