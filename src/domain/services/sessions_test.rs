use anyhow::Result;
use test_utils::temp_dir;

use super::Sessions;
use crate::domain::models::ActiveQuiz;
use crate::domain::models::Turn;

fn quiz() -> ActiveQuiz {
    return ActiveQuiz {
        topic: "java".to_string(),
        document_summary: "".to_string(),
        step: 2,
        nest_level: 1,
        history: vec![Turn {
            question: "Now, what is a variable?".to_string(),
            user_answer: "A named storage location".to_string(),
            concept: "variables".to_string(),
            feedback: "Correct!".to_string(),
            nest_level: 0,
            compliment: "Welcome!".to_string(),
        }],
        current_compliment: "Good.".to_string(),
        current_question: "Now, what is variable shadowing?".to_string(),
    };
}

#[test]
fn it_creates_short_ids() {
    let id = Sessions::create_id();
    assert_eq!(id.split('-').count(), 2);
}

#[tokio::test]
async fn it_saves_and_loads_a_session() -> Result<()> {
    let sessions = Sessions::new(temp_dir("sessions"));
    sessions.save("abc-123", &quiz()).await?;

    let record = sessions.load("abc-123").await?;

    assert_eq!(record.id, "abc-123");
    assert_eq!(record.quiz, quiz());

    sessions.delete_all().await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_a_missing_session() {
    let sessions = Sessions::new(temp_dir("sessions"));
    let res = sessions.load("nope").await;

    assert!(res.is_err());
}

#[tokio::test]
async fn it_deletes_a_session() -> Result<()> {
    let sessions = Sessions::new(temp_dir("sessions"));
    sessions.save("abc-123", &quiz()).await?;
    sessions.delete("abc-123").await?;

    assert!(sessions.load("abc-123").await.is_err());
    assert!(sessions.list().await?.is_empty());

    sessions.delete_all().await?;
    return Ok(());
}

#[tokio::test]
async fn it_deletes_missing_sessions_quietly() -> Result<()> {
    let sessions = Sessions::new(temp_dir("sessions"));
    sessions.delete("never-existed").await?;

    return Ok(());
}

#[tokio::test]
async fn it_lists_sessions_with_a_corrupt_timestamp() -> Result<()> {
    let sessions = Sessions::new(temp_dir("sessions"));
    sessions.save("good-session", &quiz()).await?;

    let mut record = sessions.load("good-session").await?;
    record.id = "bad-session".to_string();
    record.timestamp = "not a timestamp".to_string();
    std::fs::write(
        sessions.cache_dir.join("bad-session.yaml"),
        serde_yaml::to_string(&record)?,
    )?;

    let records = sessions.list().await?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "bad-session");
    assert_eq!(records[1].id, "good-session");

    sessions.delete_all().await?;
    return Ok(());
}

#[tokio::test]
async fn it_lists_sessions() -> Result<()> {
    let sessions = Sessions::new(temp_dir("sessions"));
    sessions.save("first-session", &quiz()).await?;
    sessions.save("second-session", &quiz()).await?;

    let records = sessions.list().await?;
    assert_eq!(records.len(), 2);

    sessions.delete_all().await?;
    return Ok(());
}
