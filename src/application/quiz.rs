#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;

use std::io::Write;

use anyhow::bail;
use anyhow::Result;
use tokio::io::stdin;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::io::Lines;
use tokio::io::Stdin;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ActiveQuiz;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendName;
use crate::domain::models::Notice;
use crate::domain::models::NoticeType;
use crate::domain::models::QuizState;
use crate::domain::models::QuizSummary;
use crate::domain::models::SlashCommand;
use crate::domain::models::Turn;
use crate::domain::services::Directive;
use crate::domain::services::Documents;
use crate::domain::services::QuizEngine;
use crate::domain::services::Sessions;
use crate::domain::services::TurnOutcome;
use crate::infrastructure::backends::BackendManager;

pub fn help_text() -> String {
    return r#"COMMANDS:
- /q, /quit, /exit: Save the quiz and exit.
- /hist, /history: Print the transcript so far.
- /h, /help: Print this help text."#
        .to_string();
}

/// The nest/branch hint shown after a turn. It rides on an error notice when
/// the answer was judged incorrect, matching the feedback's tone.
fn turn_notice(outcome: &TurnOutcome) -> Notice {
    let hint = match outcome.directive {
        Directive::Nest => format!("Nesting into '{}' next.", outcome.concept),
        Directive::Branch => format!("Branching to '{}' next.", outcome.concept),
    };

    if outcome.is_correct() {
        return Notice::success(&format!("Great! {hint}"));
    }

    return Notice::error(&hint);
}

fn render_notice(notice: &Notice) {
    match notice.ntype {
        NoticeType::Success => println!("{}", Paint::green(&notice.text)),
        NoticeType::Error => eprintln!("{}", Paint::red(&notice.text)),
    }
}

fn render_feedback(feedback: &str, correct: bool) {
    if correct {
        println!("{}", Paint::green(feedback));
    } else {
        println!("{}", Paint::red(feedback));
    }
}

fn render_transcript(history: &[Turn]) {
    if history.is_empty() {
        println!("Nothing answered yet.");
        return;
    }

    let username = Config::get(ConfigKey::Username);
    for (idx, turn) in history.iter().enumerate() {
        println!();
        println!("{}", Paint::new(format!("Q{}: {}", idx + 1, turn.question)).bold());
        println!("{username}: {}", turn.user_answer);
        render_feedback(&turn.feedback, turn.is_correct());
        println!("Concept: {} (level {})", turn.concept, turn.nest_level);
    }
}

fn render_summary(summary: &QuizSummary) {
    println!();
    println!("{}", Paint::new("Quiz complete!").underline().bold());
    println!("Topic: {}", summary.topic);
    println!(
        "Score: {}/{} ({}%)",
        summary.score, summary.total_steps, summary.percentage
    );
    render_transcript(&summary.history);
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    return Ok(lines.next_line().await?);
}

async fn start_fresh(
    engine: &QuizEngine<'_>,
    backend: &BackendBox,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<ActiveQuiz> {
    let mut topic = Config::get(ConfigKey::QuizTopic);
    let document = Config::get(ConfigKey::QuizDocument);

    if topic.is_empty() && document.is_empty() {
        let topics = Config::get(ConfigKey::QuizTopics);
        let line = read_line(lines, &format!("Choose a topic ({topics}): ")).await?;
        if line.is_none() {
            bail!("No topic provided");
        }
        topic = line.unwrap().trim().to_string();
    }

    let mut document_summary = "".to_string();
    if !document.is_empty() {
        println!("Summarizing document...");
        document_summary =
            Documents::summarize(backend, &topic, std::path::Path::new(&document)).await?;
    }

    let quiz = engine.start(&topic, &document_summary).await?;
    return Ok(quiz);
}

/// The interactive quiz loop. One turn per answer, the session file is
/// rewritten after every committed turn and removed once the quiz completes.
pub async fn start() -> Result<()> {
    let backend_name = BackendName::parse(Config::get(ConfigKey::Backend));
    if backend_name.is_none() {
        bail!(format!(
            "Unknown backend {}",
            Config::get(ConfigKey::Backend)
        ));
    }

    let backend = BackendManager::get(backend_name.unwrap())?;
    backend.health_check().await?;

    let engine = QuizEngine::new(&backend);
    let sessions = Sessions::default();
    let mut lines = BufReader::new(stdin()).lines();

    println!("Welcome, {}!", Config::get(ConfigKey::Username));

    let mut resumed: Option<ActiveQuiz> = None;
    let mut id = Config::get(ConfigKey::SessionID);
    if !id.is_empty() {
        let record = sessions.load(&id).await?;
        let topic = Config::get(ConfigKey::QuizTopic);

        match record.quiz.ensure_topic(if topic.is_empty() {
            &record.quiz.topic
        } else {
            &topic
        }) {
            Ok(()) => {
                println!("Resuming quiz on {}.", record.quiz.topic);
                resumed = Some(record.quiz);
            }
            Err(err) => {
                // A topic switch invalidates the saved quiz entirely.
                sessions.delete(&id).await?;
                render_notice(&Notice::error(&err.to_string()));
                id = "".to_string();
            }
        }
    }

    let mut quiz = match resumed {
        Some(quiz) => quiz,
        None => {
            id = Sessions::create_id();
            start_fresh(&engine, &backend, &mut lines).await?
        }
    };
    sessions.save(&id, &quiz).await?;

    loop {
        println!();
        if !quiz.current_compliment.is_empty() {
            println!("{}", Paint::cyan(&quiz.current_compliment));
        }
        println!(
            "{}",
            Paint::new(format!("Q{}: {}", quiz.step, quiz.current_question)).bold()
        );

        let line = read_line(&mut lines, "> ").await?;
        if line.is_none() {
            sessions.save(&id, &quiz).await?;
            println!("Session saved as {id}.");
            break;
        }

        let text = line.unwrap();
        if let Some(cmd) = SlashCommand::parse(&text) {
            if cmd.is_quit() {
                sessions.save(&id, &quiz).await?;
                println!("Session saved as {id}. Resume with: intelliprep quiz --id {id}");
                break;
            }
            if cmd.is_history() {
                render_transcript(&quiz.history);
            }
            if cmd.is_help() {
                println!("{}", help_text());
            }
            continue;
        }

        match engine.submit(&quiz, &text).await {
            Err(err) => {
                render_notice(&Notice::error(&err.to_string()));
            }
            Ok(outcome) => {
                render_feedback(&outcome.feedback, outcome.is_correct());
                render_notice(&turn_notice(&outcome));

                match outcome.state {
                    QuizState::Active(next) => {
                        quiz = next;
                        sessions.save(&id, &quiz).await?;
                    }
                    QuizState::Complete(summary) => {
                        sessions.delete(&id).await?;
                        render_summary(&summary);
                        return Ok(());
                    }
                }
            }
        }
    }

    return Ok(());
}
