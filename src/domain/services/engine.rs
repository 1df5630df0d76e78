#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;

use anyhow::anyhow;

use super::Directive;
use super::NestPolicy;
use super::Prompts;
use super::ResponseParser;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::feedback_is_correct;
use crate::domain::models::ActiveQuiz;
use crate::domain::models::BackendBox;
use crate::domain::models::QuizError;
use crate::domain::models::QuizState;
use crate::domain::models::QuizSummary;
use crate::domain::models::Turn;

/// The result of one committed turn, with everything the caller needs to
/// notify the requester before rendering the next state.
#[derive(Debug)]
pub struct TurnOutcome {
    pub feedback: String,
    pub concept: String,
    pub directive: Directive,
    pub state: QuizState,
}

impl TurnOutcome {
    pub fn is_correct(&self) -> bool {
        return feedback_is_correct(&self.feedback);
    }
}

/// Drives one quiz turn at a time against an injected generative backend.
/// All calls within a turn are strictly sequential, each reply feeds the next
/// prompt, and nothing is committed until the whole sequence has succeeded.
pub struct QuizEngine<'a> {
    backend: &'a BackendBox,
    initial_step: u32,
    max_steps: u32,
    topics: Vec<String>,
}

impl<'a> QuizEngine<'a> {
    pub fn new(backend: &'a BackendBox) -> QuizEngine<'a> {
        let topics = Config::get(ConfigKey::QuizTopics)
            .split(',')
            .map(|e| return e.trim().to_string())
            .filter(|e| return !e.is_empty())
            .collect::<Vec<String>>();

        return QuizEngine {
            backend,
            initial_step: Config::get_uint(ConfigKey::QuizInitialStep),
            max_steps: Config::get_uint(ConfigKey::QuizMaxSteps),
            topics,
        };
    }

    pub fn max_steps(&self) -> u32 {
        return self.max_steps;
    }

    async fn generate(&self, prompt: &str) -> Result<String, QuizError> {
        let reply = self
            .backend
            .generate(prompt)
            .await
            .map_err(QuizError::Backend)?;

        let text = reply.trim().to_string();
        if text.is_empty() {
            return Err(QuizError::Backend(anyhow!(
                "backend returned an empty reply"
            )));
        }

        return Ok(text);
    }

    /// Starts a fresh quiz: validates the topic, generates the opener and
    /// splits it into the first compliment/question pair.
    pub async fn start(
        &self,
        topic: &str,
        document_summary: &str,
    ) -> Result<ActiveQuiz, QuizError> {
        let mut topic = topic.trim().to_string();
        if document_summary.is_empty()
            && !self
                .topics
                .iter()
                .any(|e| return e.eq_ignore_ascii_case(&topic))
        {
            return Err(QuizError::InvalidTopic(topic));
        }
        if topic.is_empty() {
            topic = "Document Content".to_string();
        }

        tracing::debug!(topic = topic, "starting quiz");

        let reply = self
            .generate(&Prompts::opener(&topic, document_summary))
            .await?;
        let (compliment, question) = ResponseParser::parse(&reply);

        return Ok(ActiveQuiz {
            topic,
            document_summary: document_summary.to_string(),
            step: self.initial_step,
            nest_level: 0,
            history: vec![],
            current_compliment: compliment,
            current_question: question,
        });
    }

    /// Runs one full turn: judge, extract a concept, decide nest-or-branch,
    /// generate the next question, then commit. The input quiz is untouched;
    /// on any backend failure the caller's state remains exactly as it was.
    pub async fn submit(
        &self,
        quiz: &ActiveQuiz,
        answer: &str,
    ) -> Result<TurnOutcome, QuizError> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(QuizError::EmptyAnswer);
        }

        tracing::debug!(step = quiz.step, nest_level = quiz.nest_level, "judging answer");
        let feedback = self
            .generate(&Prompts::judge(
                &quiz.topic,
                &quiz.document_summary,
                &quiz.history,
                &quiz.current_question,
                answer,
            ))
            .await?;

        let mut concept = self
            .generate(&Prompts::extract(&quiz.topic, &quiz.document_summary, answer))
            .await?;

        let decision = NestPolicy::decide(quiz.nest_level);
        if decision.directive == Directive::Branch {
            // The branch extraction overwrites the first one; history records
            // the branch concept, not the answer's own.
            concept = self
                .generate(&Prompts::branch(&quiz.document_summary, &quiz.history))
                .await?;
        }

        let reply = self
            .generate(&Prompts::next_question(
                &quiz.topic,
                &quiz.document_summary,
                &decision.text(&concept),
                &concept,
                &quiz.history,
            ))
            .await?;
        let (compliment, question) = ResponseParser::parse(&reply);

        // Every external call has succeeded; commit the turn.
        let mut next = quiz.clone();
        next.history.push(Turn {
            question: quiz.current_question.to_string(),
            user_answer: answer.to_string(),
            concept: concept.to_string(),
            feedback: feedback.to_string(),
            nest_level: quiz.nest_level,
            compliment: compliment.to_string(),
        });
        next.step += 1;
        next.nest_level = decision.next_level;
        next.current_compliment = compliment;
        next.current_question = question;

        tracing::debug!(
            step = next.step,
            nest_level = next.nest_level,
            concept = concept,
            "turn committed"
        );

        let state: QuizState;
        if next.history.len() as u32 >= self.max_steps {
            state = QuizState::Complete(QuizSummary::from_quiz(next, self.max_steps));
        } else {
            state = QuizState::Active(next);
        }

        return Ok(TurnOutcome {
            feedback,
            concept,
            directive: decision.directive,
            state,
        });
    }
}
