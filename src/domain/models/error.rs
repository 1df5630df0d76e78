use thiserror::Error;

/// Recoverable failures raised while driving a quiz. None of these are fatal
/// to the process; the caller decides whether to re-prompt or start over.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The requester submitted a blank answer. The turn is not consumed.
    #[error("No answer provided. Please try again.")]
    EmptyAnswer,

    /// The topic is not in the configured list and no document summary was
    /// provided to quiz on instead.
    #[error("'{0}' is not a known quiz topic, and no document was provided")]
    InvalidTopic(String),

    /// The requested topic does not match the topic recorded in the active
    /// session. The session is abandoned and a fresh one must be started.
    #[error("session is for topic '{expected}', not '{requested}'")]
    SessionMismatch { expected: String, requested: String },

    /// The generative backend failed mid-turn. The turn is fully discarded
    /// and the previously committed session state is left untouched.
    #[error("the model backend failed: {0}")]
    Backend(#[source] anyhow::Error),
}

impl QuizError {
    pub fn is_backend(&self) -> bool {
        return matches!(self, QuizError::Backend(_));
    }
}
