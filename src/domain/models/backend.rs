#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter, strum::VariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendName {
    Gemini,
    Ollama,
    OpenAI,
}

impl BackendName {
    pub fn parse(text: String) -> Option<BackendName> {
        return BackendName::iter().find(|e| return e.to_string() == text);
    }
}

#[async_trait]
pub trait Backend {
    /// Returns the name of the backend.
    fn name(&self) -> BackendName;

    /// Used at startup to verify all configurations are available to work with
    /// the backend.
    async fn health_check(&self) -> Result<()>;

    /// Called when using `models list` to provide all available models for
    /// the backend.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Requests a single completion from the backend and returns the full
    /// reply text. The quiz loop is strictly sequential, each reply feeds the
    /// next prompt, so there is no streaming.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
