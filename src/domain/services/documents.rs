#[cfg(test)]
#[path = "documents_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use tokio::fs;

use super::Prompts;
use crate::domain::models::BackendBox;

/// Turns an uploaded text document into the short summary a quiz uses as
/// optional context.
pub struct Documents {}

impl Documents {
    pub async fn summarize(
        backend: &BackendBox,
        topic: &str,
        file_path: &path::Path,
    ) -> Result<String> {
        let text = fs::read_to_string(file_path).await?;
        if text.trim().is_empty() {
            bail!(format!(
                "Document {} is empty, there is nothing to quiz on",
                file_path.display()
            ));
        }

        let summary = backend.generate(&Prompts::summarize(topic, &text)).await?;

        tracing::debug!(
            document = file_path.display().to_string(),
            summary_chars = summary.len(),
            "document summarized"
        );

        return Ok(summary.trim().to_string());
    }
}
