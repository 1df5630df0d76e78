use std::fs;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use test_utils::temp_dir;

use super::Documents;
use crate::domain::models::Backend;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendName;

struct CannedSummary {}

#[async_trait]
impl Backend for CannedSummary {
    fn name(&self) -> BackendName {
        return BackendName::Gemini;
    }

    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        return Ok(vec![]);
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        if !prompt.starts_with("Summarize the key points from this document text") {
            bail!("unexpected prompt");
        }

        return Ok("  threads, locks and the memory model  ".to_string());
    }
}

#[tokio::test]
async fn it_summarizes_a_text_document() -> Result<()> {
    let dir = temp_dir("documents");
    fs::create_dir_all(&dir)?;
    let file_path = dir.join("notes.txt");
    fs::write(&file_path, "Threads share memory. Locks guard critical sections.")?;

    let backend: BackendBox = Box::new(CannedSummary {});
    let summary = Documents::summarize(&backend, "java", &file_path).await?;

    assert_eq!(summary, "threads, locks and the memory model");

    fs::remove_dir_all(&dir)?;
    return Ok(());
}

#[tokio::test]
async fn it_rejects_an_empty_document() -> Result<()> {
    let dir = temp_dir("documents");
    fs::create_dir_all(&dir)?;
    let file_path = dir.join("empty.txt");
    fs::write(&file_path, "   \n")?;

    let backend: BackendBox = Box::new(CannedSummary {});
    let res = Documents::summarize(&backend, "java", &file_path).await;

    assert!(res.is_err());

    fs::remove_dir_all(&dir)?;
    return Ok(());
}
