#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use chrono::DateTime;
use chrono::Local;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::domain::models::ActiveQuiz;

/// One persisted quiz per requester, written back after every committed turn
/// so re-opening the quiz always shows the latest committed state.
#[derive(Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub version: String,
    pub timestamp: String,
    pub quiz: ActiveQuiz,
}

pub struct Sessions {
    pub cache_dir: path::PathBuf,
}

impl Default for Sessions {
    fn default() -> Sessions {
        let cache_dir = dirs::cache_dir().unwrap().join("intelliprep/sessions");

        return Sessions::new(cache_dir);
    }
}

impl Sessions {
    pub fn new(cache_dir: path::PathBuf) -> Sessions {
        return Sessions { cache_dir };
    }

    pub fn create_id() -> String {
        return Uuid::new_v4()
            .to_string()
            .split('-')
            .enumerate()
            .filter_map(|(idx, str)| {
                if idx > 1 {
                    return None;
                }
                return Some(str);
            })
            .collect::<Vec<&str>>()
            .join("-");
    }

    fn get_file_path(&self, id: &str) -> path::PathBuf {
        return self.cache_dir.join(format!("{id}.yaml"));
    }

    pub async fn list(&self) -> Result<Vec<SessionRecord>> {
        let mut records: Vec<SessionRecord> = vec![];
        if !self.cache_dir.exists() {
            return Ok(records);
        }

        let mut dir = fs::read_dir(&self.cache_dir).await?;
        while let Some(file) = dir.next_entry().await? {
            let payload = fs::read_to_string(file.path()).await?;
            let record: SessionRecord = serde_yaml::from_str(&payload)?;
            records.push(record);
        }

        records.sort_by_cached_key(|record| {
            // A hand-edited or corrupted timestamp sorts first rather than
            // breaking the whole listing.
            return DateTime::parse_from_rfc3339(&record.timestamp)
                .unwrap_or_else(|_| return DateTime::<Utc>::MIN_UTC.into());
        });

        return Ok(records);
    }

    pub async fn load(&self, id: &str) -> Result<SessionRecord> {
        let file_path = self.get_file_path(id);
        if !file_path.exists() {
            bail!(format!("No session found for id {id}"));
        }

        let payload = fs::read_to_string(file_path).await?;
        let record: SessionRecord = serde_yaml::from_str(&payload)?;

        return Ok(record);
    }

    pub async fn save(&self, id: &str, quiz: &ActiveQuiz) -> Result<()> {
        let record = SessionRecord {
            id: id.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            quiz: quiz.clone(),
        };

        let payload = serde_yaml::to_string(&record)?;

        if !self.cache_dir.exists() {
            fs::create_dir_all(&self.cache_dir).await?;
        }

        let mut file = fs::File::create(self.get_file_path(id)).await?;
        file.write_all(payload.as_bytes()).await?;

        return Ok(());
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let file_path = self.get_file_path(id);
        if !file_path.exists() {
            return Ok(());
        }

        fs::remove_file(file_path).await?;
        return Ok(());
    }

    pub async fn delete_all(&self) -> Result<()> {
        if !self.cache_dir.exists() {
            return Ok(());
        }

        fs::remove_dir_all(&self.cache_dir).await?;
        return Ok(());
    }
}
