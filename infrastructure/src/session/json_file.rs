//! JSON file session store.
//!
//! Each session is written as `<directory>/response-<id>.json`, pretty
//! printed. Writes go to a temporary sibling first and are renamed into
//! place, so a crash never leaves a half-written session behind.

use async_trait::async_trait;
use navigator_application::{SessionStore, SessionStoreError};
use navigator_domain::{ResponseId, TraversalSession};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};

const FILE_PREFIX: &str = "response-";
const FILE_SUFFIX: &str = ".json";

/// Session store that keeps one JSON file per response
pub struct JsonFileSessionStore {
    directory: PathBuf,
    /// Last allocated id, seeded from disk on first use
    last_id: Mutex<Option<i64>>,
}

impl JsonFileSessionStore {
    /// Open (and create if needed) a store rooted at `directory`.
    pub async fn open(directory: impl AsRef<Path>) -> Result<Self, SessionStoreError> {
        let directory = directory.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&directory).await.map_err(|e| {
            SessionStoreError::Io(format!("cannot create {}: {}", directory.display(), e))
        })?;
        debug!("Session store opened at {}", directory.display());
        Ok(Self {
            directory,
            last_id: Mutex::new(None),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, id: ResponseId) -> PathBuf {
        self.directory
            .join(format!("{}{}{}", FILE_PREFIX, id.get(), FILE_SUFFIX))
    }

    /// Highest response id present on disk.
    async fn highest_id(&self) -> Result<i64, SessionStoreError> {
        let mut entries = tokio::fs::read_dir(&self.directory)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;

        let mut highest = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))?
        {
            let name = entry.file_name();
            let Some(id) = name
                .to_str()
                .and_then(|n| n.strip_prefix(FILE_PREFIX))
                .and_then(|n| n.strip_suffix(FILE_SUFFIX))
                .and_then(|n| n.parse::<i64>().ok())
            else {
                continue;
            };
            highest = highest.max(id);
        }
        Ok(highest)
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn next_response_id(&self) -> Result<ResponseId, SessionStoreError> {
        let mut last_id = self.last_id.lock().await;
        let next = match *last_id {
            Some(last) => last + 1,
            None => self.highest_id().await? + 1,
        };
        *last_id = Some(next);
        Ok(ResponseId::new(next))
    }

    async fn load(&self, id: ResponseId) -> Result<Option<TraversalSession>, SessionStoreError> {
        let path = self.path_for(id);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionStoreError::Io(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let session: TraversalSession = serde_json::from_str(&content).map_err(|e| {
            warn!("Corrupt session file {}: {}", path.display(), e);
            SessionStoreError::Serialization(format!("{}: {}", path.display(), e))
        })?;
        Ok(Some(session))
    }

    async fn save(&self, session: &TraversalSession) -> Result<(), SessionStoreError> {
        let path = self.path_for(session.response_id);
        let tmp = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(session)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;

        tokio::fs::write(&tmp, content).await.map_err(|e| {
            SessionStoreError::Io(format!("cannot write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            SessionStoreError::Io(format!("cannot replace {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}
