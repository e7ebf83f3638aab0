use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

use crate::domain::{ports::SnapshotStore, Conversation, Corpus, DomainError};

pub const CORPUS_FILE: &str = "knowledge.json";
pub const CONVERSATION_FILE: &str = "messages.json";

/// Stores each snapshot as one pretty-printed JSON array under `dir`.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place, so a
/// reader never sees a half-written collection.
pub struct JsonSnapshotStore {
    dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T, DomainError> {
        let path = self.dir.join(file);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no snapshot yet");
                Ok(T::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(file);
        let tmp = self.dir.join(format!("{file}.tmp"));
        let json = serde_json::to_vec_pretty(value)?;

        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;
        debug!(path = %path.display(), "snapshot saved");
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn load_corpus(&self) -> Result<Corpus, DomainError> {
        self.read(CORPUS_FILE).await
    }

    async fn save_corpus(&self, corpus: &Corpus) -> Result<(), DomainError> {
        self.write(CORPUS_FILE, corpus).await
    }

    async fn load_conversation(&self) -> Result<Conversation, DomainError> {
        self.read(CONVERSATION_FILE).await
    }

    async fn save_conversation(&self, conversation: &Conversation) -> Result<(), DomainError> {
        self.write(CONVERSATION_FILE, conversation).await
    }
}
