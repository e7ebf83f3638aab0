use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{ports::SnapshotStore, Conversation, Corpus, DomainError};

/// Keeps the latest snapshots in process memory; nothing survives a restart.
pub struct InMemorySnapshotStore {
    corpus: RwLock<Corpus>,
    conversation: RwLock<Conversation>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            corpus: RwLock::new(Corpus::default()),
            conversation: RwLock::new(Conversation::default()),
        }
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load_corpus(&self) -> Result<Corpus, DomainError> {
        let corpus = self
            .corpus
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        Ok(corpus.clone())
    }

    async fn save_corpus(&self, corpus: &Corpus) -> Result<(), DomainError> {
        let mut stored = self
            .corpus
            .write()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        *stored = corpus.clone();
        Ok(())
    }

    async fn load_conversation(&self) -> Result<Conversation, DomainError> {
        let conversation = self
            .conversation
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        Ok(conversation.clone())
    }

    async fn save_conversation(&self, conversation: &Conversation) -> Result<(), DomainError> {
        let mut stored = self
            .conversation
            .write()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        *stored = conversation.clone();
        Ok(())
    }
}
