use async_trait::async_trait;

use crate::domain::{errors::DomainError, Conversation, Corpus};

/// Whole-collection persistence for the two session snapshots.
///
/// Implementations load and save entire collections; there is no partial update.
/// A collection that was never saved loads as empty.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load_corpus(&self) -> Result<Corpus, DomainError>;
    async fn save_corpus(&self, corpus: &Corpus) -> Result<(), DomainError>;
    async fn load_conversation(&self) -> Result<Conversation, DomainError>;
    async fn save_conversation(&self, conversation: &Conversation) -> Result<(), DomainError>;
}
