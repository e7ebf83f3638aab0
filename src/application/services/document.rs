use tracing::instrument;
use uuid::Uuid;

use crate::domain::{Corpus, KnowledgeDocument};

/// Corpus entry points. Each takes the current snapshot and returns the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeService;

impl KnowledgeService {
    pub fn new() -> Self {
        Self
    }

    /// Returns the new corpus and the created document. Blank content creates nothing.
    #[instrument(skip(self, corpus, content), fields(documents = corpus.len(), bytes = content.len()))]
    pub fn add_document(
        &self,
        mut corpus: Corpus,
        content: &str,
    ) -> (Corpus, Option<KnowledgeDocument>) {
        let doc = corpus.add(content);
        if let Some(doc) = &doc {
            tracing::info!(id = %doc.id, title = %doc.title, "document added");
        }
        (corpus, doc)
    }

    #[instrument(skip(self, corpus), fields(documents = corpus.len()))]
    pub fn delete_document(&self, mut corpus: Corpus, id: Uuid) -> Corpus {
        if corpus.remove(id) {
            tracing::info!(%id, "document deleted");
        }
        corpus
    }

    pub fn clear_corpus(&self, corpus: &Corpus) -> Corpus {
        tracing::info!(documents = corpus.len(), "corpus cleared");
        Corpus::default()
    }
}
