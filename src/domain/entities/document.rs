use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeDocument {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl KnowledgeDocument {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// The ordered set of documents available for retrieval.
///
/// Documents are never edited in place: the corpus only grows by [`Corpus::add`]
/// and shrinks by [`Corpus::remove`] or [`Corpus::clear`]. Titles are derived from
/// the live size, so removing and re-adding can repeat a title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: Vec<KnowledgeDocument>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `content` as "Document N" and returns the new document.
    /// Blank content is ignored.
    pub fn add(&mut self, content: impl Into<String>) -> Option<KnowledgeDocument> {
        let content = content.into();
        if content.trim().is_empty() {
            return None;
        }

        let doc = KnowledgeDocument::new(format!("Document {}", self.documents.len() + 1), content);
        self.documents.push(doc.clone());
        Some(doc)
    }

    /// Returns whether a document was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.id != id);
        self.documents.len() != before
    }

    pub fn clear(&mut self) {
        self.documents.clear();
    }

    pub fn list(&self) -> &[KnowledgeDocument] {
        &self.documents
    }

    pub fn get(&self, id: Uuid) -> Option<&KnowledgeDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl From<Vec<KnowledgeDocument>> for Corpus {
    fn from(documents: Vec<KnowledgeDocument>) -> Self {
        Self { documents }
    }
}

impl From<Corpus> for Vec<KnowledgeDocument> {
    fn from(corpus: Corpus) -> Self {
        corpus.documents
    }
}

/// A sentence that matched at least one query term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSentence {
    pub sentence: String,
    pub score: usize,
    pub source_title: String,
}

impl ScoredSentence {
    /// Formats the sentence with its provenance tag, e.g. `[Document 1] Dogs are loyal`.
    pub fn snippet(&self) -> String {
        format!("[{}] {}", self.source_title, self.sentence)
    }
}
