use tracing::instrument;

use crate::domain::{KnowledgeDocument, ScoredSentence, SentenceScorer};

pub const DEFAULT_TOP_K: usize = 5;

/// Lexical retriever over an in-memory corpus.
pub struct RagService {
    scorer: SentenceScorer,
    default_top_k: usize,
}

impl RagService {
    pub fn new(scorer: SentenceScorer, default_top_k: usize) -> Self {
        Self {
            scorer,
            default_top_k,
        }
    }

    /// Top snippets for `query`, formatted as `[title] sentence`.
    #[instrument(skip(self, documents), fields(documents = documents.len()))]
    pub fn retrieve(&self, query: &str, documents: &[KnowledgeDocument]) -> Vec<String> {
        self.retrieve_top_k(query, documents, self.default_top_k)
    }

    pub fn retrieve_top_k(
        &self,
        query: &str,
        documents: &[KnowledgeDocument],
        top_k: usize,
    ) -> Vec<String> {
        self.rank(query, documents)
            .into_iter()
            .take(top_k)
            .map(|s| s.snippet())
            .collect()
    }

    /// Every matching sentence across the corpus, best first.
    ///
    /// The sort is stable: equal scores keep document order, then sentence order.
    pub fn rank(&self, query: &str, documents: &[KnowledgeDocument]) -> Vec<ScoredSentence> {
        let terms = self.scorer.query_terms(query);
        if terms.is_empty() || documents.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredSentence> = documents
            .iter()
            .flat_map(|doc| self.scorer.score_document(doc, &terms))
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        tracing::debug!(terms = terms.len(), matches = scored.len(), "ranked sentences");
        scored
    }
}

impl Default for RagService {
    fn default() -> Self {
        Self::new(SentenceScorer::default(), DEFAULT_TOP_K)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Corpus;

    fn corpus(contents: &[&str]) -> Corpus {
        let mut corpus = Corpus::new();
        for content in contents {
            corpus.add(*content);
        }
        corpus
    }

    #[test]
    fn test_retrieve_example() {
        let docs = vec![KnowledgeDocument::new("A", "Cats are nice. Dogs are loyal.")];
        let rag = RagService::default();

        assert_eq!(rag.retrieve("loyal animal", &docs), vec!["[A] Dogs are loyal"]);
    }

    #[test]
    fn test_empty_corpus_returns_nothing() {
        let rag = RagService::default();
        assert!(rag.retrieve("anything useful", &[]).is_empty());
    }

    #[test]
    fn test_no_matching_terms_returns_nothing() {
        let corpus = corpus(&["The camera records video. It has a screen."]);
        let rag = RagService::default();

        assert!(rag.retrieve("bicycle helmet", corpus.list()).is_empty());
        assert!(rag.retrieve("is it ok", corpus.list()).is_empty());
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let corpus = corpus(&[
            "The camera is small. The camera battery lasts long.",
            "Battery life is four hours for the camera when recording.",
        ]);
        let rag = RagService::default();

        let ranked = rag.rank("camera battery recording", corpus.list());
        let scores: Vec<usize> = ranked.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![3, 2, 1]);
        assert_eq!(ranked[0].source_title, "Document 2");
    }

    #[test]
    fn test_ties_keep_document_then_sentence_order() {
        let corpus = corpus(&["alpha one. alpha two.", "alpha three."]);
        let rag = RagService::default();

        assert_eq!(
            rag.retrieve("alpha", corpus.list()),
            vec![
                "[Document 1] alpha one",
                "[Document 1] alpha two",
                "[Document 2] alpha three",
            ]
        );
    }

    #[test]
    fn test_truncates_to_top_five() {
        let corpus = corpus(&[
            "match a. match b. match c.",
            "match d. match e. match f. match g.",
        ]);
        let rag = RagService::default();

        let snippets = rag.retrieve("match", corpus.list());
        assert_eq!(snippets.len(), 5);
        assert_eq!(snippets[4], "[Document 2] match e");
        assert!(snippets.iter().all(|s| s.starts_with("[Document ")));
    }

    #[test]
    fn test_custom_top_k() {
        let corpus = corpus(&["match a. match b. match c."]);
        let rag = RagService::new(SentenceScorer::default(), 2);

        assert_eq!(rag.retrieve("match", corpus.list()).len(), 2);
        assert_eq!(rag.retrieve_top_k("match", corpus.list(), 10).len(), 3);
    }
}
