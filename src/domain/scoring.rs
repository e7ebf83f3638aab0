//! Lexical sentence scoring.
//!
//! A document is cut into sentences at every period followed by whitespace.
//! Each sentence scores one point per distinct query term it contains as a
//! case-insensitive substring. Terms are the whitespace-separated words of the
//! query longer than `min_term_length` characters.

use regex::Regex;

use crate::domain::{KnowledgeDocument, ScoredSentence};

pub const DEFAULT_MIN_TERM_LENGTH: usize = 3;

const SENTENCE_BOUNDARY: &str = r"\.\s+";

#[derive(Debug, Clone)]
pub struct SentenceScorer {
    boundary: Regex,
    min_term_length: usize,
}

impl SentenceScorer {
    pub fn new(min_term_length: usize) -> Self {
        Self {
            boundary: Regex::new(SENTENCE_BOUNDARY).expect("Invalid regex"),
            min_term_length,
        }
    }

    /// Lower-cased, de-duplicated query terms in query order.
    pub fn query_terms(&self, query: &str) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        for word in query.to_lowercase().split_whitespace() {
            if word.chars().count() > self.min_term_length && !terms.iter().any(|t| t == word) {
                terms.push(word.to_string());
            }
        }
        terms
    }

    /// Splits content into raw sentence units. Empty content yields one empty unit.
    pub fn split_sentences<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.boundary.split(content).collect()
    }

    pub fn score_sentence(&self, sentence: &str, terms: &[String]) -> usize {
        let lowered = sentence.to_lowercase();
        terms
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .count()
    }

    /// Scores every sentence of `doc` and keeps the ones that matched.
    pub fn score_document(&self, doc: &KnowledgeDocument, terms: &[String]) -> Vec<ScoredSentence> {
        if terms.is_empty() {
            return Vec::new();
        }

        self.split_sentences(&doc.content)
            .into_iter()
            .filter_map(|unit| {
                let score = self.score_sentence(unit, terms);
                (score > 0).then(|| ScoredSentence {
                    sentence: clean_sentence(unit).to_string(),
                    score,
                    source_title: doc.title.clone(),
                })
            })
            .collect()
    }
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TERM_LENGTH)
    }
}

/// Trims a unit and drops its terminal period, which only the last sentence
/// of a document still carries after the split.
fn clean_sentence(unit: &str) -> &str {
    let trimmed = unit.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, content: &str) -> KnowledgeDocument {
        KnowledgeDocument::new(title, content)
    }

    #[test]
    fn test_query_terms_drop_short_words() {
        let scorer = SentenceScorer::default();
        let terms = scorer.query_terms("What is the Battery life of the GPS unit");
        assert_eq!(terms, vec!["what", "battery", "life", "unit"]);
    }

    #[test]
    fn test_query_terms_are_distinct() {
        let scorer = SentenceScorer::default();
        assert_eq!(scorer.query_terms("loyal LOYAL loyal"), vec!["loyal"]);
    }

    #[test]
    fn test_split_on_period_and_whitespace() {
        let scorer = SentenceScorer::default();
        let units = scorer.split_sentences("One. Two.\nThree.Four. ");
        assert_eq!(units, vec!["One", "Two", "Three.Four", ""]);
    }

    #[test]
    fn test_split_empty_content_yields_one_unit() {
        let scorer = SentenceScorer::default();
        assert_eq!(scorer.split_sentences(""), vec![""]);
    }

    #[test]
    fn test_score_counts_substring_matches() {
        let scorer = SentenceScorer::default();
        let terms = scorer.query_terms("waterproof rating");
        assert_eq!(scorer.score_sentence("Waterproof to 20m", &terms), 1);
        assert_eq!(scorer.score_sentence("Depth rating: WATERPROOF", &terms), 2);
        assert_eq!(scorer.score_sentence("Water resistant", &terms), 0);
    }

    #[test]
    fn test_score_document_example() {
        let scorer = SentenceScorer::default();
        let terms = scorer.query_terms("loyal animal");
        let scored = scorer.score_document(&doc("A", "Cats are nice. Dogs are loyal."), &terms);

        assert_eq!(
            scored,
            vec![ScoredSentence {
                sentence: "Dogs are loyal".to_string(),
                score: 1,
                source_title: "A".to_string(),
            }]
        );
    }

    #[test]
    fn test_score_document_preserves_case_and_inner_newlines() {
        let scorer = SentenceScorer::default();
        let terms = scorer.query_terms("camera");
        let scored = scorer.score_document(&doc("B", "  The CAMERA\nrecords 4K.  Other"), &terms);

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].sentence, "The CAMERA\nrecords 4K");
    }

    #[test]
    fn test_short_only_query_scores_nothing() {
        let scorer = SentenceScorer::default();
        let terms = scorer.query_terms("is it ok");
        assert!(terms.is_empty());
        assert!(scorer
            .score_document(&doc("A", "is it ok. it is."), &terms)
            .is_empty());
    }

    #[test]
    fn test_custom_min_term_length() {
        let scorer = SentenceScorer::new(1);
        assert_eq!(scorer.query_terms("go to gps"), vec!["go", "to", "gps"]);
    }
}
