//! Rule-based answer synthesis.
//!
//! Snippets are de-duplicated and joined into a default answer. A fixed list of
//! keyword rules then runs in order against the lower-cased query; every rule
//! that fires overwrites the answer, so the last matching rule wins
//! (price over depth over battery).

use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::instrument;

const BATTERY_LIFE_PATTERN: &str = r"(?i)Battery Life[^.]*\.";
const CURRENCY_AMOUNT_PATTERN: &str = r"\p{Sc}[0-9]+";

/// Canned texts used by the answer synthesizer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Responses {
    pub fallback: String,
    pub battery_life: String,
    pub underwater: String,
}

impl Default for Responses {
    fn default() -> Self {
        Self {
            fallback: "Sorry, I don't have information on that.".to_string(),
            battery_life: "The DJI Action 5 Pro has a battery life of around 4 hours, though real-world use may vary depending on settings and usage.".to_string(),
            underwater: "It can be used underwater up to 20 meters without a case.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub answer: String,
    /// True whenever at least one snippet was supplied, even if a rule replaced the text.
    pub used_retrieval: bool,
}

pub struct AnswerSynthesizer {
    responses: Responses,
    battery_life: Regex,
    currency_amount: Regex,
}

impl AnswerSynthesizer {
    pub fn new(responses: Responses) -> Self {
        Self {
            responses,
            battery_life: Regex::new(BATTERY_LIFE_PATTERN).expect("Invalid regex"),
            currency_amount: Regex::new(CURRENCY_AMOUNT_PATTERN).expect("Invalid regex"),
        }
    }

    #[instrument(skip(self, snippets), fields(snippets = snippets.len()))]
    pub fn synthesize(&self, snippets: &[String], query: &str) -> Synthesis {
        if snippets.is_empty() {
            return Synthesis {
                answer: self.responses.fallback.clone(),
                used_retrieval: false,
            };
        }

        let unique = dedup(snippets);
        let mut answer = unique.join(" ");
        let q = query.to_lowercase();

        if q.contains("battery") {
            if let Some(snippet) = find_containing(&unique, "battery") {
                answer = self
                    .battery_life
                    .replace(snippet, regex::NoExpand(&self.responses.battery_life))
                    .into_owned();
                tracing::debug!(rule = "battery", "override applied");
            }
        }

        if q.contains("underwater") || q.contains("depth") {
            if find_containing(&unique, "waterproof").is_some() {
                answer = self.responses.underwater.clone();
                tracing::debug!(rule = "depth", "override applied");
            }
        }

        if q.contains("price") {
            if let Some(amount) = unique
                .iter()
                .find_map(|snippet| self.currency_amount.find(snippet))
            {
                answer = amount.as_str().to_string();
                tracing::debug!(rule = "price", "override applied");
            }
        }

        Synthesis {
            answer,
            used_retrieval: true,
        }
    }
}

impl Default for AnswerSynthesizer {
    fn default() -> Self {
        Self::new(Responses::default())
    }
}

/// Set semantics, first occurrence wins.
fn dedup(snippets: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    snippets
        .iter()
        .map(String::as_str)
        .filter(|s| seen.insert(*s))
        .collect()
}

fn find_containing<'a>(snippets: &[&'a str], needle: &str) -> Option<&'a str> {
    snippets
        .iter()
        .copied()
        .find(|s| s.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippets(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_snippets_fall_back() {
        let synth = AnswerSynthesizer::default();
        let out = synth.synthesize(&[], "what is the price");

        assert_eq!(out.answer, "Sorry, I don't have information on that.");
        assert!(!out.used_retrieval);
    }

    #[test]
    fn test_joins_unique_snippets_in_order() {
        let synth = AnswerSynthesizer::default();
        let out = synth.synthesize(
            &snippets(&["[A] one", "[B] two", "[A] one", "[C] three"]),
            "tell me",
        );

        assert_eq!(out.answer, "[A] one [B] two [C] three");
        assert!(out.used_retrieval);
    }

    #[test]
    fn test_price_extracts_amount() {
        let synth = AnswerSynthesizer::default();
        let out = synth.synthesize(
            &snippets(&["[A] It ships soon", "[A] The price is ₹2999 in India"]),
            "What is the PRICE?",
        );

        assert_eq!(out.answer, "₹2999");
        assert!(out.used_retrieval);
    }

    #[test]
    fn test_price_without_amount_keeps_combined() {
        let synth = AnswerSynthesizer::default();
        let out = synth.synthesize(&snippets(&["[A] Pricing is not public"]), "price please");
        assert_eq!(out.answer, "[A] Pricing is not public");
    }

    #[test]
    fn test_underwater_uses_canned_depth_answer() {
        let synth = AnswerSynthesizer::default();
        let out = synth.synthesize(
            &snippets(&["[A] Records 4K video", "[A] Waterproof without a housing"]),
            "can I use it underwater",
        );

        assert_eq!(
            out.answer,
            "It can be used underwater up to 20 meters without a case."
        );
    }

    #[test]
    fn test_depth_without_waterproof_snippet_keeps_combined() {
        let synth = AnswerSynthesizer::default();
        let out = synth.synthesize(&snippets(&["[A] Depth of field is shallow"]), "depth");
        assert_eq!(out.answer, "[A] Depth of field is shallow");
    }

    #[test]
    fn test_battery_replaces_battery_life_clause() {
        let synth = AnswerSynthesizer::default();
        let out = synth.synthesize(
            &snippets(&[
                "[A] Weighs 145 grams",
                "[A] battery life: 4.5 hours typical",
            ]),
            "How long does the battery last",
        );

        assert_eq!(
            out.answer,
            "[A] The DJI Action 5 Pro has a battery life of around 4 hours, though real-world use may vary depending on settings and usage.5 hours typical"
        );
    }

    #[test]
    fn test_battery_without_pattern_returns_snippet_alone() {
        let synth = AnswerSynthesizer::default();
        let out = synth.synthesize(
            &snippets(&["[A] Weighs 145 grams", "[A] The battery is removable"]),
            "battery",
        );

        assert_eq!(out.answer, "[A] The battery is removable");
    }

    #[test]
    fn test_last_matching_rule_wins() {
        let synth = AnswerSynthesizer::default();
        let items = snippets(&[
            "[A] Battery Life is long.",
            "[A] Waterproof to 20m",
            "[A] Costs ₹45999",
        ]);

        let out = synth.synthesize(&items, "battery depth price");
        assert_eq!(out.answer, "₹45999");

        let out = synth.synthesize(&items, "battery depth");
        assert_eq!(
            out.answer,
            "It can be used underwater up to 20 meters without a case."
        );
    }

    #[test]
    fn test_custom_responses() {
        let synth = AnswerSynthesizer::new(Responses {
            fallback: "Nothing found.".to_string(),
            ..Responses::default()
        });
        assert_eq!(synth.synthesize(&[], "anything").answer, "Nothing found.");
    }
}
