//! Vocabulary keyword extraction
//!
//! Matching is plain substring containment on the normalized text, not
//! word-boundary matching: a term counts as found whenever its characters
//! appear contiguously, including inside a longer word ("java" inside
//! "javascript"). Scores depend on this behaviour, so keep it.

use crate::error::{Result, ResumeReadyError};
use crate::processing::vocabulary::{KeywordSet, Vocabulary};
use aho_corasick::AhoCorasick;
use log::debug;

/// Collapse whitespace runs to single spaces and lowercase.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Finds vocabulary terms in free text.
///
/// The automaton is built once per vocabulary and reused for every call.
pub struct KeywordExtractor {
    matcher: AhoCorasick,
    patterns: Vec<String>,
    vocabulary: Vocabulary,
}

impl KeywordExtractor {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let patterns: Vec<String> = vocabulary.terms().into_iter().map(str::to_string).collect();

        // Standard match semantics are required for overlapping search,
        // which reports every pattern occurring anywhere in the haystack.
        let matcher = AhoCorasick::new(&patterns).map_err(|e| {
            ResumeReadyError::Processing(format!("Failed to build keyword matcher: {}", e))
        })?;

        debug!("Keyword matcher built with {} terms", patterns.len());

        Ok(Self {
            matcher,
            patterns,
            vocabulary,
        })
    }

    /// Recognised vocabulary terms in `text`. Empty input yields an empty set.
    pub fn extract(&self, text: &str) -> KeywordSet {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return KeywordSet::new();
        }

        self.matcher
            .find_overlapping_iter(&normalized)
            .map(|m| self.patterns[m.pattern().as_usize()].clone())
            .collect()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new(Vocabulary::default()).unwrap()
    }

    fn set(items: &[&str]) -> KeywordSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_text_collapses_whitespace_and_lowercases() {
        assert_eq!(normalize_text("  Python\n\tAND   SQL "), "python and sql");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let extractor = extractor();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   \n\t ").is_empty());
    }

    #[test]
    fn test_case_insensitive_extraction() {
        let keywords = extractor().extract("Built pipelines in PYTHON on AWS with Docker.");
        assert_eq!(keywords, set(&["aws", "docker", "python"]));
    }

    #[test]
    fn test_multi_word_terms_match_across_line_breaks() {
        let keywords = extractor().extract("Strong background in machine\n   learning and problem\tsolving");
        assert!(keywords.contains("machine learning"));
        assert!(keywords.contains("problem solving"));
    }

    #[test]
    fn test_substring_semantics_are_preserved() {
        let keywords = extractor().extract("Frontend work in JavaScript; PostgreSQL backend");
        // "java" and "sql" are found inside longer words
        assert!(keywords.contains("javascript"));
        assert!(keywords.contains("java"));
        assert!(keywords.contains("postgresql"));
        assert!(keywords.contains("sql"));
    }

    #[test]
    fn test_extraction_matches_naive_containment() {
        let extractor = extractor();
        let texts = [
            "Senior data engineer: Spark, Kafka, Airflow, Snowflake. Strong communication.",
            "Mentoring junior devs, leadership of cross-functional teams, Terraform on GCP",
            "nothing relevant here at all",
        ];

        for text in texts {
            let normalized = normalize_text(text);
            let expected: KeywordSet = extractor
                .vocabulary()
                .terms()
                .into_iter()
                .filter(|t| normalized.contains(t))
                .map(str::to_string)
                .collect();
            assert_eq!(extractor.extract(text), expected, "mismatch for {:?}", text);
        }
    }

    #[test]
    fn test_extraction_is_deterministic_and_within_vocabulary() {
        let extractor = extractor();
        let text = "Kubernetes, Docker, Python, leadership and teamwork";
        let first = extractor.extract(text);
        let second = extractor.extract(text);
        assert_eq!(first, second);
        assert!(first.iter().all(|k| extractor.vocabulary().contains(k)));
    }

    #[test]
    fn test_custom_terms_are_recognised() {
        let vocab = Vocabulary::with_extra_terms(&["elixir".to_string()], &[]);
        let extractor = KeywordExtractor::new(vocab).unwrap();
        assert!(extractor.extract("Shipped Elixir services").contains("elixir"));
    }
}
