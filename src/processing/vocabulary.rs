//! Fixed keyword vocabularies used by every extraction step

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of recognised vocabulary terms found in some text.
///
/// Backed by a `BTreeSet` so iteration is always sorted for display.
pub type KeywordSet = BTreeSet<String>;

/// Built-in technical terms.
pub const TECHNICAL_TERMS: &[&str] = &[
    // Languages
    "python", "java", "javascript", "typescript", "golang", "c++", "c#",
    "kotlin", "swiftui", "ruby", "php", "sql", "nosql", "bash", "powershell",
    // Data stores
    "postgresql", "mysql", "mongodb", "redis", "snowflake", "oracle", "dynamodb",
    // Web
    "html", "css", "react", "angular", "vue", "node.js", "django", "flask",
    "spring boot", "graphql", "rest api",
    // Cloud and infrastructure
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible",
    "jenkins", "ci/cd", "linux", "github", "gitlab", "microservices", "devsecops",
    // Data and ML
    "pandas", "numpy", "tensorflow", "pytorch", "scikit-learn", "machine learning",
    "deep learning", "nlp", "etl", "airflow", "kafka", "spark", "hadoop",
    "tableau", "power bi", "data modeling", "statistics",
    // Delivery and security
    "scrum", "jira", "splunk", "siem", "fedramp",
];

/// Built-in soft-skill terms.
pub const SOFT_SKILL_TERMS: &[&str] = &[
    "communication", "leadership", "teamwork", "collaboration", "problem solving",
    "problem-solving", "critical thinking", "time management", "adaptability",
    "stakeholder management", "mentoring", "presentation", "negotiation",
    "attention to detail", "self-starter", "ownership", "cross-functional",
    "analytical", "creativity", "decision making", "conflict resolution",
    "customer focus",
];

/// Cloud platform terms that trigger a certification suggestion.
pub const CLOUD_PLATFORM_TERMS: &[&str] = &["aws", "azure", "gcp"];

/// The combined technical and soft-skill vocabulary.
///
/// Terms are stored lowercased and trimmed. The two partitions may overlap;
/// a term present in both counts in both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    technical: BTreeSet<String>,
    soft_skills: BTreeSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(TECHNICAL_TERMS.iter().copied(), SOFT_SKILL_TERMS.iter().copied())
    }
}

impl Vocabulary {
    pub fn new<T, S>(technical: T, soft_skills: S) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            technical: normalize_terms(technical),
            soft_skills: normalize_terms(soft_skills),
        }
    }

    /// Built-in vocabulary extended with user-supplied terms.
    pub fn with_extra_terms(extra_technical: &[String], extra_soft_skills: &[String]) -> Self {
        let mut vocabulary = Self::default();
        vocabulary.technical.extend(normalize_terms(extra_technical));
        vocabulary.soft_skills.extend(normalize_terms(extra_soft_skills));
        vocabulary
    }

    pub fn is_technical(&self, term: &str) -> bool {
        self.technical.contains(term)
    }

    pub fn is_soft_skill(&self, term: &str) -> bool {
        self.soft_skills.contains(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.is_technical(term) || self.is_soft_skill(term)
    }

    /// Union of both partitions, sorted and deduplicated.
    pub fn terms(&self) -> BTreeSet<&str> {
        self.technical
            .iter()
            .chain(self.soft_skills.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.terms().len()
    }

    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft_skills.is_empty()
    }

    /// Split a keyword set into its (technical, soft-skill) parts.
    pub fn partition(&self, keywords: &KeywordSet) -> (KeywordSet, KeywordSet) {
        let technical = keywords
            .iter()
            .filter(|k| self.is_technical(k))
            .cloned()
            .collect();
        let soft = keywords
            .iter()
            .filter(|k| self.is_soft_skill(k))
            .cloned()
            .collect();
        (technical, soft)
    }
}

fn normalize_terms<I>(terms: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    terms
        .into_iter()
        .map(|t| t.as_ref().split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
