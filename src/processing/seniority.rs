//! Seniority level and years-of-experience inference

use crate::processing::keywords::normalize_text;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const SENIOR_SIGNALS: &[&str] = &[
    "senior", "lead", "principal", "staff", "manager", "architect", "mentoring", "director",
    "head of",
];

pub const JUNIOR_SIGNALS: &[&str] = &["junior", "associate", "entry", "new grad", "intern", "graduate"];

/// Whole-word match on any signal, allowing a plural "s".
fn signal_pattern(signals: &[&str]) -> Regex {
    let alternatives: Vec<String> = signals.iter().map(|s| regex::escape(s)).collect();
    Regex::new(&format!(r"\b(?:{})s?\b", alternatives.join("|"))).expect("Invalid signal regex")
}

static SENIOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| signal_pattern(SENIOR_SIGNALS));

static JUNIOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| signal_pattern(JUNIOR_SIGNALS));

static YEARS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*\+?\s*(?:years|yrs)").expect("Invalid years regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeniorityLevel {
    JuniorAssociate,
    MidLevel,
    SeniorPlus,
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeniorityLevel::JuniorAssociate => write!(f, "Junior/Associate"),
            SeniorityLevel::MidLevel => write!(f, "Mid-level"),
            SeniorityLevel::SeniorPlus => write!(f, "Senior+"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorityProfile {
    pub level: SeniorityLevel,
    /// Largest "N years" figure in the text, 0 when none is stated.
    pub years_required: u32,
}

impl fmt::Display for SeniorityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years_required > 0 {
            write!(f, "{} ({}+ years required)", self.level, self.years_required)
        } else {
            write!(f, "{} (years not specified)", self.level)
        }
    }
}

pub fn infer_seniority(text: &str) -> SeniorityProfile {
    let normalized = normalize_text(text);

    let senior = SENIOR_PATTERN.is_match(&normalized);
    let junior = JUNIOR_PATTERN.is_match(&normalized);

    let level = match (senior, junior) {
        (true, false) => SeniorityLevel::SeniorPlus,
        (false, true) => SeniorityLevel::JuniorAssociate,
        _ => SeniorityLevel::MidLevel,
    };

    SeniorityProfile {
        level,
        years_required: max_years(&normalized),
    }
}

fn max_years(text: &str) -> u32 {
    YEARS_PATTERN
        .captures_iter(text)
        .filter_map(|cap| cap.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_architect_with_years() {
        let profile = infer_seniority("5+ years of experience, senior architect role");
        assert_eq!(profile.level, SeniorityLevel::SeniorPlus);
        assert_eq!(profile.years_required, 5);
    }

    #[test]
    fn test_junior_only() {
        let profile = infer_seniority("Junior analyst, 1 yrs preferred");
        assert_eq!(profile.level, SeniorityLevel::JuniorAssociate);
        assert_eq!(profile.years_required, 1);
    }

    #[test]
    fn test_both_signals_is_mid_level() {
        let profile = infer_seniority("Senior or associate engineers welcome");
        assert_eq!(profile.level, SeniorityLevel::MidLevel);
    }

    #[test]
    fn test_no_signals_is_mid_level_with_zero_years() {
        let profile = infer_seniority("Software engineer working on payments");
        assert_eq!(profile.level, SeniorityLevel::MidLevel);
        assert_eq!(profile.years_required, 0);
    }

    #[test]
    fn test_takes_maximum_years() {
        let profile = infer_seniority("3 years Python, 7+ YEARS overall, 2yrs cloud");
        assert_eq!(profile.years_required, 7);
    }

    #[test]
    fn test_signals_match_whole_words_only() {
        let internal = infer_seniority("Build internal tools");
        assert_eq!(internal.level, SeniorityLevel::MidLevel);

        let leadership = infer_seniority("Strong leadership");
        assert_eq!(leadership.level, SeniorityLevel::MidLevel);

        let staffing = infer_seniority("Staffing platform engineer");
        assert_eq!(staffing.level, SeniorityLevel::MidLevel);
    }

    #[test]
    fn test_signals_allow_plural_and_phrases() {
        assert_eq!(infer_seniority("Hiring interns").level, SeniorityLevel::JuniorAssociate);
        assert_eq!(infer_seniority("New grad welcome").level, SeniorityLevel::JuniorAssociate);
        assert_eq!(infer_seniority("Head of Data").level, SeniorityLevel::SeniorPlus);
        assert_eq!(infer_seniority("You will mentor; tech leads report to you").level, SeniorityLevel::SeniorPlus);
    }

    #[test]
    fn test_empty_text() {
        let profile = infer_seniority("");
        assert_eq!(profile.level, SeniorityLevel::MidLevel);
        assert_eq!(profile.years_required, 0);
    }

    #[test]
    fn test_display() {
        let profile = SeniorityProfile {
            level: SeniorityLevel::SeniorPlus,
            years_required: 8,
        };
        assert_eq!(profile.to_string(), "Senior+ (8+ years required)");
        assert_eq!(SeniorityLevel::JuniorAssociate.to_string(), "Junior/Associate");
    }
}
