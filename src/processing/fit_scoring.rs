//! Weighted fit scoring of resume keywords against job requirements
//!
//! The score is a weighted sum of four coverage ratios:
//!
//! | Category                | Weight |
//! |-------------------------|--------|
//! | required / technical    | 45     |
//! | required / soft skills  | 25     |
//! | nice-to-have / technical| 20     |
//! | nice-to-have / soft     | 10     |
//!
//! A category with no keywords contributes nothing (its denominator is
//! treated as 1).

use crate::processing::requirements::RequirementProfile;
use crate::processing::vocabulary::{KeywordSet, Vocabulary};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitWeights {
    pub required_technical: f64,
    pub required_soft: f64,
    pub nice_technical: f64,
    pub nice_soft: f64,
}

pub const FIT_WEIGHTS: FitWeights = FitWeights {
    required_technical: 45.0,
    required_soft: 25.0,
    nice_technical: 20.0,
    nice_soft: 10.0,
};

impl FitWeights {
    pub fn sum(&self) -> f64 {
        self.required_technical + self.required_soft + self.nice_technical + self.nice_soft
    }

    pub fn for_category(&self, category: FitCategory) -> f64 {
        match category {
            FitCategory::RequiredTechnical => self.required_technical,
            FitCategory::RequiredSoft => self.required_soft,
            FitCategory::NiceTechnical => self.nice_technical,
            FitCategory::NiceSoft => self.nice_soft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitCategory {
    RequiredTechnical,
    RequiredSoft,
    NiceTechnical,
    NiceSoft,
}

impl fmt::Display for FitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitCategory::RequiredTechnical => write!(f, "Required - Technical"),
            FitCategory::RequiredSoft => write!(f, "Required - Soft Skills"),
            FitCategory::NiceTechnical => write!(f, "Nice-to-have - Technical"),
            FitCategory::NiceSoft => write!(f, "Nice-to-have - Soft Skills"),
        }
    }
}

/// Coverage of one category: which of its keywords the resume has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub category: FitCategory,
    pub weight: f64,
    /// have / max(total, 1)
    pub ratio: f64,
    pub have: Vec<String>,
    pub missing: Vec<String>,
}

impl CategoryCoverage {
    fn compute(category: FitCategory, resume: &KeywordSet, wanted: &KeywordSet) -> Self {
        let have: Vec<String> = wanted.intersection(resume).cloned().collect();
        let missing: Vec<String> = wanted.difference(resume).cloned().collect();
        let ratio = have.len() as f64 / wanted.len().max(1) as f64;

        Self {
            category,
            weight: FIT_WEIGHTS.for_category(category),
            ratio,
            have,
            missing,
        }
    }

    pub fn contribution(&self) -> f64 {
        self.ratio * self.weight
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitBreakdown {
    pub required_technical: CategoryCoverage,
    pub required_soft: CategoryCoverage,
    pub nice_technical: CategoryCoverage,
    pub nice_soft: CategoryCoverage,
}

impl FitBreakdown {
    /// Categories in fixed display order.
    pub fn categories(&self) -> [&CategoryCoverage; 4] {
        [
            &self.required_technical,
            &self.required_soft,
            &self.nice_technical,
            &self.nice_soft,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitScore {
    /// 0.0 to 100.0, one decimal place.
    pub value: f64,
    pub breakdown: FitBreakdown,
}

impl FitScore {
    /// Required keywords the resume lacks, technical first.
    pub fn missing_required(&self) -> Vec<&str> {
        self.breakdown
            .required_technical
            .missing
            .iter()
            .chain(self.breakdown.required_soft.missing.iter())
            .map(String::as_str)
            .collect()
    }

    /// Every missing keyword across all four categories.
    pub fn missing_all(&self) -> Vec<&str> {
        self.breakdown
            .categories()
            .into_iter()
            .flat_map(|c| c.missing.iter().map(String::as_str))
            .collect()
    }
}

/// Score resume keywords against separate required and nice-to-have sets.
pub fn compute_fit_score(
    vocabulary: &Vocabulary,
    resume_keywords: &KeywordSet,
    required: &KeywordSet,
    nice_to_have: &KeywordSet,
) -> FitScore {
    let (required_tech, required_soft) = vocabulary.partition(required);
    let (nice_tech, nice_soft) = vocabulary.partition(nice_to_have);

    let breakdown = FitBreakdown {
        required_technical: CategoryCoverage::compute(
            FitCategory::RequiredTechnical,
            resume_keywords,
            &required_tech,
        ),
        required_soft: CategoryCoverage::compute(
            FitCategory::RequiredSoft,
            resume_keywords,
            &required_soft,
        ),
        nice_technical: CategoryCoverage::compute(
            FitCategory::NiceTechnical,
            resume_keywords,
            &nice_tech,
        ),
        nice_soft: CategoryCoverage::compute(FitCategory::NiceSoft, resume_keywords, &nice_soft),
    };

    let raw: f64 = breakdown.categories().iter().map(|c| c.contribution()).sum();
    let value = round_one_decimal(raw.clamp(0.0, FIT_WEIGHTS.sum()));

    FitScore { value, breakdown }
}

/// Score resume keywords against a parsed requirement profile.
pub fn score_profile(
    vocabulary: &Vocabulary,
    resume_keywords: &KeywordSet,
    profile: &RequirementProfile,
) -> FitScore {
    compute_fit_score(
        vocabulary,
        resume_keywords,
        &profile.required,
        &profile.nice_to_have,
    )
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
