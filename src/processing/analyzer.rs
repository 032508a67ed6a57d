//! End-to-end job fit analysis: keywords, requirements, seniority, score, salary

use crate::error::Result;
use crate::output::report::{build_report, Report, ReportInput};
use crate::processing::fit_scoring::{score_profile, FitScore};
use crate::processing::keywords::KeywordExtractor;
use crate::processing::requirements::{split_requirements, RequirementProfile};
use crate::processing::salary::{compare_salary, estimate_salary_band};
use crate::processing::seniority::infer_seniority;
use crate::processing::vocabulary::{KeywordSet, Vocabulary};
use log::debug;

/// Inputs for a single analysis. Nothing here outlives the call.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub job_description: String,
    pub resume: String,
    pub role: Option<String>,
    pub location_tier: String,
    pub expected_salary: Option<i64>,
}

/// Runs the analysis pipeline against a fixed vocabulary.
///
/// Holds no per-request state, so one analyzer can serve any number of
/// requests, including from several threads.
pub struct JobFitAnalyzer {
    extractor: KeywordExtractor,
}

impl JobFitAnalyzer {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        Ok(Self {
            extractor: KeywordExtractor::new(vocabulary)?,
        })
    }

    pub fn with_default_vocabulary() -> Result<Self> {
        Self::new(Vocabulary::default())
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.extractor.vocabulary()
    }

    pub fn extract_keywords(&self, text: &str) -> KeywordSet {
        self.extractor.extract(text)
    }

    pub fn split_requirements(&self, job_description: &str) -> RequirementProfile {
        split_requirements(&self.extractor, job_description)
    }

    pub fn score(&self, resume_keywords: &KeywordSet, profile: &RequirementProfile) -> FitScore {
        score_profile(self.vocabulary(), resume_keywords, profile)
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> Report {
        // Keyword coverage and seniority
        let resume_keywords = self.extract_keywords(&request.resume);
        let profile = self.split_requirements(&request.job_description);
        let seniority = infer_seniority(&request.job_description);
        let fit_score = self.score(&resume_keywords, &profile);

        debug!(
            "Resume keywords: {}, seniority: {}, fit score: {:.1}",
            resume_keywords.len(),
            seniority,
            fit_score.value
        );

        // A blank role counts as no role
        let role = request
            .role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty());

        // Salary band and verdict
        let salary_band = role.and_then(|r| estimate_salary_band(r, &request.location_tier));
        let salary_verdict = match (&salary_band, request.expected_salary) {
            (Some(band), Some(expected)) => Some(compare_salary(expected, band)),
            _ => None,
        };

        // Report the tier actually applied, not the raw input
        let location_tier = salary_band
            .as_ref()
            .map(|b| b.location.to_string())
            .unwrap_or_else(|| request.location_tier.clone());

        build_report(ReportInput {
            role: role.map(str::to_string),
            location_tier,
            expected_salary: request.expected_salary,
            seniority,
            fit_score,
            salary_band,
            salary_verdict,
            required_from_full_text: profile.required_from_full_text,
        })
    }
}
