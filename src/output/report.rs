//! Job fit and salary alignment report

use crate::processing::fit_scoring::FitScore;
use crate::processing::salary::{format_usd, SalaryBand, SalaryStatus, SalaryVerdict};
use crate::processing::seniority::{SeniorityLevel, SeniorityProfile};
use crate::processing::vocabulary::CLOUD_PLATFORM_TERMS;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const REPORT_TITLE: &str = "Job Fit & Salary Alignment Report";

/// Fit score below which the summary should be retuned.
const TAILOR_THRESHOLD: f64 = 80.0;

/// Years above which a senior role needs scope and impact called out.
const SENIOR_YEARS_THRESHOLD: u32 = 6;

/// Everything a report is assembled from.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub role: Option<String>,
    pub location_tier: String,
    pub expected_salary: Option<i64>,
    pub seniority: SeniorityProfile,
    pub fit_score: FitScore,
    pub salary_band: Option<SalaryBand>,
    pub salary_verdict: Option<SalaryVerdict>,
    /// Set when required keywords came from the whole job description.
    pub required_from_full_text: bool,
}

/// Immutable analysis report. Rendering and export live in `output::formatter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub role: Option<String>,
    pub location_tier: String,
    pub expected_salary: Option<i64>,
    pub seniority: SeniorityProfile,
    pub fit_score: FitScore,
    pub salary_band: Option<SalaryBand>,
    pub salary_verdict: Option<SalaryVerdict>,
    pub required_from_full_text: bool,
    pub recommendations: Vec<String>,
    pub generator_version: String,
}

pub fn build_report(input: ReportInput) -> Report {
    build_report_at(input, Utc::now())
}

/// Same as [`build_report`] with an explicit timestamp.
pub fn build_report_at(input: ReportInput, generated_at: DateTime<Utc>) -> Report {
    let recommendations = recommendations(
        &input.fit_score,
        &input.seniority,
        input.salary_band.as_ref(),
        input.salary_verdict.as_ref(),
    );

    Report {
        generated_at,
        role: input.role,
        location_tier: input.location_tier,
        expected_salary: input.expected_salary,
        seniority: input.seniority,
        fit_score: input.fit_score,
        salary_band: input.salary_band,
        salary_verdict: input.salary_verdict,
        required_from_full_text: input.required_from_full_text,
        recommendations,
        generator_version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Rule table, evaluated in order; each rule adds at most one line.
pub fn recommendations(
    fit: &FitScore,
    seniority: &SeniorityProfile,
    band: Option<&SalaryBand>,
    verdict: Option<&SalaryVerdict>,
) -> Vec<String> {
    let mut lines = Vec::new();

    let missing_required = fit.missing_required();
    if !missing_required.is_empty() {
        lines.push(format!(
            "Prioritize closing the required gaps first: {}.",
            missing_required.join(", ")
        ));
    }

    let missing_any = fit.missing_all();
    let missing_cloud: Vec<&str> = CLOUD_PLATFORM_TERMS
        .iter()
        .copied()
        .filter(|term| missing_any.contains(term))
        .collect();
    if !missing_cloud.is_empty() {
        lines.push(format!(
            "Consider an associate-level cloud certification ({}) to cover the platform gap.",
            missing_cloud
                .iter()
                .map(|t| t.to_uppercase())
                .collect::<Vec<_>>()
                .join(" / ")
        ));
    }

    if seniority.level == SeniorityLevel::SeniorPlus
        && seniority.years_required > SENIOR_YEARS_THRESHOLD
    {
        lines.push(
            "Emphasize scope and impact: team size, budgets owned, systems led, and measurable outcomes."
                .to_string(),
        );
    }

    if fit.value < TAILOR_THRESHOLD {
        lines.push(
            "Tailor your summary and recent bullets to mirror the required keywords in this posting."
                .to_string(),
        );
    }

    if band.is_some() && verdict.is_some_and(|v| v.status == SalaryStatus::AboveMarket) {
        lines.push(
            "Your ask sits above the market band; consider moderating toward the midpoint or justify it with specialised skills."
                .to_string(),
        );
    }

    if lines.is_empty() {
        lines.push(
            "Your resume is well aligned with this role. Keep quantifying impact in each bullet."
                .to_string(),
        );
    }

    lines
}

impl Report {
    /// Canonical plain-text rendering. Every have/missing list appears once;
    /// the salary section appears only when a band was found.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", REPORT_TITLE));
        out.push_str(&format!(
            "Generated: {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        out.push_str(&format!(
            "Role: {}\n",
            self.role.as_deref().unwrap_or("(not specified)")
        ));
        out.push_str(&format!("Location: {}\n", self.location_tier));
        out.push_str(&format!("Seniority: {}\n", self.seniority));
        out.push_str(&format!("Fit Score: {:.1} / 100\n", self.fit_score.value));
        if self.required_from_full_text {
            out.push_str(
                "Note: no required section detected; required keywords taken from the full description.\n",
            );
        }
        out.push('\n');

        for coverage in self.fit_score.breakdown.categories() {
            out.push_str(&format!(
                "{} (have): {}\n",
                coverage.category,
                join_or_none(&coverage.have)
            ));
            out.push_str(&format!(
                "{} (missing): {}\n",
                coverage.category,
                join_or_none(&coverage.missing)
            ));
        }

        if let Some(band) = &self.salary_band {
            out.push('\n');
            out.push_str(&format!("Salary Band ({}): {}\n", band.location, band));
            match (&self.salary_verdict, self.expected_salary) {
                (Some(verdict), _) => {
                    out.push_str(&format!("Salary Verdict: {}. {}\n", verdict.status, verdict.note));
                }
                (None, Some(expected)) => {
                    out.push_str(&format!("Expected Salary: {}\n", format_usd(expected)));
                }
                (None, None) => {
                    out.push_str("Salary Verdict: no expected salary given.\n");
                }
            }
        }

        out.push_str("\nRecommendations:\n");
        for rec in &self.recommendations {
            out.push_str(&format!("- {}\n", rec));
        }

        out
    }
}

pub fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
