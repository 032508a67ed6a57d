//! Output formatters: plain text, coloured console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{join_or_none, Report, REPORT_TITLE};
use crate::processing::salary::{format_usd, SalaryStatus};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a report in one output format
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Canonical plain-text output, suitable for TXT export
pub struct TextFormatter;

/// Terminal output with optional colours
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches to the formatter for a requested format
pub struct ReportGenerator {
    text_formatter: TextFormatter,
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        Ok(report.render_text())
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 90.0 => ("EXCELLENT", Color::Green),
            s if s >= 80.0 => ("STRONG", Color::BrightGreen),
            s if s >= 60.0 => ("MODERATE", Color::Yellow),
            s if s >= 40.0 => ("WEAK", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn status_color(status: SalaryStatus) -> Color {
        match status {
            SalaryStatus::BelowMarket => Color::Yellow,
            SalaryStatus::WithinMarket => Color::Green,
            SalaryStatus::AboveMarket => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("📊 {}", REPORT_TITLE.to_uppercase()), 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("Overview", 2));
        output.push_str(&format!(
            "💼 Role: {}\n",
            report.role.as_deref().unwrap_or("(not specified)")
        ));
        output.push_str(&format!("📍 Location: {}\n", report.location_tier));
        output.push_str(&format!("🎓 Seniority: {}\n", report.seniority));
        output.push_str(&format!(
            "🎯 Fit Score: {:.1}/100 {}\n",
            report.fit_score.value,
            self.format_score_badge(report.fit_score.value)
        ));
        if report.required_from_full_text {
            output.push_str(&self.colorize(
                "⚠️  No required section detected; required keywords taken from the full description.\n",
                Color::Yellow,
            ));
        }

        output.push_str(&self.format_header("Keyword Coverage", 2));
        for coverage in report.fit_score.breakdown.categories() {
            output.push_str(&format!(
                "{} ({:.0}% coverage, weight {:.0})\n",
                coverage.category,
                coverage.ratio * 100.0,
                coverage.weight
            ));
            output.push_str(&format!(
                "  ✅ Have: {}\n",
                self.colorize(&join_or_none(&coverage.have), Color::Green)
            ));
            output.push_str(&format!(
                "  ❌ Missing: {}\n",
                self.colorize(&join_or_none(&coverage.missing), Color::Red)
            ));
            if self.detailed {
                output.push_str(&format!(
                    "  Contribution: {:.1} points\n",
                    coverage.contribution()
                ));
            }
        }

        if let Some(band) = &report.salary_band {
            output.push_str(&self.format_header("Salary Alignment", 2));
            output.push_str(&format!("💰 Band ({}): {}\n", band.location, band));
            if let Some(verdict) = &report.salary_verdict {
                output.push_str(&format!(
                    "Verdict: {}\n",
                    self.colorize(&verdict.status.to_string(), Self::status_color(verdict.status))
                ));
                output.push_str(&format!("{}\n", verdict.note));
            } else if let Some(expected) = report.expected_salary {
                output.push_str(&format!("Expected: {}\n", format_usd(expected)));
            }
        }

        output.push_str(&self.format_header("💡 Recommendations", 2));
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, rec));
        }

        if self.detailed {
            output.push_str(&format!(
                "\nresume-ready v{}\n",
                report.generator_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: f64) -> &'static str {
        match score {
            s if s >= 90.0 => "🟢 Excellent",
            s if s >= 80.0 => "🟢 Strong",
            s if s >= 60.0 => "🟡 Moderate",
            s if s >= 40.0 => "🟠 Weak",
            _ => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# 📊 {}\n\n", REPORT_TITLE));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Version:** {}\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.generator_version
            ));
        }

        output.push_str("## Overview\n\n");
        output.push_str(&format!(
            "- **Role:** {}\n",
            report.role.as_deref().unwrap_or("(not specified)")
        ));
        output.push_str(&format!("- **Location:** {}\n", report.location_tier));
        output.push_str(&format!("- **Seniority:** {}\n", report.seniority));
        output.push_str(&format!(
            "- **Fit Score:** {:.1} / 100 {}\n\n",
            report.fit_score.value,
            Self::markdown_score_badge(report.fit_score.value)
        ));
        if report.required_from_full_text {
            output.push_str(
                "> No required section detected; required keywords taken from the full description.\n\n",
            );
        }

        output.push_str("## Keyword Coverage\n\n");
        output.push_str("| Category | Weight | Coverage | Have | Missing |\n");
        output.push_str("|----------|--------|----------|------|---------|\n");
        for coverage in report.fit_score.breakdown.categories() {
            output.push_str(&format!(
                "| {} | {:.0} | {:.0}% | {} | {} |\n",
                coverage.category,
                coverage.weight,
                coverage.ratio * 100.0,
                join_or_none(&coverage.have),
                join_or_none(&coverage.missing)
            ));
        }
        output.push('\n');

        if let Some(band) = &report.salary_band {
            output.push_str("## Salary Alignment\n\n");
            output.push_str(&format!("**Band ({}):** {}\n\n", band.location, band));
            if let Some(verdict) = &report.salary_verdict {
                output.push_str(&format!("**Verdict:** {}. {}\n\n", verdict.status, verdict.note));
            }
        }

        output.push_str("## 💡 Recommendations\n\n");
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, rec));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            text_formatter: TextFormatter,
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => self.text_formatter.format_report(report),
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console | OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_fit_report{}.{}", base_name, timestamp_suffix, extension)
}
