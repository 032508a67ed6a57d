//! CLI interface for resume-ready

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ready")]
#[command(version)]
#[command(about = "Job fit and salary alignment analyzer")]
#[command(long_about = "Score how well a resume covers a job description's required and nice-to-have keywords, infer the role's seniority, and compare an expected salary against a market band")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Target role for the salary benchmark, e.g. "data scientist"
        #[arg(long)]
        role: Option<String>,

        /// Location tier: remote, low-cost, standard, high-cost
        #[arg(short, long)]
        location: Option<String>,

        /// Expected annual salary in USD
        #[arg(short = 'e', long)]
        expected_salary: Option<i64>,

        /// Output format: console, text, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (a directory gets a suggested file name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,
    },

    /// List recognised technical and soft-skill keywords in a file
    Keywords {
        file: PathBuf,
    },

    /// Split a job description into required and nice-to-have keywords
    Requirements {
        file: PathBuf,
    },

    /// Infer the seniority level and minimum years from a job description
    Seniority {
        file: PathBuf,
    },

    /// Show the salary band for a role and optionally judge an expected salary
    Salary {
        #[arg(long)]
        role: String,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        expected: Option<i64>,
    },

    /// List roles with salary benchmarks
    Roles,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "text" | "txt" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, text, json, markdown",
            format
        )),
    }
}
