//! resume-ready: job fit and salary alignment analyzer

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use resume_ready::cli::{self, Cli, Commands, ConfigAction};
use resume_ready::config::{Config, OutputFormat};
use resume_ready::input::InputManager;
use resume_ready::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_ready::output::report::join_or_none;
use resume_ready::processing::analyzer::{AnalysisRequest, JobFitAnalyzer};
use resume_ready::processing::salary::{
    compare_salary, estimate_salary_band, format_usd, SALARY_BENCHMARKS,
};
use resume_ready::processing::seniority::infer_seniority;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Config commands run before the strict load so a broken file can be reset
    let result = match cli.command {
        Commands::Config { action } => {
            run_config_command(action, cli.config.as_deref(), &config_path)
        }
        command => {
            let config = match load_config(cli.config.as_deref()) {
                Ok(config) => config,
                Err(e) => {
                    error!("Failed to load configuration: {}", e);
                    process::exit(1);
                }
            };
            run_command(command, config, &config_path).await
        }
    };

    if let Err(e) = result {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(explicit: Option<&Path>) -> resume_ready::Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            role,
            location,
            expected_salary,
            output,
            save,
            detailed,
        } => {
            // Parse output format
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            // Build the analyzer once from the configured vocabulary
            let analyzer = JobFitAnalyzer::new(config.vocabulary())
                .context("Failed to build keyword matcher")?;

            // Extract resume and job description text
            let mut input_manager = InputManager::new();
            let resume_text = input_manager
                .extract_text(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;
            let job_text = input_manager
                .extract_text(&job)
                .await
                .with_context(|| format!("Failed to read job description {}", job.display()))?;

            info!(
                "Analyzing {} ({} chars) against {} ({} chars)",
                resume.display(),
                resume_text.len(),
                job.display(),
                job_text.len()
            );

            // Run the analysis
            let report = analyzer.analyze(&AnalysisRequest {
                job_description: job_text,
                resume: resume_text,
                role,
                location_tier: location.unwrap_or_else(|| config.analysis.default_location_tier.clone()),
                expected_salary,
            });

            // Render and print
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed,
                config.output.pretty_json,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                let target = resolve_save_path(save_path, &output_format, &resume);
                // Saved console output is the uncoloured text form.
                let content = if output_format == OutputFormat::Console {
                    generator.generate_report(&report, &OutputFormat::Text)?
                } else {
                    rendered
                };
                save_report_to_file(&content, &target)
                    .with_context(|| format!("Failed to save report to {}", target.display()))?;
                println!("💾 Report saved to {}", target.display());
            }
        }

        Commands::Keywords { file } => {
            let analyzer = JobFitAnalyzer::new(config.vocabulary())?;
            let text = read_input(&file).await?;
            let keywords = analyzer.extract_keywords(&text);
            let (technical, soft) = analyzer.vocabulary().partition(&keywords);

            println!("🔍 Keywords in {}\n", file.display());
            println!("Technical ({}): {}", technical.len(), join_set(&technical));
            println!("Soft skills ({}): {}", soft.len(), join_set(&soft));
        }

        Commands::Requirements { file } => {
            let analyzer = JobFitAnalyzer::new(config.vocabulary())?;
            let text = read_input(&file).await?;
            let profile = analyzer.split_requirements(&text);

            println!("📋 Requirements in {}\n", file.display());
            println!("Required ({}): {}", profile.required.len(), join_set(&profile.required));
            println!(
                "Nice-to-have ({}): {}",
                profile.nice_to_have.len(),
                join_set(&profile.nice_to_have)
            );
            if profile.required_from_full_text {
                println!("\n⚠️  No required section detected; required keywords taken from the full description.");
            }
        }

        Commands::Seniority { file } => {
            let text = read_input(&file).await?;
            let seniority = infer_seniority(&text);

            println!("🎓 Seniority: {}", seniority.level);
            if seniority.years_required > 0 {
                println!("Minimum years: {}", seniority.years_required);
            } else {
                println!("Minimum years: not specified");
            }
        }

        Commands::Salary {
            role,
            location,
            expected,
        } => {
            let location =
                location.unwrap_or_else(|| config.analysis.default_location_tier.clone());

            match estimate_salary_band(&role, &location) {
                Some(band) => {
                    println!("💰 {} ({}): {}", band.role, band.location, band);
                    if let Some(expected) = expected {
                        let verdict = compare_salary(expected, &band);
                        println!("{}: {}", verdict.status, verdict.note);
                    }
                }
                None => {
                    println!("No benchmark available for role '{}'.", role.trim());
                    println!("💡 Run `resume-ready roles` to see supported roles.");
                }
            }
        }

        Commands::Roles => {
            println!("📊 Salary benchmarks (standard tier, USD)\n");
            for (role, low, mid, high) in SALARY_BENCHMARKS {
                println!(
                    "  {:<22} {} - {} (mid {})",
                    role,
                    format_usd(i64::from(*low)),
                    format_usd(i64::from(*high)),
                    format_usd(i64::from(*mid))
                );
            }
        }

        Commands::Config { action } => {
            run_config_command(action, Some(config_path), config_path)?;
        }
    }

    Ok(())
}

fn run_config_command(
    action: Option<ConfigAction>,
    explicit: Option<&Path>,
    config_path: &Path,
) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            let config = load_config(explicit)
                .with_context(|| format!("Failed to load {}", config_path.display()))?;

            println!("⚙️  Current Configuration\n");
            println!("Default location tier: {}", config.analysis.default_location_tier);
            println!(
                "Extra technical terms: {}",
                join_or_none(&config.analysis.extra_technical_terms)
            );
            println!(
                "Extra soft-skill terms: {}",
                join_or_none(&config.analysis.extra_soft_skill_terms)
            );
            println!("\nOutput:");
            println!("  Format: {:?}", config.output.format);
            println!("  Detailed: {}", config.output.detailed);
            println!("  Colors: {}", config.output.color_output);
            println!("  Pretty JSON: {}", config.output.pretty_json);
        }

        Some(ConfigAction::Reset) => {
            println!("🔄 Resetting configuration to defaults...");
            Config::reset(config_path)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;
            println!("✅ Configuration reset successfully!");
        }

        Some(ConfigAction::Path) => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

async fn read_input(path: &Path) -> Result<String> {
    InputManager::new()
        .with_cache(false)
        .extract_text(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// A directory target gets a suggested, timestamped file name.
fn resolve_save_path(path: PathBuf, format: &OutputFormat, resume: &Path) -> PathBuf {
    if path.is_dir() {
        let resume_name = resume.to_string_lossy();
        path.join(suggest_filename(format, &resume_name, true))
    } else {
        path
    }
}

fn join_set(items: &std::collections::BTreeSet<String>) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
