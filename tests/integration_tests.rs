//! Integration tests for resume-ready

use resume_ready::config::{Config, OutputFormat};
use resume_ready::input::InputManager;
use resume_ready::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_ready::processing::salary::SalaryStatus;
use resume_ready::processing::seniority::SeniorityLevel;
use resume_ready::{AnalysisRequest, JobFitAnalyzer, ResumeReadyError};
use std::path::Path;

async fn load(path: &str) -> String {
    InputManager::new()
        .extract_text(Path::new(path))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = load("tests/fixtures/sample_resume.txt").await;
    assert!(text.contains("Priya Raman"));
    assert!(text.contains("TensorFlow"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let text = load("tests/fixtures/sample_resume.md").await;
    assert!(text.contains("Priya Raman"));
    assert!(text.contains("Data Scientist"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/unsupported.xyz"))
        .await;
    assert!(matches!(result, Err(ResumeReadyError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_pdf_is_recognised_but_rejected() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/resume.pdf"))
        .await;
    assert!(matches!(result, Err(ResumeReadyError::UnsupportedFormat(_))));
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(matches!(result, Err(ResumeReadyError::InvalidInput(_))));
}

#[tokio::test]
async fn test_markdown_and_text_resumes_extract_same_keywords() {
    let analyzer = JobFitAnalyzer::with_default_vocabulary().unwrap();
    let from_txt = analyzer.extract_keywords(&load("tests/fixtures/sample_resume.txt").await);
    let from_md = analyzer.extract_keywords(&load("tests/fixtures/sample_resume.md").await);
    assert_eq!(from_txt, from_md);
    assert!(from_txt.contains("scikit-learn"));
    assert!(from_txt.contains("problem solving"));
}

#[tokio::test]
async fn test_full_pipeline_from_fixtures() {
    let analyzer = JobFitAnalyzer::with_default_vocabulary().unwrap();
    let request = AnalysisRequest {
        job_description: load("tests/fixtures/sample_job.txt").await,
        resume: load("tests/fixtures/sample_resume.txt").await,
        role: Some("Data Scientist".to_string()),
        location_tier: "high-cost".to_string(),
        expected_salary: Some(160_000),
    };

    let report = analyzer.analyze(&request);
    let breakdown = &report.fit_score.breakdown;

    assert!(!report.required_from_full_text);
    assert_eq!(breakdown.required_technical.have, vec!["python", "sql"]);
    assert_eq!(breakdown.required_technical.missing, vec!["spark"]);
    assert_eq!(breakdown.required_soft.have, vec!["communication"]);
    assert_eq!(breakdown.nice_technical.missing, vec!["aws"]);
    assert_eq!(breakdown.nice_soft.missing, vec!["leadership"]);

    // 2/3 * 45 + 25 + 0 + 0
    assert_eq!(report.fit_score.value, 55.0);

    assert_eq!(report.seniority.level, SeniorityLevel::SeniorPlus);
    assert_eq!(report.seniority.years_required, 5);

    let band = report.salary_band.as_ref().unwrap();
    assert_eq!((band.low, band.mid, band.high), (115_000, 155_250, 201_250));
    assert_eq!(
        report.salary_verdict.as_ref().unwrap().status,
        SalaryStatus::WithinMarket
    );

    assert_eq!(report.recommendations.len(), 3);
    assert!(report.recommendations[0].contains("spark"));
    assert!(report.recommendations[1].contains("AWS"));
    assert!(report.recommendations[2].contains("Tailor"));
}

#[tokio::test]
async fn test_job_without_sections_falls_back_to_full_text() {
    let analyzer = JobFitAnalyzer::with_default_vocabulary().unwrap();
    let job = load("tests/fixtures/sample_job_no_sections.txt").await;

    let profile = analyzer.split_requirements(&job);
    assert!(profile.required_from_full_text);
    assert!(profile.nice_to_have.is_empty());
    assert!(profile.required.contains("sql"));
    assert!(profile.required.contains("teamwork"));

    let report = analyzer.analyze(&AnalysisRequest {
        job_description: job,
        resume: load("tests/fixtures/sample_resume.txt").await,
        ..AnalysisRequest::default()
    });
    assert_eq!(report.seniority.level, SeniorityLevel::JuniorAssociate);
    assert!(report.render_text().contains("no required section detected"));
    assert!(report.salary_band.is_none());
}

#[tokio::test]
async fn test_config_extra_terms_reach_the_analyzer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.analysis.extra_technical_terms = vec!["Forecasting".to_string()];
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    let analyzer = JobFitAnalyzer::new(loaded.vocabulary()).unwrap();
    let keywords = analyzer.extract_keywords(&load("tests/fixtures/sample_resume.txt").await);
    assert!(keywords.contains("forecasting"));
}

#[tokio::test]
async fn test_save_report_in_every_format() {
    let analyzer = JobFitAnalyzer::with_default_vocabulary().unwrap();
    let report = analyzer.analyze(&AnalysisRequest {
        job_description: load("tests/fixtures/sample_job.txt").await,
        resume: load("tests/fixtures/sample_resume.md").await,
        role: Some("data scientist".to_string()),
        location_tier: "standard".to_string(),
        expected_salary: None,
    });

    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::with_options(false, true, true, true);

    for format in [
        OutputFormat::Text,
        OutputFormat::Console,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ] {
        let content = generator.generate_report(&report, &format).unwrap();
        let name = suggest_filename(&format, "sample_resume.md", false);
        let target = dir.path().join("reports").join(&name);

        save_report_to_file(&content, &target).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), content);
        assert!(name.starts_with("sample_resume_fit_report."));
    }
}
