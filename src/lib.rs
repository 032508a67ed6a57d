//! Job fit and salary alignment analysis library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeReadyError};
pub use output::report::Report;
pub use processing::analyzer::{AnalysisRequest, JobFitAnalyzer};
