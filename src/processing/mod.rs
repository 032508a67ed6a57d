//! Text analysis: keyword extraction, requirement splitting, seniority,
//! fit scoring and salary benchmarks

pub mod vocabulary;
pub mod keywords;
pub mod requirements;
pub mod seniority;
pub mod fit_scoring;
pub mod salary;
pub mod analyzer;
