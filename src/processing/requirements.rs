//! Required / nice-to-have segmentation of job descriptions

use crate::processing::keywords::KeywordExtractor;
use crate::processing::vocabulary::KeywordSet;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static REQUIRED_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:required|requirements|must[\s-]?haves?|we require|you must|minimum qualifications|basic qualifications)\b",
    )
    .expect("Invalid required heading regex")
});

static NICE_TO_HAVE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:nice[\s-]?to[\s-]?haves?|preferred|bonus|plus)\b")
        .expect("Invalid nice-to-have heading regex")
});

/// Markers stripped from the start of a line before heading detection.
const LEADING_MARKERS: &[char] = &['#', '*', '-', '•', '>', '_', ' ', '\t'];

/// Which block subsequent lines are accumulated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMode {
    None,
    Required,
    NiceToHave,
}

/// Keyword requirements derived from one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementProfile {
    pub required: KeywordSet,
    pub nice_to_have: KeywordSet,
    /// Set when `required` was recomputed from the whole job description.
    pub required_from_full_text: bool,
}

/// Classify a line as a heading, if it is one.
pub fn classify_heading(line: &str) -> Option<SplitMode> {
    let stripped = line.trim_start_matches(LEADING_MARKERS);

    if REQUIRED_HEADING.is_match(stripped) {
        Some(SplitMode::Required)
    } else if NICE_TO_HAVE_HEADING.is_match(stripped) {
        Some(SplitMode::NiceToHave)
    } else {
        None
    }
}

/// Split a job description into required and nice-to-have keyword sets.
///
/// Lines before the first heading belong to neither block, and heading lines
/// only switch mode. When the required block yields no keywords the required
/// set falls back to the keywords of the full text. Without any required
/// heading the nice-to-have set is also dropped, so no term is scored twice.
pub fn split_requirements(extractor: &KeywordExtractor, job_description: &str) -> RequirementProfile {
    let mut mode = SplitMode::None;
    let mut saw_required_heading = false;
    let mut required_block = String::new();
    let mut nice_block = String::new();

    for line in job_description.lines() {
        // Headings only switch mode
        if let Some(next) = classify_heading(line) {
            saw_required_heading |= next == SplitMode::Required;
            mode = next;
            continue;
        }

        let block = match mode {
            SplitMode::None => continue,
            SplitMode::Required => &mut required_block,
            SplitMode::NiceToHave => &mut nice_block,
        };
        block.push_str(line);
        block.push('\n');
    }

    let mut required = extractor.extract(&required_block);
    let mut nice_to_have = extractor.extract(&nice_block);

    let required_from_full_text = required.is_empty();
    if required_from_full_text {
        required = extractor.extract(job_description);
        if !saw_required_heading {
            nice_to_have.clear();
        }
    }

    debug!(
        "Requirements split: {} required, {} nice-to-have (full-text fallback: {})",
        required.len(),
        nice_to_have.len(),
        required_from_full_text
    );

    RequirementProfile {
        required,
        nice_to_have,
        required_from_full_text,
    }
}
