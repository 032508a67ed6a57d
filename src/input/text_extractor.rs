//! Text extraction from plain text and markdown files

use crate::error::Result;
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Strip markdown syntax, keeping one block (heading, paragraph, list item) per line.
///
/// Headings survive as their own lines so requirement sections are still found.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::Start(Tag::Item) => text.push('\n'),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_)) => {
                text.push('\n')
            }
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_headings_become_lines() {
        let md = "# Data Engineer\n\n## Requirements\n\n- **Python**\n- `SQL`\n\n## Nice to have\n\n* Airflow\n";
        let text = markdown_to_text(md);
        assert_eq!(
            text,
            "Data Engineer\nRequirements\nPython\nSQL\nNice to have\nAirflow"
        );
    }

    #[test]
    fn test_nested_lists_split_per_item() {
        let md = "- Cloud\n  - AWS\n  - Azure\n";
        let text = markdown_to_text(md);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Cloud", "AWS", "Azure"]);
    }
}
