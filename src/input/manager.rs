//! Input manager for handling different file types

use crate::error::{Result, ResumeReadyError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        // Validate file exists
        if !path.exists() {
            return Err(ResumeReadyError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        // Detect file type
        let file_type = FileType::from_path(path).ok_or_else(|| {
            ResumeReadyError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        if !file_type.is_supported() {
            let reason = match file_type {
                FileType::Pdf | FileType::Docx => format!(
                    "{} is a {:?} document; paste its text into a .txt or .md file",
                    path.display(),
                    file_type
                ),
                _ => format!("Unsupported file type for: {}", path.display()),
            };
            return Err(ResumeReadyError::UnsupportedFormat(reason));
        }

        // Route to appropriate extractor
        let text = if file_type == FileType::Markdown {
            info!("Processing markdown file: {}", path.display());
            MarkdownExtractor.extract(path).await?
        } else {
            info!("Reading plain text file: {}", path.display());
            PlainTextExtractor.extract(path).await?
        };

        // Cache the result
        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
