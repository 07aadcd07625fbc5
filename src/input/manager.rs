//! Input manager for résumé records and job postings

use crate::error::{AtsError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::resume::ResumeRecord;
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
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

    /// Read a structured résumé record from a JSON or TOML file
    pub async fn load_resume(&self, path: &Path) -> Result<ResumeRecord> {
        Self::ensure_exists(path)?;

        let file_type = FileType::from_path(path);
        if !file_type.is_record() {
            return Err(AtsError::UnsupportedFormat(format!(
                "Resume must be a .json or .toml record: {}",
                path.display()
            )));
        }

        info!("Loading resume record: {}", path.display());
        let content = fs::read_to_string(path).await?;

        match file_type {
            FileType::Toml => ResumeRecord::from_toml_str(&content),
            _ => ResumeRecord::from_json_str(&content),
        }
    }

    /// Extract plain text from a job posting file
    pub async fn load_job_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        Self::ensure_exists(path)?;

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Json | FileType::Toml | FileType::Unknown => {
                return Err(AtsError::UnsupportedFormat(format!(
                    "Unsupported job description format: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if path.exists() {
            Ok(())
        } else {
            Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )))
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
