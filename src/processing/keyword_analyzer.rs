//! Achievement-verb density over the full résumé text

use crate::error::Result;
use crate::processing::issues::Issue;
use crate::processing::resume::ResumeRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score used when no job description is available to compare against
pub const BASE_KEYWORD_SCORE: u8 = 70;

pub const TRACKED_KEYWORDS: &[&str] = &[
    "managed",
    "led",
    "developed",
    "implemented",
    "created",
    "improved",
    "increased",
    "decreased",
    "achieved",
    "delivered",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordsResult {
    pub score: u8,
    pub found: Vec<String>,
    pub density: BTreeMap<String, usize>,
    pub issues: Vec<Issue>,
}

pub struct KeywordAnalyzer {
    patterns: Vec<(&'static str, Regex)>,
}

impl KeywordAnalyzer {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(TRACKED_KEYWORDS.len());
        for keyword in TRACKED_KEYWORDS {
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))?;
            patterns.push((*keyword, pattern));
        }

        Ok(Self { patterns })
    }

    pub fn analyze(&self, resume: &ResumeRecord) -> KeywordsResult {
        self.analyze_text(&resume.full_text())
    }

    /// `text` is expected to be lowercase already
    pub fn analyze_text(&self, text: &str) -> KeywordsResult {
        let mut found = Vec::new();
        let mut density = BTreeMap::new();

        for (keyword, pattern) in &self.patterns {
            let count = pattern.find_iter(text).count();
            if count > 0 {
                found.push(keyword.to_string());
                density.insert(keyword.to_string(), count);
            }
        }

        KeywordsResult {
            score: BASE_KEYWORD_SCORE,
            found,
            density,
            issues: Vec::new(),
        }
    }
}
