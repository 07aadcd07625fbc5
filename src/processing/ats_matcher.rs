//! Job description keyword extraction and résumé overlap scoring

use crate::config::MatchingConfig;
use crate::processing::resume::ResumeRecord;
use crate::processing::text_processor::TextProcessor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const MIN_KEYWORD_LEN: usize = 3;

const TECH_TERMS: &[&str] = &[
    "python", "javascript", "typescript", "react", "angular", "vue", "node", "nodejs", "aws",
    "azure", "gcp", "docker", "kubernetes", "sql", "nosql", "postgresql", "mysql", "mongodb",
    "java", "c++", "rust", "golang", "git", "linux", "api", "rest", "graphql", "terraform",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "collaboration", "mentoring", "interpersonal",
    "adaptability", "organization", "ownership", "initiative", "negotiation", "presentation",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResult {
    pub match_score: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<KeywordSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSuggestion {
    pub keyword: String,
    pub suggestion: String,
    pub sections: Vec<String>,
}

/// Coarse grouping used to decide where a missing keyword belongs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    Technical,
    Soft,
    General,
}

impl KeywordKind {
    pub fn target_sections(self) -> &'static [&'static str] {
        match self {
            KeywordKind::Technical => &["skills", "work experience"],
            KeywordKind::Soft => &["summary", "work experience"],
            KeywordKind::General => &["work experience", "skills"],
        }
    }
}

pub struct ATSMatcher {
    tech_terms: HashSet<&'static str>,
    soft_skills: HashSet<&'static str>,
    max_keywords: usize,
    min_frequency: usize,
}

impl ATSMatcher {
    pub fn new(config: &MatchingConfig) -> Self {
        Self {
            tech_terms: TECH_TERMS.iter().copied().collect(),
            soft_skills: SOFT_SKILLS.iter().copied().collect(),
            max_keywords: config.max_keywords,
            min_frequency: config.min_keyword_frequency,
        }
    }

    /// Most frequent salient terms of `text`, most frequent first.
    ///
    /// Ties keep first-occurrence order.
    pub fn extract_keywords(&self, text: &str, processor: &TextProcessor) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for token in processor.tokenize(text) {
            if token.chars().count() < MIN_KEYWORD_LEN || processor.is_stop_word(&token) {
                continue;
            }
            let count = counts.entry(token.clone()).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }

        let mut keywords: Vec<(String, usize)> = order
            .into_iter()
            .filter_map(|token| {
                let count = counts[&token];
                (count >= self.min_frequency).then_some((token, count))
            })
            .collect();
        keywords.sort_by(|a, b| b.1.cmp(&a.1));

        keywords
            .into_iter()
            .take(self.max_keywords)
            .map(|(keyword, _)| keyword)
            .collect()
    }

    pub fn classify(&self, keyword: &str) -> KeywordKind {
        if self.tech_terms.contains(keyword) {
            KeywordKind::Technical
        } else if self.soft_skills.contains(keyword) {
            KeywordKind::Soft
        } else {
            KeywordKind::General
        }
    }

    pub fn match_job_description(
        &self,
        resume: &ResumeRecord,
        job_text: &str,
        processor: &TextProcessor,
    ) -> JobMatchResult {
        let resume_text = resume.full_text();
        let keywords = self.extract_keywords(job_text, processor);

        let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = keywords
            .iter()
            .cloned()
            .partition(|keyword| resume_text.contains(keyword.as_str()));

        let match_score = if keywords.is_empty() {
            0
        } else {
            (matched_keywords.len() as f32 / keywords.len() as f32 * 100.0).round() as u8
        };

        debug!(
            "Job match: {} of {} keywords present ({}%)",
            matched_keywords.len(),
            keywords.len(),
            match_score
        );

        let suggestions = missing_keywords
            .iter()
            .map(|keyword| self.suggest_placement(keyword))
            .collect();

        JobMatchResult {
            match_score,
            matched_keywords,
            missing_keywords,
            suggestions,
        }
    }

    fn suggest_placement(&self, keyword: &str) -> KeywordSuggestion {
        let sections = self.classify(keyword).target_sections();
        KeywordSuggestion {
            keyword: keyword.to_string(),
            suggestion: format!("Consider adding \"{}\" to your {}", keyword, sections[0]),
            sections: sections.iter().map(|s| s.to_string()).collect(),
        }
    }
}
