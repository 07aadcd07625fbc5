//! Analysis engine coordinating the category analyzers, scoring and suggestions

use crate::config::{Config, ScoringConfig};
use crate::error::Result;
use crate::processing::ats_matcher::{ATSMatcher, JobMatchResult};
use crate::processing::bullet_analyzer::{analyze_bullets, BulletsResult};
use crate::processing::contact_validator::{validate_contact, ContactResult};
use crate::processing::formatting_checker::{check_formatting, FormattingResult};
use crate::processing::issues::Category;
use crate::processing::keyword_analyzer::{KeywordAnalyzer, KeywordsResult};
use crate::processing::optimizer::ResumeOptimizer;
use crate::processing::resume::ResumeRecord;
use crate::processing::scoring::composite_score;
use crate::processing::section_checker::{check_sections, SectionsResult};
use crate::processing::suggestions::{generate_suggestions, Suggestion};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Composite score (0-100)
    pub score: u8,
    pub formatting: FormattingResult,
    pub sections: SectionsResult,
    pub contact: ContactResult,
    pub bullets: BulletsResult,
    pub keywords: KeywordsResult,
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_match: Option<JobMatchResult>,
}

impl AnalysisResult {
    pub fn category_scores(&self) -> [(Category, u8); 5] {
        [
            (Category::Formatting, self.formatting.score),
            (Category::Sections, self.sections.score),
            (Category::Keywords, self.keywords.score),
            (Category::Contact, self.contact.score),
            (Category::Bullets, self.bullets.score),
        ]
    }
}

/// Stateless ATS compatibility engine.
///
/// Holds only compiled patterns and constant tables, so one instance can be
/// shared across threads.
pub struct AtsEngine {
    text_processor: TextProcessor,
    keyword_analyzer: KeywordAnalyzer,
    ats_matcher: ATSMatcher,
    optimizer: ResumeOptimizer,
    weights: ScoringConfig,
}

impl AtsEngine {
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            text_processor: TextProcessor::new()?,
            keyword_analyzer: KeywordAnalyzer::new()?,
            ats_matcher: ATSMatcher::new(&config.matching),
            optimizer: ResumeOptimizer::new()?,
            weights: config.scoring.clone(),
        })
    }

    pub fn analyze(&self, resume: &ResumeRecord) -> AnalysisResult {
        let formatting = check_formatting(resume);
        let sections = check_sections(resume);
        let contact = validate_contact(resume, &self.text_processor);
        let bullets = analyze_bullets(resume, &self.text_processor);
        let keywords = self.keyword_analyzer.analyze(resume);

        let suggestions = generate_suggestions([
            (Category::Formatting, formatting.issues.as_slice()),
            (Category::Sections, sections.issues.as_slice()),
            (Category::Bullets, bullets.issues.as_slice()),
            (Category::Contact, contact.issues.as_slice()),
        ]);

        let mut result = AnalysisResult {
            score: 0,
            formatting,
            sections,
            contact,
            bullets,
            keywords,
            suggestions,
            job_match: None,
        };
        result.score = composite_score(&result.category_scores(), &self.weights);

        debug!(
            "Analysis complete: score {} with {} suggestions",
            result.score,
            result.suggestions.len()
        );

        result
    }

    /// Like [`analyze`](Self::analyze), with the keyword category scored
    /// against a job posting instead of the fixed base.
    pub fn analyze_with_job_description(&self, resume: &ResumeRecord, job_text: &str) -> AnalysisResult {
        let mut result = self.analyze(resume);
        let job_match = self.match_job_description(resume, job_text);

        result.keywords.score = job_match.match_score;
        result.score = composite_score(&result.category_scores(), &self.weights);
        result.job_match = Some(job_match);
        result
    }

    pub fn match_job_description(&self, resume: &ResumeRecord, job_text: &str) -> JobMatchResult {
        self.ats_matcher
            .match_job_description(resume, job_text, &self.text_processor)
    }

    pub fn generate_optimized_version(&self, resume: &ResumeRecord) -> ResumeRecord {
        self.optimizer.optimize(resume, &self.text_processor)
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.ats_matcher.extract_keywords(text, &self.text_processor)
    }
}
