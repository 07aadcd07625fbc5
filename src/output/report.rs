//! Report envelopes that attach provenance to engine results

use crate::processing::analyzer::AnalysisResult;
use crate::processing::ats_matcher::JobMatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_path: String,
    pub job_path: Option<String>,
    pub tool_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchReport {
    pub metadata: ReportMetadata,
    pub job_match: JobMatchResult,
}

impl ReportMetadata {
    pub fn new(resume_path: impl Into<String>, job_path: Option<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            resume_path: resume_path.into(),
            job_path,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Qualitative band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreBand::Excellent,
            75..=89 => ScoreBand::Good,
            60..=74 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Needs work",
        }
    }
}
