//! Bullet point quality: quantified results and action-verb openings

use crate::processing::issues::{score_after, Issue, IssueKind, Severity};
use crate::processing::resume::ResumeRecord;
use crate::processing::text_processor::{contains_digit, TextProcessor};
use serde::{Deserialize, Serialize};

const MIN_METRICS_RATIO: f32 = 0.30;
const MIN_ACTION_VERB_RATIO: f32 = 0.80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletsResult {
    pub score: u8,
    pub total: usize,
    pub with_metrics: usize,
    pub with_action_verbs: usize,
    pub issues: Vec<Issue>,
}

/// Share of `part` in `total`, 0.0 when there is nothing to divide
fn ratio(part: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        part as f32 / total as f32
    }
}

pub fn analyze_bullets(resume: &ResumeRecord, processor: &TextProcessor) -> BulletsResult {
    let mut total = 0;
    let mut with_metrics = 0;
    let mut with_action_verbs = 0;

    for highlight in resume.highlights() {
        total += 1;
        if contains_digit(highlight) {
            with_metrics += 1;
        }
        if processor.starts_with_action_verb(highlight) {
            with_action_verbs += 1;
        }
    }

    let mut issues = Vec::new();

    if ratio(with_metrics, total) < MIN_METRICS_RATIO {
        issues.push(Issue::new(
            IssueKind::LowMetrics,
            Severity::Medium,
            "Less than 30% of bullet points contain metrics",
            -20,
        ));
    }

    if ratio(with_action_verbs, total) < MIN_ACTION_VERB_RATIO {
        issues.push(Issue::new(
            IssueKind::WeakActionVerbs,
            Severity::Medium,
            "Not all bullet points start with action verbs",
            -15,
        ));
    }

    BulletsResult {
        score: score_after(&issues),
        total,
        with_metrics,
        with_action_verbs,
        issues,
    }
}
