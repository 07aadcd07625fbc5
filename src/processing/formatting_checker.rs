//! Layout checks that can be inferred from structured data

use crate::processing::issues::{score_after, Issue, IssueKind, Severity};
use crate::processing::resume::{Layout, ResumeRecord};
use serde::{Deserialize, Serialize};

const MULTI_COLUMN_PENALTY: i32 = -10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingResult {
    pub score: u8,
    pub issues: Vec<Issue>,
}

pub fn check_formatting(resume: &ResumeRecord) -> FormattingResult {
    let mut issues = Vec::new();

    if resume.layout == Some(Layout::MultiColumn) {
        issues.push(Issue::new(
            IssueKind::Columns,
            Severity::Medium,
            "Multi-column layouts may not parse correctly in ATS systems",
            MULTI_COLUMN_PENALTY,
        ));
    }

    FormattingResult {
        score: score_after(&issues),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_layout_is_perfect() {
        let result = check_formatting(&ResumeRecord::default());
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_multi_column_penalty() {
        let resume = ResumeRecord {
            layout: Some(Layout::MultiColumn),
            ..Default::default()
        };
        let result = check_formatting(&resume);

        assert_eq!(result.score, 90);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Columns);
        assert_eq!(result.issues[0].severity, Severity::Medium);
        assert_eq!(result.issues[0].points, -10);
    }

    #[test]
    fn test_single_column_and_unknown_layouts_pass() {
        for layout in [Layout::SingleColumn, Layout::Unknown] {
            let resume = ResumeRecord {
                layout: Some(layout),
                ..Default::default()
            };
            assert_eq!(check_formatting(&resume).score, 100);
        }
    }
}
