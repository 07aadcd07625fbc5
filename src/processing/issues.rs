//! Diagnostic issues shared by every category analyzer

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Formatting,
    Sections,
    Keywords,
    Contact,
    Bullets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSection {
    Work,
    Education,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum IssueKind {
    Columns,
    MissingSection(ResumeSection),
    MissingContactField(ContactField),
    InvalidEmail,
    PhoneMissingAreaCode,
    LowMetrics,
    WeakActionVerbs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    /// Signed score deduction
    pub points: i32,
}

impl Severity {
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
        }
    }
}

impl IssueKind {
    /// Remediation text shown alongside the issue
    pub fn solution(&self) -> String {
        match self {
            IssueKind::Columns => "Consider single-column layout for ATS versions".to_string(),
            IssueKind::MissingSection(section) => format!(
                "Add a clear \"{}\" section to your resume",
                section.to_string().to_uppercase()
            ),
            IssueKind::LowMetrics | IssueKind::WeakActionVerbs => {
                "Use action verbs and include specific metrics to quantify your achievements"
                    .to_string()
            }
            IssueKind::MissingContactField(_)
            | IssueKind::InvalidEmail
            | IssueKind::PhoneMissingAreaCode => {
                "Ensure all contact information is complete and properly formatted".to_string()
            }
        }
    }
}

impl Issue {
    pub fn new(kind: IssueKind, severity: Severity, message: impl Into<String>, points: i32) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            points,
        }
    }
}

/// Apply the issues' deductions to a perfect score, clamped to 0..=100
pub fn score_after(issues: &[Issue]) -> u8 {
    let total = issues.iter().fold(100i32, |acc, issue| acc + issue.points);
    total.clamp(0, 100) as u8
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Formatting => "formatting",
            Category::Sections => "sections",
            Category::Keywords => "keywords",
            Category::Contact => "contact",
            Category::Bullets => "bullets",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ResumeSection::Work => "work",
            ResumeSection::Education => "education",
            ResumeSection::Skills => "skills",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_section_solution_is_uppercased() {
        let kind = IssueKind::MissingSection(ResumeSection::Education);
        assert_eq!(kind.solution(), "Add a clear \"EDUCATION\" section to your resume");
    }

    #[test]
    fn test_score_is_clamped() {
        let issues: Vec<Issue> = (0..12)
            .map(|_| Issue::new(IssueKind::LowMetrics, Severity::Medium, "x", -10))
            .collect();
        assert_eq!(score_after(&issues), 0);
        assert_eq!(score_after(&[]), 100);
    }

    #[test]
    fn test_severity_rank_order() {
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
    }
}
