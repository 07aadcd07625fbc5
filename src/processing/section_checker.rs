//! Presence checks for the core resume sections

use crate::processing::issues::{score_after, Issue, IssueKind, ResumeSection, Severity};
use crate::processing::resume::ResumeRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionsResult {
    pub score: u8,
    pub found: Vec<ResumeSection>,
    pub missing: Vec<ResumeSection>,
    pub issues: Vec<Issue>,
}

impl ResumeSection {
    /// Points lost when the section is absent
    pub fn weight(self) -> i32 {
        match self {
            ResumeSection::Work => 20,
            ResumeSection::Education => 15,
            ResumeSection::Skills => 15,
        }
    }
}

pub fn check_sections(resume: &ResumeRecord) -> SectionsResult {
    let presence = [
        (ResumeSection::Work, !resume.work.is_empty()),
        (ResumeSection::Education, !resume.education.is_empty()),
        (ResumeSection::Skills, !resume.skills.is_empty()),
    ];

    let mut found = Vec::new();
    let mut missing = Vec::new();
    let mut issues = Vec::new();

    for (section, present) in presence {
        if present {
            found.push(section);
        } else {
            missing.push(section);
            issues.push(Issue::new(
                IssueKind::MissingSection(section),
                Severity::High,
                format!("Missing {} section", section),
                -section.weight(),
            ));
        }
    }

    SectionsResult {
        score: score_after(&issues),
        found,
        missing,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::resume::{Education, SkillGroup, WorkEntry};

    #[test]
    fn test_all_sections_missing() {
        let result = check_sections(&ResumeRecord::default());

        assert_eq!(
            result.missing,
            vec![ResumeSection::Work, ResumeSection::Education, ResumeSection::Skills]
        );
        assert!(result.found.is_empty());
        assert_eq!(result.score, 50);
        assert_eq!(result.issues.len(), 3);
    }

    #[test]
    fn test_all_sections_present() {
        let resume = ResumeRecord {
            work: vec![WorkEntry::default()],
            education: vec![Education::default()],
            skills: vec![SkillGroup::default()],
            ..Default::default()
        };
        let result = check_sections(&resume);

        assert_eq!(result.score, 100);
        assert_eq!(result.found.len(), 3);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_only_work_missing() {
        let resume = ResumeRecord {
            education: vec![Education::default()],
            skills: vec![SkillGroup::default()],
            ..Default::default()
        };
        let result = check_sections(&resume);

        assert_eq!(result.score, 80);
        assert_eq!(result.missing, vec![ResumeSection::Work]);
        assert_eq!(result.issues[0].message, "Missing work section");
    }
}
