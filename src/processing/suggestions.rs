//! Turns category issues into a prioritized remediation list

use crate::processing::issues::{Category, Issue, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: Category,
    pub priority: Severity,
    pub message: String,
    pub solution: String,
}

/// One suggestion per issue, stable-sorted by priority.
///
/// Callers pass categories in presentation order; ties keep that order.
pub fn generate_suggestions<'a, I>(issues_by_category: I) -> Vec<Suggestion>
where
    I: IntoIterator<Item = (Category, &'a [Issue])>,
{
    let mut suggestions: Vec<Suggestion> = issues_by_category
        .into_iter()
        .flat_map(|(category, issues)| {
            issues.iter().map(move |issue| Suggestion {
                category,
                priority: issue.severity,
                message: issue.message.clone(),
                solution: issue.kind.solution(),
            })
        })
        .collect();

    suggestions.sort_by_key(|s| s.priority.rank());
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::issues::{ContactField, IssueKind, ResumeSection};

    #[test]
    fn test_sorted_by_priority_and_stable() {
        let formatting = vec![Issue::new(IssueKind::Columns, Severity::Medium, "columns", -10)];
        let sections = vec![
            Issue::new(IssueKind::MissingSection(ResumeSection::Work), Severity::High, "work", -20),
            Issue::new(IssueKind::MissingSection(ResumeSection::Skills), Severity::High, "skills", -15),
        ];
        let contact = vec![
            Issue::new(IssueKind::PhoneMissingAreaCode, Severity::Low, "phone", -5),
            Issue::new(IssueKind::MissingContactField(ContactField::Name), Severity::High, "name", -10),
        ];

        let suggestions = generate_suggestions([
            (Category::Formatting, formatting.as_slice()),
            (Category::Sections, sections.as_slice()),
            (Category::Contact, contact.as_slice()),
        ]);

        let messages: Vec<&str> = suggestions.iter().map(|s| s.message.as_str()).collect();
        assert_eq!(messages, vec!["work", "skills", "name", "columns", "phone"]);
        assert_eq!(suggestions[0].solution, "Add a clear \"WORK\" section to your resume");
        assert_eq!(suggestions[3].solution, "Consider single-column layout for ATS versions");
        assert_eq!(suggestions[2].category, Category::Contact);
    }

    #[test]
    fn test_no_issues_no_suggestions() {
        let empty: Vec<Issue> = Vec::new();
        assert!(generate_suggestions([(Category::Bullets, empty.as_slice())]).is_empty());
    }
}
