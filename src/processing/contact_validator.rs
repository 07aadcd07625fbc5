//! Contact information validation

use crate::processing::issues::{score_after, ContactField, Issue, IssueKind, Severity};
use crate::processing::resume::{non_blank, ResumeRecord};
use crate::processing::text_processor::{digits, TextProcessor};
use serde::{Deserialize, Serialize};

const MISSING_FIELD_PENALTY: i32 = -10;
const FORMAT_PENALTY: i32 = -5;
const MIN_PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResult {
    pub score: u8,
    /// False when any required field is missing; format problems do not count
    pub complete: bool,
    pub issues: Vec<Issue>,
}

pub fn validate_contact(resume: &ResumeRecord, processor: &TextProcessor) -> ContactResult {
    let basics = &resume.basics;
    let mut issues = Vec::new();

    let fields = [
        (ContactField::Name, non_blank(&basics.name)),
        (ContactField::Email, non_blank(&basics.email)),
        (ContactField::Phone, non_blank(&basics.phone)),
    ];

    for (field, value) in fields {
        if value.is_none() {
            issues.push(Issue::new(
                IssueKind::MissingContactField(field),
                Severity::High,
                format!("Missing {}", field),
                MISSING_FIELD_PENALTY,
            ));
        }
    }
    let complete = issues.is_empty();

    if let Some(email) = non_blank(&basics.email) {
        if !processor.is_valid_email(email) {
            issues.push(Issue::new(
                IssueKind::InvalidEmail,
                Severity::Medium,
                "Invalid email format",
                FORMAT_PENALTY,
            ));
        }
    }

    if let Some(phone) = non_blank(&basics.phone) {
        if digits(phone).len() < MIN_PHONE_DIGITS {
            issues.push(Issue::new(
                IssueKind::PhoneMissingAreaCode,
                Severity::Medium,
                "Phone number should include area code",
                FORMAT_PENALTY,
            ));
        }
    }

    ContactResult {
        score: score_after(&issues),
        complete,
        issues,
    }
}
