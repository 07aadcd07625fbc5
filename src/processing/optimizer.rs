//! Produces an ATS-friendly copy of a résumé record

use crate::error::Result;
use crate::processing::resume::{Layout, ResumeRecord};
use crate::processing::text_processor::{digits, TextProcessor};
use regex::Regex;
use std::collections::BTreeMap;

pub const SECTION_HEADERS: &[(&str, &str)] = &[
    ("summary", "PROFESSIONAL SUMMARY"),
    ("experience", "WORK EXPERIENCE"),
    ("education", "EDUCATION"),
    ("skills", "SKILLS"),
];

pub struct ResumeOptimizer {
    responsible_for: Regex,
    worked_on: Regex,
}

impl ResumeOptimizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            responsible_for: Regex::new(r"(?i)responsible for")?,
            worked_on: Regex::new(r"(?i)worked on")?,
        })
    }

    /// Returns a normalized deep copy; `resume` itself is left untouched
    pub fn optimize(&self, resume: &ResumeRecord, processor: &TextProcessor) -> ResumeRecord {
        let mut optimized = resume.clone();

        optimized.layout = Some(Layout::SingleColumn);
        optimized.section_headers = Some(
            SECTION_HEADERS
                .iter()
                .map(|(key, header)| (key.to_string(), header.to_string()))
                .collect::<BTreeMap<_, _>>(),
        );

        if let Some(phone) = optimized.basics.phone.as_mut() {
            if let Some(formatted) = format_phone(phone) {
                *phone = formatted;
            }
        }

        for highlight in optimized
            .work
            .iter_mut()
            .flat_map(|entry| entry.positions.iter_mut())
            .flat_map(|position| position.highlights.iter_mut())
        {
            if let Some(rewritten) = self.rewrite_highlight(highlight, processor) {
                *highlight = rewritten;
            }
        }

        optimized
    }

    /// `None` when the highlight already opens with an action verb or is blank
    pub fn rewrite_highlight(&self, highlight: &str, processor: &TextProcessor) -> Option<String> {
        if highlight.trim().is_empty() || processor.starts_with_action_verb(highlight) {
            return None;
        }

        if self.responsible_for.is_match(highlight) {
            return Some(self.responsible_for.replace(highlight, "Managed").into_owned());
        }
        if self.worked_on.is_match(highlight) {
            return Some(self.worked_on.replace(highlight, "Developed").into_owned());
        }

        let mut chars = highlight.chars();
        let first = chars.next()?;
        Some(format!("Contributed to {}{}", first.to_lowercase(), chars.as_str()))
    }
}

/// `(XXX) XXX-XXXX` when the phone carries exactly ten digits
pub fn format_phone(phone: &str) -> Option<String> {
    let digits = digits(phone);
    if digits.len() != 10 {
        return None;
    }
    Some(format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..]))
}
