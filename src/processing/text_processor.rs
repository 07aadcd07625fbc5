//! Lexical utilities: tokenization, stop words, action verbs and contact patterns

use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;

/// Strong verbs a bullet point is expected to open with, grouped by intent
pub const ACTION_VERBS: &[(&str, &[&str])] = &[
    (
        "leadership",
        &["Led", "Managed", "Directed", "Coordinated", "Supervised", "Mentored", "Spearheaded"],
    ),
    (
        "achievement",
        &["Achieved", "Exceeded", "Delivered", "Earned", "Won", "Surpassed", "Attained"],
    ),
    (
        "improvement",
        &["Improved", "Increased", "Reduced", "Optimized", "Streamlined", "Enhanced", "Accelerated"],
    ),
    (
        "creation",
        &["Created", "Developed", "Designed", "Built", "Launched", "Established", "Implemented"],
    ),
    (
        "analysis",
        &["Analyzed", "Evaluated", "Assessed", "Researched", "Identified", "Investigated", "Measured"],
    ),
];

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "for", "of", "in", "on", "at",
    "to", "by", "with", "from", "into", "onto", "over", "under", "about", "as", "than", "via",
    "per", "is", "are", "was", "were", "be", "been", "being", "am", "will", "would", "shall",
    "should", "can", "could", "may", "might", "must", "this", "that", "these", "those", "it",
    "its", "we", "our", "you", "your", "they", "their", "have", "has", "had", "not", "all",
    "any", "who", "what", "which", "also",
];

pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
    action_verbs: HashSet<String>,
    email_regex: Regex,
    non_word_regex: Regex,
}

impl TextProcessor {
    pub fn new() -> Result<Self> {
        let action_verbs = ACTION_VERBS
            .iter()
            .flat_map(|(_, verbs)| verbs.iter())
            .map(|verb| verb.to_lowercase())
            .collect();

        Ok(Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            action_verbs,
            email_regex: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?,
            non_word_regex: Regex::new(r"[^\w\s]")?,
        })
    }

    /// Lowercase, drop non-word characters and split on whitespace
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.non_word_regex
            .replace_all(&lowered, "")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// True when the first whitespace-delimited token is a known action verb
    pub fn starts_with_action_verb(&self, text: &str) -> bool {
        text.split_whitespace()
            .next()
            .map(|token| token.trim_end_matches(|c: char| c.is_ascii_punctuation()))
            .is_some_and(|token| self.is_action_verb(token))
    }

    pub fn is_action_verb(&self, word: &str) -> bool {
        self.action_verbs.contains(&word.to_lowercase())
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email_regex.is_match(email)
    }

    pub fn action_verb_count(&self) -> usize {
        self.action_verbs.len()
    }
}

pub fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

pub fn digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}
