//! Structured resume record and full-text extraction

use crate::error::{AtsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub basics: Basics,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    SingleColumn,
    MultiColumn,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basics {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub study_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Returns the trimmed value when it carries any text.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl ResumeRecord {
    /// Parse a record from JSON, rejecting anything that is not an object
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| AtsError::InvalidInput(format!("Resume is not valid JSON: {}", e)))?;

        if !value.is_object() {
            return Err(AtsError::InvalidInput(
                "Resume record must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| AtsError::InvalidInput(format!("Malformed resume record: {}", e)))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| AtsError::InvalidInput(format!("Malformed resume record: {}", e)))
    }

    /// Every highlight across every position of every work entry
    pub fn highlights(&self) -> impl Iterator<Item = &String> {
        self.work
            .iter()
            .flat_map(|entry| entry.positions.iter())
            .flat_map(|position| position.highlights.iter())
    }

    /// Concatenate all résumé text into one lowercase string.
    ///
    /// Field order: basics, then each position's title and company followed by
    /// its highlights, then education, then skill items.
    pub fn full_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();

        parts.extend(non_blank(&self.basics.name));
        parts.extend(non_blank(&self.basics.label));
        parts.extend(non_blank(&self.basics.summary));

        for entry in &self.work {
            for position in &entry.positions {
                parts.extend(non_blank(&position.title));
                parts.extend(non_blank(&entry.company));
                parts.extend(position.highlights.iter().map(String::as_str));
            }
        }

        for education in &self.education {
            parts.extend(non_blank(&education.institution));
            parts.extend(non_blank(&education.area));
            parts.extend(non_blank(&education.study_type));
        }

        for group in &self.skills {
            parts.extend(group.items.iter().map(String::as_str));
        }

        parts.join(" ").to_lowercase()
    }
}
