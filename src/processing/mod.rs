//! ATS compatibility analysis engine

pub mod resume;
pub mod text_processor;
pub mod issues;
pub mod formatting_checker;
pub mod section_checker;
pub mod contact_validator;
pub mod bullet_analyzer;
pub mod keyword_analyzer;
pub mod scoring;
pub mod suggestions;
pub mod ats_matcher;
pub mod optimizer;
pub mod analyzer;
