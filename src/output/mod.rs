//! Report rendering for the command line

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{AnalysisReport, JobMatchReport, ReportMetadata};
