//! Output formatters for analysis and job match reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{AtsError, Result};
use crate::output::report::{AnalysisReport, JobMatchReport, ScoreBand};
use crate::processing::ats_matcher::JobMatchResult;
use crate::processing::issues::Severity;
use colored::{Color, Colorize};
use std::fmt::Write;
use unicode_segmentation::UnicodeSegmentation;

const SUMMARY_MESSAGE_WIDTH: usize = 72;

/// Trait for rendering reports into a target format
pub trait OutputFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String>;
    fn format_job_match(&self, report: &JobMatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Colored terminal output
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn fmt_err(err: std::fmt::Error) -> AtsError {
    AtsError::OutputFormatting(err.to_string())
}

/// Shorten `text` to at most `max` graphemes, marking the cut with an ellipsis
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    let mut truncated: String = graphemes[..max.saturating_sub(1)].concat();
    truncated.push('…');
    truncated
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn score(&self, score: u8) -> String {
        let color = match ScoreBand::from_score(score) {
            ScoreBand::Excellent | ScoreBand::Good => Color::Green,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        };
        self.paint(&format!("{:>3}/100", score), color)
    }

    fn priority(&self, priority: Severity) -> String {
        let color = match priority {
            Severity::High => Color::Red,
            Severity::Medium => Color::Yellow,
            Severity::Low => Color::Cyan,
        };
        self.paint(&format!("[{}]", priority), color)
    }

    fn message(&self, text: &str) -> String {
        if self.detailed {
            text.to_string()
        } else {
            truncate_graphemes(text, SUMMARY_MESSAGE_WIDTH)
        }
    }

    fn write_job_match(&self, out: &mut String, job_match: &JobMatchResult) -> std::fmt::Result {
        writeln!(out, "\n{}", self.heading("Job Description Match"))?;
        writeln!(out, "  Match score: {}", self.score(job_match.match_score))?;
        if !job_match.matched_keywords.is_empty() {
            writeln!(out, "  Matched: {}", self.paint(&job_match.matched_keywords.join(", "), Color::Green))?;
        }
        if !job_match.missing_keywords.is_empty() {
            writeln!(out, "  Missing: {}", self.paint(&job_match.missing_keywords.join(", "), Color::Red))?;
        }
        if self.detailed {
            for suggestion in &job_match.suggestions {
                writeln!(
                    out,
                    "    • {} (sections: {})",
                    suggestion.suggestion,
                    suggestion.sections.join(", ")
                )?;
            }
        }
        Ok(())
    }

    fn render_analysis(&self, report: &AnalysisReport) -> std::result::Result<String, std::fmt::Error> {
        let analysis = &report.analysis;
        let mut out = String::new();

        writeln!(out, "{}", self.heading("ATS Compatibility Report"))?;
        writeln!(out, "Resume: {}", report.metadata.resume_path)?;
        writeln!(
            out,
            "Overall score: {} ({})",
            self.score(analysis.score),
            ScoreBand::from_score(analysis.score).label()
        )?;

        writeln!(out, "\n{}", self.heading("Category Scores"))?;
        for (category, score) in analysis.category_scores() {
            writeln!(out, "  {:<12} {}", category.to_string(), self.score(score))?;
        }

        if self.detailed {
            writeln!(out, "\n{}", self.heading("Details"))?;
            writeln!(
                out,
                "  Sections found: {}",
                analysis.sections.found.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ")
            )?;
            writeln!(
                out,
                "  Contact complete: {}",
                if analysis.contact.complete { "yes" } else { "no" }
            )?;
            writeln!(
                out,
                "  Bullets: {} total, {} with metrics, {} with action verbs",
                analysis.bullets.total, analysis.bullets.with_metrics, analysis.bullets.with_action_verbs
            )?;
            let density: Vec<String> = analysis
                .keywords
                .density
                .iter()
                .map(|(keyword, count)| format!("{} ×{}", keyword, count))
                .collect();
            writeln!(out, "  Achievement verbs: {}", density.join(", "))?;
        }

        if analysis.suggestions.is_empty() {
            writeln!(out, "\n{}", self.paint("No issues found.", Color::Green))?;
        } else {
            writeln!(out, "\n{}", self.heading("Suggestions"))?;
            for suggestion in &analysis.suggestions {
                writeln!(
                    out,
                    "  {} {}: {}",
                    self.priority(suggestion.priority),
                    suggestion.category,
                    self.message(&suggestion.message)
                )?;
                writeln!(out, "      → {}", self.message(&suggestion.solution))?;
            }
        }

        if let Some(job_match) = &analysis.job_match {
            self.write_job_match(&mut out, job_match)?;
        }

        Ok(out)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        self.render_analysis(report).map_err(fmt_err)
    }

    fn format_job_match(&self, report: &JobMatchReport) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Resume: {}", report.metadata.resume_path).map_err(fmt_err)?;
        if let Some(job_path) = &report.metadata.job_path {
            writeln!(out, "Job description: {}", job_path).map_err(fmt_err)?;
        }
        self.write_job_match(&mut out, &report.job_match).map_err(fmt_err)?;
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        self.render(report)
    }

    fn format_job_match(&self, report: &JobMatchReport) -> Result<String> {
        self.render(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn write_job_match(out: &mut String, job_match: &JobMatchResult) -> std::fmt::Result {
        writeln!(out, "## Job Description Match\n")?;
        writeln!(out, "**Match score:** {}/100\n", job_match.match_score)?;
        writeln!(out, "| Keyword | Status | Add to |")?;
        writeln!(out, "|---|---|---|")?;
        for keyword in &job_match.matched_keywords {
            writeln!(out, "| {} | matched | |", keyword)?;
        }
        for suggestion in &job_match.suggestions {
            writeln!(
                out,
                "| {} | missing | {} |",
                suggestion.keyword,
                suggestion.sections.join(", ")
            )?;
        }
        writeln!(out)
    }

    fn render_analysis(&self, report: &AnalysisReport) -> std::result::Result<String, std::fmt::Error> {
        let analysis = &report.analysis;
        let mut out = String::new();

        writeln!(out, "# ATS Compatibility Report\n")?;
        if self.include_metadata {
            writeln!(out, "- **Resume:** `{}`", report.metadata.resume_path)?;
            writeln!(out, "- **Generated:** {}", report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"))?;
            writeln!(out, "- **Version:** {}\n", report.metadata.tool_version)?;
        }

        writeln!(
            out,
            "**Overall score:** {}/100 ({})\n",
            analysis.score,
            ScoreBand::from_score(analysis.score).label()
        )?;

        writeln!(out, "## Category Scores\n")?;
        writeln!(out, "| Category | Score |")?;
        writeln!(out, "|---|---|")?;
        for (category, score) in analysis.category_scores() {
            writeln!(out, "| {} | {} |", category, score)?;
        }
        writeln!(out)?;

        if !analysis.suggestions.is_empty() {
            writeln!(out, "## Suggestions\n")?;
            for suggestion in &analysis.suggestions {
                writeln!(
                    out,
                    "- **{}** ({}) {}: {}",
                    suggestion.priority, suggestion.category, suggestion.message, suggestion.solution
                )?;
            }
            writeln!(out)?;
        }

        if let Some(job_match) = &analysis.job_match {
            Self::write_job_match(&mut out, job_match)?;
        }

        Ok(out)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        self.render_analysis(report).map_err(fmt_err)
    }

    fn format_job_match(&self, report: &JobMatchReport) -> Result<String> {
        let mut out = String::from("# Job Description Match Report\n\n");
        if self.include_metadata {
            writeln!(out, "- **Resume:** `{}`\n", report.metadata.resume_path).map_err(fmt_err)?;
        }
        Self::write_job_match(&mut out, &report.job_match).map_err(fmt_err)?;
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn render_analysis(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_analysis(report)
    }

    pub fn render_job_match(&self, report: &JobMatchReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_job_match(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::processing::analyzer::AtsEngine;
    use crate::processing::resume::ResumeRecord;

    fn sample_report() -> AnalysisReport {
        let engine = AtsEngine::new().unwrap();
        let analysis = engine.analyze_with_job_description(
            &ResumeRecord::default(),
            "docker docker leadership leadership",
        );
        AnalysisReport {
            metadata: ReportMetadata::new("resume.json", Some("job.txt".to_string())),
            analysis,
        }
    }

    #[test]
    fn test_truncate_graphemes() {
        assert_eq!(truncate_graphemes("short", 10), "short");
        assert_eq!(truncate_graphemes("résumé review", 6), "résum…");
    }

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_analysis(&sample_report()).unwrap();

        assert!(output.contains("ATS Compatibility Report"));
        assert!(output.contains("[high] sections: Missing work section"));
        assert!(output.contains("Missing: docker, leadership"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_json_output_uses_camel_case() {
        let output = JsonFormatter::new(false).format_analysis(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["analysis"]["jobMatch"]["matchScore"], 0);
        assert_eq!(value["analysis"]["bullets"]["withMetrics"], 0);
        assert_eq!(value["analysis"]["sections"]["missing"][0], "work");
        assert_eq!(value["analysis"]["suggestions"][0]["priority"], "high");
    }

    #[test]
    fn test_markdown_output() {
        let output = MarkdownFormatter::new(false).format_analysis(&sample_report()).unwrap();

        assert!(output.starts_with("# ATS Compatibility Report"));
        assert!(output.contains("| sections | 50 |"));
        assert!(output.contains("| docker | missing | skills, work experience |"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(&OutputConfig::default());
        assert_eq!(generator.formatter(OutputFormat::Json).supports_format(), OutputFormat::Json);
        assert_eq!(
            generator.formatter(OutputFormat::Markdown).supports_format(),
            OutputFormat::Markdown
        );
    }
}
