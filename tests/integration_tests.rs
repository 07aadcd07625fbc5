//! Integration tests for the ATS analyzer

use ats_analyzer::config::{Config, OutputFormat};
use ats_analyzer::input::InputManager;
use ats_analyzer::output::{AnalysisReport, ReportGenerator, ReportMetadata};
use ats_analyzer::processing::issues::{Category, IssueKind, Severity};
use ats_analyzer::processing::resume::Layout;
use ats_analyzer::{AtsEngine, AtsError, ResumeRecord};
use std::path::Path;
use std::sync::Arc;

async fn sample_resume() -> ResumeRecord {
    InputManager::new()
        .load_resume(Path::new("tests/fixtures/sample_resume.json"))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_analyze_sample_resume() {
    let engine = AtsEngine::new().unwrap();
    let result = engine.analyze(&sample_resume().await);

    assert_eq!(result.formatting.score, 90);
    assert_eq!(result.sections.score, 100);
    assert_eq!(result.contact.score, 100);
    assert!(result.contact.complete);
    assert_eq!(result.bullets.total, 4);
    assert_eq!(result.bullets.with_metrics, 2);
    assert_eq!(result.bullets.with_action_verbs, 2);
    assert_eq!(result.bullets.score, 85);
    assert_eq!(result.keywords.score, 70);
    assert_eq!(result.keywords.found, vec!["led", "developed", "implemented", "delivered"]);
    assert_eq!(result.score, 87);

    assert_eq!(result.suggestions.len(), 2);
    assert_eq!(result.suggestions[0].category, Category::Formatting);
    assert_eq!(result.suggestions[1].category, Category::Bullets);
    assert!(result.suggestions.iter().all(|s| s.priority == Severity::Medium));
}

#[tokio::test]
async fn test_match_markdown_job_description() {
    let engine = AtsEngine::new().unwrap();
    let resume = sample_resume().await;
    let job_text = InputManager::new()
        .load_job_text(Path::new("tests/fixtures/job_description.md"))
        .await
        .unwrap();

    assert!(!job_text.contains("**"));
    assert!(!job_text.contains('#'));

    let result = engine.match_job_description(&resume, &job_text);
    assert_eq!(result.matched_keywords, vec!["backend", "engineer", "python", "services"]);
    assert_eq!(result.missing_keywords, vec!["aws", "experience", "react", "leadership"]);
    assert_eq!(result.match_score, 50);

    let leadership = result
        .suggestions
        .iter()
        .find(|s| s.keyword == "leadership")
        .unwrap();
    assert_eq!(leadership.sections, vec!["summary", "work experience"]);
}

#[tokio::test]
async fn test_analyze_with_job_description() {
    let engine = AtsEngine::new().unwrap();
    let resume = sample_resume().await;
    let job_text = InputManager::new()
        .load_job_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let result = engine.analyze_with_job_description(&resume, &job_text);
    let job_match = result.job_match.as_ref().unwrap();

    assert_eq!(job_match.matched_keywords, vec!["python", "docker"]);
    assert_eq!(job_match.missing_keywords, vec!["react"]);
    assert_eq!(job_match.match_score, 67);
    assert_eq!(result.keywords.score, 67);
    // 18 + 20 + 20.1 + 15 + 12.75
    assert_eq!(result.score, 86);
}

#[tokio::test]
async fn test_optimized_version_scores_higher() {
    let engine = AtsEngine::new().unwrap();
    let resume = sample_resume().await;
    let before = engine.analyze(&resume);

    let optimized = engine.generate_optimized_version(&resume);
    let after = engine.analyze(&optimized);

    assert_eq!(resume.layout, Some(Layout::MultiColumn));
    assert_eq!(optimized.layout, Some(Layout::SingleColumn));
    assert_eq!(optimized.basics.phone.as_deref(), Some("(555) 123-4567"));
    assert_eq!(
        optimized.work[0].positions[0].highlights,
        vec![
            "Led team of 5 engineers, increasing output by 20%",
            "Developed backend services in Python and Go",
            "Managed the on-call rotation",
        ]
    );
    assert_eq!(after.bullets.with_action_verbs, 4);
    assert_eq!(after.score, 91);
    assert!(after.score > before.score);
}

#[tokio::test]
async fn test_toml_resume_with_format_problems() {
    let engine = AtsEngine::new().unwrap();
    let resume = InputManager::new()
        .load_resume(Path::new("tests/fixtures/sample_resume.toml"))
        .await
        .unwrap();

    let result = engine.analyze(&resume);
    assert_eq!(result.contact.score, 90);
    assert!(result.contact.complete);
    assert_eq!(result.sections.score, 65);

    let kinds: Vec<IssueKind> = result.contact.issues.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![IssueKind::InvalidEmail, IssueKind::PhoneMissingAreaCode]);
}

#[tokio::test]
async fn test_malformed_resume_is_rejected() {
    let result = InputManager::new()
        .load_resume(Path::new("tests/fixtures/not_a_record.json"))
        .await;
    assert!(matches!(result, Err(AtsError::InvalidInput(_))));
}

#[tokio::test]
async fn test_unsupported_and_missing_files() {
    let mut manager = InputManager::new();

    let unsupported = manager.load_job_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(unsupported, Err(AtsError::UnsupportedFormat(_))));

    let missing = manager.load_job_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(matches!(missing, Err(AtsError::InvalidInput(_))));

    let wrong_kind = manager.load_resume(Path::new("tests/fixtures/job_description.txt")).await;
    assert!(matches!(wrong_kind, Err(AtsError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_job_text_caching() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/job_description.txt");

    let first = manager.load_job_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.load_job_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_shared_engine_across_threads() {
    let engine = Arc::new(AtsEngine::new().unwrap());
    let resume = Arc::new(sample_resume().await);
    let expected = engine.analyze(&resume);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let resume = Arc::clone(&resume);
            std::thread::spawn(move || engine.analyze(&resume))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[tokio::test]
async fn test_json_report_round_trip_fields() {
    let engine = AtsEngine::new().unwrap();
    let report = AnalysisReport {
        metadata: ReportMetadata::new("tests/fixtures/sample_resume.json", None),
        analysis: engine.analyze(&sample_resume().await),
    };

    let rendered = ReportGenerator::new(&Config::default().output)
        .render_analysis(&report, OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["analysis"]["score"], 87);
    assert_eq!(value["analysis"]["keywords"]["density"]["led"], 1);
    assert_eq!(value["analysis"]["formatting"]["issues"][0]["kind"]["type"], "columns");
    assert!(value["analysis"].get("jobMatch").is_none());
}
