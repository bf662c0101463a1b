//! Integration tests for the resume scan client

use resume_scan::api::response::decode_analysis;
use resume_scan::config::OutputFormat;
use resume_scan::input::manager::{FieldInput, InputManager};
use resume_scan::output::formatter::ReportGenerator;
use resume_scan::output::report::ScanReport;
use std::path::{Path, PathBuf};

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_field_resolution_prefers_file() {
    let mut manager = InputManager::new();
    let field = FieldInput::new(
        Some("pasted resume text".to_string()),
        Some(PathBuf::from("tests/fixtures/sample_resume.txt")),
    );

    let resolved = field.resolve("resume", &mut manager).await.unwrap();
    assert!(resolved.contains("John Doe"));
    assert!(!resolved.contains("pasted resume text"));
}

#[tokio::test]
async fn test_missing_field_is_an_error() {
    let mut manager = InputManager::new();
    let field = FieldInput::new(None, None);

    let result = field.resolve("job description", &mut manager).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("job description"));
}

/// Full decode-to-render path for a fenced service response.
#[test]
fn test_fenced_response_to_html_report() {
    let body = "{\"result\": \"```json\\n{\\\"Keywords\\\":[{\\\"Keyword\\\":\\\"SQL\\\",\\\"Present\\\":true}],\\\"Summary\\\":\\\"Good fit\\\"}\\n```\"}";
    let analysis = decode_analysis(body).unwrap();

    let report = ScanReport::new(
        analysis,
        "https://example.org/process".to_string(),
        "file: tests/fixtures/sample_job.txt".to_string(),
        "file: tests/fixtures/sample_resume.txt".to_string(),
        42,
    );

    let generator = ReportGenerator::new(false, false, true);
    let html = generator.format(&report, &OutputFormat::Html).unwrap();

    assert!(html.contains("<td>SQL</td>"));
    assert!(html.contains("true"));
    assert!(html.contains("Good fit"));
}

/// Unfenced responses decode identically and render an empty table.
#[test]
fn test_unfenced_response_to_markdown_report() {
    let body = "{\"result\": \"{\\\"Keywords\\\":[],\\\"Summary\\\":\\\"No match\\\"}\"}";
    let analysis = decode_analysis(body).unwrap();
    assert!(analysis.keywords.is_empty());

    let report = ScanReport::new(
        analysis,
        "https://example.org/process".to_string(),
        "inline text (20 characters)".to_string(),
        "inline text (30 characters)".to_string(),
        42,
    );

    let generator = ReportGenerator::new(false, false, true);
    let markdown = generator.format(&report, &OutputFormat::Markdown).unwrap();

    assert!(markdown.contains("0/0 present"));
    assert!(markdown.contains("No match"));
}
