//! Integration tests for report generation

use degree_progress::core::evaluator::Evaluator;
use degree_progress::core::models::{DegreeProgram, SubjectRecord, Transcript};
use degree_progress::core::registry::Registry;
use degree_progress::core::report::{reporter_for, ReportContext, ReportFormat, ReportGenerator};
use std::fs;
use tempfile::TempDir;

fn transcript() -> Transcript {
    let mut transcript = Transcript::new(
        3.42,
        12.0,
        vec![
            SubjectRecord::new("CSC1113", "Programming <Techniques>", "A", 3.0, 4.0),
            SubjectRecord::new("MAT121β", "Real Analysis", "B", 2.0, 3.0),
            SubjectRecord::new("XYZ1012", "Mystery Elective", "C", 2.0, 2.0),
            SubjectRecord::new("ENG1b10", "English Level I", "B", 0.0, 3.0),
        ],
    );
    transcript.student = Some("SC/2023/00042".to_string());
    transcript
}

#[test]
fn markdown_report_is_written() {
    let dir = TempDir::new().expect("temp dir");
    let registry = Registry::handbook();
    let transcript = transcript();
    let evaluation =
        Evaluator::new(&registry).assess(Some(DegreeProgram::BscSpecialSelection), &transcript);
    let ctx = ReportContext::new(&evaluation, &transcript);

    let path = dir.path().join("progress.md");
    reporter_for(ReportFormat::Markdown)
        .generate(&ctx, &path)
        .expect("markdown report");

    let content = fs::read_to_string(&path).expect("read report");
    assert!(content.contains("SC/2023/00042"));
    assert!(content.contains("Credits Registered (≥ 60)"));
    assert!(content.contains("80% of specializing subject with B-"));
    assert!(content.contains("XYZ1012"));
}

#[test]
fn html_report_is_written_and_escaped() {
    let dir = TempDir::new().expect("temp dir");
    let registry = Registry::handbook();
    let transcript = transcript();
    let evaluation = Evaluator::new(&registry).assess(None, &transcript);
    let ctx = ReportContext::new(&evaluation, &transcript);

    let path = dir.path().join("progress.html");
    reporter_for(ReportFormat::Html)
        .generate(&ctx, &path)
        .expect("html report");

    let content = fs::read_to_string(&path).expect("read report");
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains("Second Class (Upper Division)"));
    assert!(content.contains("Mystery Elective"));
    assert!(!content.contains("<Techniques>"));
}

#[test]
fn generate_fails_for_missing_directory() {
    let dir = TempDir::new().expect("temp dir");
    let registry = Registry::handbook();
    let transcript = transcript();
    let evaluation = Evaluator::new(&registry).assess(None, &transcript);
    let ctx = ReportContext::new(&evaluation, &transcript);

    let path = dir.path().join("missing").join("progress.md");
    assert!(reporter_for(ReportFormat::Markdown).generate(&ctx, &path).is_err());
}
