//! Integration tests for transcript loading and end-to-end evaluation

use degree_progress::core::evaluator::Evaluator;
use degree_progress::core::models::{DegreeProgram, Family, HonoursClass, Transcript};
use degree_progress::core::registry::Registry;
use degree_progress::core::stream::detect_family;
use degree_progress::core::transcript::parse_transcript_csv;
use std::path::PathBuf;

fn sample(name: &str) -> Transcript {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples/transcripts")
        .join(name);
    parse_transcript_csv(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn bcs_sample_loads() {
    let transcript = sample("bcs_year2.csv");

    assert_eq!(transcript.student.as_deref(), Some("SC/2022/10417"));
    assert!((transcript.gpa - 3.19).abs() < f64::EPSILON);
    assert!((transcript.confirmed_credits - 70.0).abs() < f64::EPSILON);
    assert_eq!(transcript.subjects.len(), 31);
    assert!(transcript.excluded.contains("fsc115a"));
    assert_eq!(detect_family(&transcript), Family::Bcs);
}

#[test]
fn bcs_sample_general_evaluation() {
    let transcript = sample("bcs_year2.csv");
    let registry = Registry::handbook();
    let evaluation = Evaluator::new(&registry).assess(None, &transcript);

    assert_eq!(evaluation.program, DegreeProgram::BcsGeneral);
    let met: Vec<(&str, Option<bool>)> = evaluation
        .requirements
        .iter()
        .map(|r| (r.label(), r.met()))
        .collect();
    assert_eq!(
        met,
        vec![
            ("Credits Registered (≥ 90)", Some(false)),
            ("CS Core with C grade (≥ 60%)", Some(true)),
            ("Maths Core with C grade (≥ 60%)", Some(true)),
            ("Optional with C grade (≥ 60%)", Some(true)),
            ("Industry Placement with C", Some(false)),
            ("English Level I & II", Some(true)),
        ]
    );

    let maths = evaluation.requirements[2].as_computable();
    assert_eq!(maths.map(|c| c.current()), Some(88.0));

    let summary = evaluation.summary();
    assert_eq!((summary.met, summary.computable, summary.percent), (4, 6, 67));
    assert_eq!(evaluation.completed(), Some(false));

    assert_eq!(evaluation.awarded_honours(), Some(HonoursClass::SecondLower));
    assert_eq!(evaluation.unclassified.len(), 1);
    assert_eq!(evaluation.unclassified[0].code, "SEM2010");
}

#[test]
fn biology_sample_uses_grade_table() {
    let transcript = sample("bsc_biology.csv");

    assert_eq!(detect_family(&transcript), Family::Bsc);
    let botany = transcript.subjects.iter().find(|s| s.code == "BOT1112");
    assert_eq!(botany.map(|s| s.grade_scale), Some(3.3));
    assert!((transcript.confirmed_credits - 34.0).abs() < f64::EPSILON);
}

#[test]
fn biology_sample_general_evaluation() {
    let transcript = sample("bsc_biology.csv");
    let registry = Registry::handbook();
    let evaluation = Evaluator::new(&registry).assess(None, &transcript);

    assert_eq!(evaluation.program, DegreeProgram::BscGeneral);
    let met: Vec<(&str, Option<bool>)> = evaluation
        .requirements
        .iter()
        .map(|r| (r.label(), r.met()))
        .collect();
    assert_eq!(
        met,
        vec![
            ("Credits Registered (≥ 90)", Some(false)),
            ("Core Theory with C (≥ 60%)", Some(true)),
            ("Optional with D+ (≥ 60%)", Some(true)),
            ("All Core Practicals with C-", Some(false)),
            ("Overall GPA (≥ 2.00)", Some(true)),
            ("English Level I & II", Some(true)),
            ("Mathematics for Biology (MAT1142)", Some(true)),
            ("CLC (Computer Literacy Certificate)", Some(true)),
        ]
    );

    let practicals = evaluation.requirements[3].as_computable();
    assert_eq!(practicals.map(|c| (c.current(), c.target())), Some((4.0, 5.0)));
    let theory = evaluation.requirements[1].as_computable();
    assert_eq!(theory.map(|c| c.current()), Some(85.0));

    assert_eq!(evaluation.summary().percent, 75);
    assert!(evaluation.unclassified.is_empty());
    assert_eq!(evaluation.awarded_honours(), None);
}

#[test]
fn missing_file_is_an_error() {
    assert!(parse_transcript_csv("samples/transcripts/does_not_exist.csv").is_err());
}
