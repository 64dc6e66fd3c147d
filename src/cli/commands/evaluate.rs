//! Evaluate command handler
//!
//! Loads a transcript, evaluates it against a program and prints the
//! requirement table, optionally writing a Markdown or HTML report.

use degree_progress::config::Config;
use degree_progress::core::{
    evaluator::{Evaluation, Evaluator},
    models::{DegreeProgram, Transcript},
    registry::Registry,
    report::{reporter_for, ReportContext, ReportFormat, ReportGenerator},
    transcript::parse_transcript_csv,
};
use logger::{error, info, verbose};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the evaluate command.
///
/// # Arguments
/// * `input_file` - Path to the transcript CSV
/// * `program` - Program id from the command line, if any
/// * `report` - Report format name, if a report was requested
/// * `output` - Report output path; defaults to the configured `reports_dir`
/// * `config` - Loaded configuration
pub fn run(
    input_file: &Path,
    program: Option<&str>,
    report: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = evaluate(input_file, program, report, output, config) {
        error!("Evaluation failed for {}: {err}", input_file.display());
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn evaluate(
    input_file: &Path,
    program: Option<&str>,
    report: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    // Resolve the format up front so a typo fails before any work
    let format = report.map(ReportFormat::from_str).transpose()?;
    let program = resolve_program(program, config)?;

    let transcript = parse_transcript_csv(input_file)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;
    info!(
        "Transcript loaded: {} ({} subjects)",
        input_file.display(),
        transcript.subjects.len()
    );

    let registry = Registry::handbook();
    let evaluation = Evaluator::new(&registry).assess(program, &transcript);

    print_evaluation(&evaluation, &transcript);

    if let Some(format) = format {
        let path = match output {
            Some(path) => path.to_path_buf(),
            None => default_report_path(input_file, &evaluation, format, config)?,
        };
        let ctx = ReportContext::new(&evaluation, &transcript);
        reporter_for(format)
            .generate(&ctx, &path)
            .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;
        println!("✓ Report generated: {}", path.display());
    }

    Ok(())
}

/// Command-line program wins over the configured one; `None` means detect
fn resolve_program(program: Option<&str>, config: &Config) -> Result<Option<DegreeProgram>, String> {
    match program {
        Some(id) => DegreeProgram::from_str(id).map(Some),
        None => config.evaluation.program_choice(),
    }
}

/// `<reports_dir>/<input stem>_<program id>.<ext>`, creating the directory
fn default_report_path(
    input_file: &Path,
    evaluation: &Evaluation,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    let stem = input_file
        .file_stem()
        .map_or_else(|| "transcript".into(), |s| s.to_string_lossy());
    Ok(reports_dir.join(format!(
        "{stem}_{}.{}",
        evaluation.program.id(),
        format.extension()
    )))
}

/// Print the requirement table and honours bands
fn print_evaluation(evaluation: &Evaluation, transcript: &Transcript) {
    let ctx = ReportContext::new(evaluation, transcript);

    println!("\n=== {} ===", ctx.program_label());
    println!("Student: {}", ctx.student());
    println!("Detected stream: {}", ctx.stream_label());
    println!(
        "GPA: {:.2}  Confirmed credits: {}",
        transcript.gpa, transcript.confirmed_credits
    );
    println!();

    for (row, requirement) in ctx.requirement_rows().iter().zip(&evaluation.requirements) {
        if row.current.is_empty() {
            println!("  {} {} (not evaluable: {})", row.status_symbol(), row.label, row.note);
        } else {
            println!(
                "  {} {}: {} / {}",
                row.status_symbol(),
                row.label,
                row.current,
                row.target
            );
        }
        if let Some(computable) = requirement.as_computable() {
            for subject in computable.related_subjects() {
                verbose!("      {} {} ({})", subject.code, subject.grade, subject.name);
            }
        }
    }

    let summary = ctx.summary();
    println!(
        "\nRequirements met: {} / {} ({}%), {} not evaluable",
        summary.met, summary.computable, summary.percent, summary.unavailable
    );

    println!("\n=== Honours ===");
    for band in ctx.honours_rows() {
        println!(
            "  {} {}: GPA {} / {}, credits {} / {}",
            if band.met { "✓" } else { "✗" },
            band.class,
            band.gpa.current,
            band.gpa.target,
            band.credits.current,
            band.credits.target
        );
    }
    println!("Awarded: {}", ctx.honours_label());

    let unclassified = ctx.unclassified();
    if !unclassified.is_empty() {
        println!("\n⚠️  {} unclassified subject(s):", unclassified.len());
        for entry in unclassified {
            println!("  {entry}");
        }
    }
}
