//! Report generation for degree-progress evaluations
//!
//! Renders an [`Evaluation`] as Markdown (template substitution) or HTML
//! (askama template). Both formats share the row view built here.

pub mod formats;

use crate::core::evaluator::{Evaluation, ProgressSummary};
use crate::core::models::{HonoursTier, Requirement, Transcript, Unit};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Display status of one requirement row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    /// Computable and satisfied
    Met,
    /// Computable and not yet satisfied
    Unmet,
    /// Not decidable from the transcript
    Unavailable,
}

impl RowStatus {
    /// Short marker used in tables
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Met => "✓",
            Self::Unmet => "✗",
            Self::Unavailable => "?",
        }
    }

    /// CSS class / plain-text name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Unmet => "unmet",
            Self::Unavailable => "unavailable",
        }
    }
}

/// A requirement flattened for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementRow {
    /// Requirement label
    pub label: String,
    /// Met / unmet / unavailable
    pub status: RowStatus,
    /// Current value with unit, empty for unavailable rows
    pub current: String,
    /// Target value with unit, empty for unavailable rows
    pub target: String,
    /// Detail line, or the reason for unavailable rows
    pub note: String,
    /// Progress towards the target (0-100)
    pub progress: u32,
}

impl RequirementRow {
    /// Flatten a requirement
    #[must_use]
    pub fn from_requirement(requirement: &Requirement) -> Self {
        match requirement {
            Requirement::Computable(c) => {
                let (current, target) = match c.unit() {
                    Unit::Pass => (
                        if c.met() { "Passed" } else { "Pending" }.to_string(),
                        "Pass".to_string(),
                    ),
                    unit => (
                        format!("{} {}", unit.format_value(c.current()), unit.symbol()),
                        format!("{} {}", unit.format_value(c.target()), unit.symbol()),
                    ),
                };
                Self {
                    label: c.label().to_string(),
                    status: if c.met() { RowStatus::Met } else { RowStatus::Unmet },
                    current,
                    target,
                    note: c.detail().unwrap_or_default().to_string(),
                    progress: percent_u32(c.progress_percent()),
                }
            }
            Requirement::Unavailable(u) => Self {
                label: u.label.clone(),
                status: RowStatus::Unavailable,
                current: String::new(),
                target: String::new(),
                note: u.reason.clone(),
                progress: 0,
            },
        }
    }

    /// CSS class / plain-text status name
    #[must_use]
    pub const fn status_name(&self) -> &'static str {
        self.status.name()
    }

    /// Status marker
    #[must_use]
    pub const fn status_symbol(&self) -> &'static str {
        self.status.symbol()
    }
}

/// One honours band flattened for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct HonoursRow {
    /// Band name
    pub class: String,
    /// GPA check row
    pub gpa: RequirementRow,
    /// Credit check row
    pub credits: RequirementRow,
    /// Whether both checks are met
    pub met: bool,
}

impl HonoursRow {
    fn from_tier(tier: &HonoursTier) -> Self {
        Self {
            class: tier.class.label().to_string(),
            gpa: RequirementRow::from_requirement(&tier.gpa.clone().into()),
            credits: RequirementRow::from_requirement(&tier.credits.clone().into()),
            met: tier.met(),
        }
    }
}

/// Clamp a 0-100 percentage to `u32`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_u32(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Evaluation being reported
    pub evaluation: &'a Evaluation,
    /// Transcript the evaluation was computed from
    pub transcript: &'a Transcript,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(evaluation: &'a Evaluation, transcript: &'a Transcript) -> Self {
        Self {
            evaluation,
            transcript,
        }
    }

    /// Student identifier or a placeholder
    #[must_use]
    pub fn student(&self) -> &str {
        self.transcript.student.as_deref().unwrap_or("Unknown student")
    }

    /// Program display label
    #[must_use]
    pub const fn program_label(&self) -> &'static str {
        self.evaluation.program.label()
    }

    /// Detected stream label
    #[must_use]
    pub const fn stream_label(&self) -> &'static str {
        self.evaluation.detected_family.label()
    }

    /// Progress summary
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        self.evaluation.summary()
    }

    /// Awarded honours band or "None"
    #[must_use]
    pub fn honours_label(&self) -> &'static str {
        self.evaluation
            .awarded_honours()
            .map_or("None", |class| class.label())
    }

    /// Base requirement rows
    #[must_use]
    pub fn requirement_rows(&self) -> Vec<RequirementRow> {
        self.evaluation
            .requirements
            .iter()
            .map(RequirementRow::from_requirement)
            .collect()
    }

    /// Honours band rows, highest first
    #[must_use]
    pub fn honours_rows(&self) -> Vec<HonoursRow> {
        self.evaluation
            .honours
            .iter()
            .map(HonoursRow::from_tier)
            .collect()
    }

    /// `CODE - Name` for each unclassified subject
    #[must_use]
    pub fn unclassified(&self) -> Vec<String> {
        self.evaluation
            .unclassified
            .iter()
            .map(|s| format!("{} - {}", s.code, s.name))
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Pick the generator for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
