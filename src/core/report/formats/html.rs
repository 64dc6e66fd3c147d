//! HTML report generator
//!
//! Renders a self-contained page (inline CSS, no scripts) through the
//! askama template `templates/progress.html`.

use crate::core::evaluator::ProgressSummary;
use crate::core::models::Unit;
use crate::core::report::{HonoursRow, ReportContext, ReportGenerator, RequirementRow};
use askama::Template;
use std::error::Error;

/// Values bound into the HTML template
#[derive(Template)]
#[template(path = "progress.html")]
struct ProgressPage<'a> {
    program: &'a str,
    student: &'a str,
    stream: &'a str,
    gpa: String,
    confirmed_credits: String,
    summary: ProgressSummary,
    honours: &'a str,
    requirements: Vec<RequirementRow>,
    honours_rows: Vec<HonoursRow>,
    unclassified: Vec<String>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let page = ProgressPage {
            program: ctx.program_label(),
            student: ctx.student(),
            stream: ctx.stream_label(),
            gpa: Unit::Gpa.format_value(ctx.transcript.gpa),
            confirmed_credits: Unit::Credits.format_value(ctx.transcript.confirmed_credits),
            summary: ctx.summary(),
            honours: ctx.honours_label(),
            requirements: ctx.requirement_rows(),
            honours_rows: ctx.honours_rows(),
            unclassified: ctx.unclassified(),
        };
        Ok(page.render()?)
    }
}
