//! Markdown report generator
//!
//! Renders evaluations as Markdown tables that display well on GitHub,
//! GitLab and in VS Code.

use crate::core::models::Unit;
use crate::core::report::{ReportContext, ReportGenerator, RequirementRow};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/progress.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = ctx.summary();
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{program}}", ctx.program_label());
        output = output.replace("{{student}}", ctx.student());
        output = output.replace("{{stream}}", ctx.stream_label());
        output = output.replace("{{gpa}}", &Unit::Gpa.format_value(ctx.transcript.gpa));
        output = output.replace(
            "{{confirmed_credits}}",
            &Unit::Credits.format_value(ctx.transcript.confirmed_credits),
        );
        output = output.replace("{{met}}", &summary.met.to_string());
        output = output.replace("{{computable}}", &summary.computable.to_string());
        output = output.replace("{{percent}}", &summary.percent.to_string());
        output = output.replace("{{unavailable}}", &summary.unavailable.to_string());
        output = output.replace("{{honours_table}}", &Self::generate_honours_table(ctx));
        output = output.replace("{{honours}}", ctx.honours_label());
        output = output.replace("{{requirements}}", &Self::generate_requirements_table(ctx));
        output = output.replace("{{unclassified}}", &Self::generate_unclassified_list(ctx));

        output
    }

    /// Escape characters that would break a table cell
    fn cell(text: &str) -> String {
        text.replace('|', "\\|")
    }

    /// Generate the base requirements table
    fn generate_requirements_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| | Requirement | Current | Target | Notes |\n");
        table.push_str("|---|---|---|---|---|\n");

        for row in ctx.requirement_rows() {
            Self::write_row(&mut table, &row);
        }

        table
    }

    fn write_row(table: &mut String, row: &RequirementRow) {
        let _ = writeln!(
            table,
            "| {} | {} | {} | {} | {} |",
            row.status_symbol(),
            Self::cell(&row.label),
            row.current,
            row.target,
            Self::cell(&row.note)
        );
    }

    /// Generate the honours table, one line per check
    fn generate_honours_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Band | Check | Current | Target | Awarded |\n");
        table.push_str("|---|---|---|---|---|\n");

        for band in ctx.honours_rows() {
            let awarded = if band.met { "✓" } else { "✗" };
            for check in [&band.gpa, &band.credits] {
                let _ = writeln!(
                    table,
                    "| {} | {} {} | {} | {} | {awarded} |",
                    band.class,
                    check.status_symbol(),
                    Self::cell(&check.label),
                    check.current,
                    check.target
                );
            }
        }

        table
    }

    /// Generate the list of subjects missing from the handbook
    fn generate_unclassified_list(ctx: &ReportContext) -> String {
        let unclassified = ctx.unclassified();
        if unclassified.is_empty() {
            return "All subjects are classified.\n".to_string();
        }

        let mut list = String::new();
        for entry in unclassified {
            let _ = writeln!(list, "- {entry}");
        }
        list
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
