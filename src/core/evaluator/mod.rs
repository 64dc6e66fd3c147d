//! Requirement evaluation
//!
//! One pure rule-set function per degree program, selected by [`DegreeProgram`].
//! Rule sets never fail: missing data produces an unmet computable
//! requirement, and data the portal does not expose produces
//! [`Requirement::Unavailable`].

mod bcs;
mod bsc;
pub mod honours;
mod rules;

use crate::core::models::{
    DegreeProgram, Family, HonoursClass, HonoursTier, Requirement, SubjectRecord, Transcript,
};
use crate::core::partition::Partition;
use crate::core::registry::Registry;
use crate::core::stream::detect_family;
use rules::RuleContext;
use serde::Serialize;

/// Evaluates transcripts against one registry
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'r> {
    registry: &'r Registry,
}

impl<'r> Evaluator<'r> {
    /// Create an evaluator borrowing `registry`
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Ordered requirement outcomes for `program`
    ///
    /// # Arguments
    /// * `program` - Degree program whose rule set applies
    /// * `transcript` - Transcript snapshot to evaluate
    #[must_use]
    pub fn evaluate(&self, program: DegreeProgram, transcript: &Transcript) -> Vec<Requirement> {
        let partition = Partition::build(self.registry, transcript, program.family());
        Self::apply(program, &RuleContext::new(transcript, partition))
    }

    fn apply(program: DegreeProgram, ctx: &RuleContext<'_>) -> Vec<Requirement> {
        match program {
            DegreeProgram::BscGeneral => bsc::general(ctx),
            DegreeProgram::BscSpecialSelection => bsc::special_selection(ctx),
            DegreeProgram::BscSpecialCompletion => bsc::special_completion(ctx),
            DegreeProgram::BcsGeneral => bcs::general(ctx),
            DegreeProgram::BcsSpecialSelection => bcs::special_selection(ctx),
            DegreeProgram::BcsSpecialCompletion => bcs::special_completion(ctx),
        }
    }

    /// The three honours bands, evaluated on credit-bearing, non-excluded subjects
    #[must_use]
    pub fn classify_honours(&self, transcript: &Transcript) -> Vec<HonoursTier> {
        honours::classify(transcript.gpa, &transcript.degree_subjects())
    }

    /// Full evaluation: requirements, honours bands and unclassified subjects.
    ///
    /// When `program` is `None`, the default program of the detected family is used.
    #[must_use]
    pub fn assess(&self, program: Option<DegreeProgram>, transcript: &Transcript) -> Evaluation {
        let detected_family = detect_family(transcript);
        let program = program.unwrap_or_else(|| detected_family.default_program());
        let ctx = RuleContext::new(
            transcript,
            Partition::build(self.registry, transcript, program.family()),
        );
        logger::debug!(
            "Evaluating {program} ({} subjects, {} unclassified)",
            transcript.subjects.len(),
            ctx.partition.unknown.len()
        );
        let requirements = Self::apply(program, &ctx);
        Evaluation {
            program,
            detected_family,
            requirements,
            honours: self.classify_honours(transcript),
            unclassified: ctx.partition.unknown,
        }
    }
}

/// Counts over an evaluation's base requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    /// Computable requirements that are met
    pub met: usize,
    /// Computable requirements in total
    pub computable: usize,
    /// Requirements that could not be evaluated
    pub unavailable: usize,
    /// Whole-number share of computable requirements met (0 when none)
    pub percent: u32,
}

/// Result of evaluating one transcript against one program
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Program the requirements belong to
    pub program: DegreeProgram,
    /// Family picked by stream detection, independent of `program`
    pub detected_family: Family,
    /// Base requirement outcomes in rule-set order
    pub requirements: Vec<Requirement>,
    /// Honours bands, highest first
    pub honours: Vec<HonoursTier>,
    /// Degree subjects the registry does not classify
    pub unclassified: Vec<SubjectRecord>,
}

impl Evaluation {
    /// Met, computable and unavailable counts for the base requirements
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        let computable = self
            .requirements
            .iter()
            .filter(|r| !r.is_unavailable())
            .count();
        let met = self
            .requirements
            .iter()
            .filter(|r| r.met() == Some(true))
            .count();
        let percent = if computable == 0 {
            0
        } else {
            // met <= computable, so the quotient is at most 100
            u32::try_from((met * 200 + computable) / (computable * 2)).unwrap_or(100)
        };
        ProgressSummary {
            met,
            computable,
            unavailable: self.requirements.len() - computable,
            percent,
        }
    }

    /// Highest honours band awarded, if any
    #[must_use]
    pub fn awarded_honours(&self) -> Option<HonoursClass> {
        honours::awarded(&self.honours)
    }

    /// Whether the program's requirements leave nothing open.
    ///
    /// `None` when any requirement could not be evaluated and the computable
    /// ones are all met, since the outcome then hinges on missing data.
    #[must_use]
    pub fn completed(&self) -> Option<bool> {
        let summary = self.summary();
        if summary.met < summary.computable {
            Some(false)
        } else if summary.unavailable > 0 {
            None
        } else {
            Some(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseNature, CourseType, Unit};

    fn registry() -> Registry {
        Registry::builder()
            .course("CSC1113", CourseType::Core, CourseNature::Combined)
            .course("CSC1122", CourseType::Core, CourseNature::Theory)
            .course("MAT121β", CourseType::Core, CourseNature::Theory)
            .course("CSC3122", CourseType::Optional, CourseNature::Theory)
            .build()
    }

    fn transcript() -> Transcript {
        Transcript::new(
            3.075,
            8.0,
            vec![
                SubjectRecord::new("CSC1113", "Programming", "A", 3.0, 4.0),
                SubjectRecord::new("CSC1122", "Systems", "B+", 2.0, 3.3),
                SubjectRecord::new("MAT121β", "Algebra", "C", 3.0, 2.0),
            ],
        )
    }

    #[test]
    fn test_credit_check_on_small_transcript() {
        let registry = registry();
        let requirements = Evaluator::new(&registry).evaluate(DegreeProgram::BcsGeneral, &transcript());
        let credits = requirements[0].as_computable().map(|c| (c.current(), c.target(), c.met()));
        assert_eq!(credits, Some((8.0, 90.0, false)));
    }

    #[test]
    fn test_every_program_has_requirements() {
        let registry = registry();
        let evaluator = Evaluator::new(&registry);
        for program in DegreeProgram::ALL {
            assert!(!evaluator.evaluate(program, &transcript()).is_empty(), "{program}");
        }
    }

    #[test]
    fn test_assess_picks_detected_family() {
        let registry = registry();
        let evaluation = Evaluator::new(&registry).assess(None, &transcript());
        // 5 of 8 credits are computing
        assert_eq!(evaluation.detected_family, Family::Bcs);
        assert_eq!(evaluation.program, DegreeProgram::BcsGeneral);
        assert_eq!(evaluation.honours.len(), 3);
        assert!(evaluation.unclassified.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let registry = registry();
        let evaluation =
            Evaluator::new(&registry).assess(Some(DegreeProgram::BscSpecialSelection), &transcript());
        let summary = evaluation.summary();
        assert_eq!(summary.unavailable, 4);
        assert_eq!(summary.computable, 3);
        // only the GPA check is met
        assert_eq!(summary.met, 1);
        assert_eq!(summary.percent, 33);
        assert_eq!(evaluation.completed(), Some(false));
    }

    #[test]
    fn test_assess_matches_evaluate() {
        let registry = registry();
        let evaluator = Evaluator::new(&registry);
        let mut transcript = transcript();
        transcript
            .subjects
            .push(SubjectRecord::new("SEM2010", "Seminar", "B", 1.0, 3.0));
        for program in DegreeProgram::ALL {
            let evaluation = evaluator.assess(Some(program), &transcript);
            assert_eq!(evaluation.requirements, evaluator.evaluate(program, &transcript));
            assert_eq!(evaluation.unclassified.len(), 1, "{program}");
            assert_eq!(evaluation.unclassified[0].code, "SEM2010");
        }
    }

    #[test]
    fn test_empty_summary() {
        let evaluation = Evaluation {
            program: DegreeProgram::BscGeneral,
            detected_family: Family::Bsc,
            requirements: Vec::new(),
            honours: Vec::new(),
            unclassified: Vec::new(),
        };
        assert_eq!(evaluation.summary().percent, 0);
        assert_eq!(evaluation.completed(), Some(true));
    }

    #[test]
    fn test_gpa_unit_on_overall_gpa() {
        let registry = registry();
        let requirements =
            Evaluator::new(&registry).evaluate(DegreeProgram::BscSpecialCompletion, &transcript());
        let gpa = requirements[0].as_computable();
        assert_eq!(gpa.map(|c| c.unit()), Some(Unit::Gpa));
        assert_eq!(gpa.map(|c| c.met()), Some(true));
    }
}
