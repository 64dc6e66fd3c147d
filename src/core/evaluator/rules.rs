//! Requirement builders shared by the program rule sets

use crate::core::aggregate::{
    credits_at_or_above, english_level_passed, find_by_keyword, percent_at_or_above,
    total_credits, year_level_subjects, PASS_GRADE_SCALE,
};
use crate::core::models::{
    Computable, NormalizedCode, Requirement, SubjectRecord, Transcript, Unavailable, Unit,
};
use crate::core::partition::{DepartmentGroup, Partition};

pub const SPECIALIZATION_REASON: &str =
    "Cannot be calculated: the specializing subject is not recorded in the available data.";
pub const SPECIALIZATION_PRACTICALS_REASON: &str =
    "Cannot be calculated: the specializing subject is not recorded in the available data, \
     so its practical units cannot be told apart from the rest.";
pub const OTHER_PRACTICALS_REASON: &str =
    "Cannot be calculated: 'other' practicals are defined relative to the specializing subject, \
     which is not recorded in the available data.";

const RESEARCH_PROJECT_KEYWORDS: [&str; 2] = ["research project", "individual project"];
const INDUSTRY_PLACEMENT_KEYWORDS: [&str; 3] = ["industry", "placement", "industrial"];
const CLC_KEYWORDS: [&str; 2] = ["clc", "computer literacy"];
const BIOLOGY_PREFIXES: [&str; 2] = ["BOT", "ZOO"];
const MATHEMATICS_FOR_BIOLOGY: &str = "MAT1142";
const ROMAN: [&str; 3] = ["I", "II", "III"];

/// Everything a rule set reads, computed once per evaluation
pub struct RuleContext<'a> {
    pub transcript: &'a Transcript,
    pub degree_subjects: Vec<SubjectRecord>,
    pub partition: Partition,
}

impl<'a> RuleContext<'a> {
    pub fn new(transcript: &'a Transcript, partition: Partition) -> Self {
        Self {
            transcript,
            degree_subjects: transcript.degree_subjects(),
            partition,
        }
    }

    /// Whether any degree subject carries a computing prefix
    fn has_computing_subjects(&self) -> bool {
        self.degree_subjects
            .iter()
            .any(|s| DepartmentGroup::of(&s.code) == DepartmentGroup::Computing)
    }

    /// Whether any degree subject is a botany or zoology unit
    fn has_biology_subjects(&self) -> bool {
        self.degree_subjects
            .iter()
            .any(|s| s.normalized_code().has_prefix(&BIOLOGY_PREFIXES))
    }

    /// Degree subjects at year level `digit`
    fn year_level(&self, digit: char) -> Vec<SubjectRecord> {
        year_level_subjects(&self.degree_subjects, digit)
    }
}

pub fn unavailable(label: &str, reason: &str) -> Requirement {
    Unavailable::new(label, reason).into()
}

pub fn credits_registered(ctx: &RuleContext<'_>, target: f64) -> Requirement {
    Computable::new(
        format!("Credits Registered (≥ {target:.0})"),
        ctx.transcript.confirmed_credits,
        target,
        Unit::Credits,
    )
    .into()
}

pub fn overall_gpa(ctx: &RuleContext<'_>, target: f64) -> Requirement {
    Computable::new(
        format!("Overall GPA (≥ {target:.2})"),
        ctx.transcript.gpa,
        target,
        Unit::Gpa,
    )
    .into()
}

/// English levels `1..=levels`, searched across every transcript line
pub fn english(ctx: &RuleContext<'_>, levels: u8) -> Requirement {
    let passed: Vec<bool> = (1..=levels)
        .map(|level| english_level_passed(&ctx.transcript.subjects, level))
        .collect();
    let names: Vec<&str> = ROMAN.iter().take(passed.len()).copied().collect();
    let label = match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("English Level {} & {last}", rest.join(", "))
        }
        _ => format!("English Level {}", names.join("")),
    };
    let detail = names
        .iter()
        .zip(&passed)
        .map(|(name, ok)| format!("{name}: {}", if *ok { "Passed" } else { "Pending" }))
        .collect::<Vec<_>>()
        .join(", ");
    #[allow(clippy::cast_precision_loss)]
    let count = passed.iter().filter(|ok| **ok).count() as f64;
    Computable::new(label, count, f64::from(levels), Unit::Levels)
        .with_detail(detail)
        .into()
}

/// Percentage of `subjects`' credits at or above `threshold` against `target_percent`
pub fn percent_with_grade(
    label: &str,
    subjects: Vec<SubjectRecord>,
    threshold: f64,
    target_percent: f64,
    noun: &str,
) -> Requirement {
    let detail = format!(
        "{} of {} {noun} credits",
        Unit::Credits.format_value(credits_at_or_above(&subjects, threshold)),
        Unit::Credits.format_value(total_credits(&subjects)),
    );
    Computable::new(
        label,
        percent_at_or_above(&subjects, threshold),
        target_percent,
        Unit::Percent,
    )
    .with_detail(detail)
    .with_threshold(threshold)
    .with_subjects(subjects)
    .into()
}

/// Every subject in the list at or above `threshold`; met vacuously when empty
pub fn all_courses_with_grade(
    label: &str,
    subjects: Vec<SubjectRecord>,
    threshold: f64,
    noun: &str,
) -> Requirement {
    let passed = subjects.iter().filter(|s| s.grade_scale >= threshold).count();
    let total = subjects.len();
    #[allow(clippy::cast_precision_loss)]
    let (current, target) = (passed as f64, total as f64);
    Computable::new(label, current, target, Unit::Courses)
        .with_detail(format!("{passed} of {total} {noun}"))
        .with_threshold(threshold)
        .with_subjects(subjects)
        .into()
}

/// A single named course graded at C or better; `current` is its grade-scale
fn named_course(label: &str, found: Option<&SubjectRecord>) -> Requirement {
    let current = found.map_or(0.0, |s| s.grade_scale);
    let mut requirement = Computable::new(label, current, PASS_GRADE_SCALE, Unit::Gpa)
        .with_threshold(PASS_GRADE_SCALE);
    requirement = match found {
        Some(s) => requirement
            .with_detail(format!("{} ({}): {}", s.code, s.name, s.grade))
            .with_subjects(vec![s.clone()]),
        None => requirement.with_detail("Not found in results yet"),
    };
    requirement.into()
}

/// A pass/fail check on a single course; `passes` decides a found course's grade-scale
fn pass_check(
    label: &str,
    found: Option<&SubjectRecord>,
    bar: f64,
    passes: impl Fn(f64) -> bool,
) -> Requirement {
    let passed = found.is_some_and(|s| passes(s.grade_scale));
    let mut requirement = Computable::new(
        label,
        if passed { 1.0 } else { 0.0 },
        1.0,
        Unit::Pass,
    )
    .with_threshold(bar);
    requirement = match found {
        Some(s) => requirement
            .with_detail(format!("{}: {}", s.code, s.grade))
            .with_subjects(vec![s.clone()]),
        None => requirement.with_detail("Not found in results"),
    };
    requirement.into()
}

pub fn research_project(ctx: &RuleContext<'_>) -> Requirement {
    named_course(
        "Research Project with C",
        find_by_keyword(&ctx.degree_subjects, &RESEARCH_PROJECT_KEYWORDS),
    )
}

pub fn industry_placement(ctx: &RuleContext<'_>) -> Requirement {
    named_course(
        "Industry Placement with C",
        find_by_keyword(&ctx.degree_subjects, &INDUSTRY_PLACEMENT_KEYWORDS),
    )
}

/// Computer literacy; only asked of students without computing subjects.
/// Any graded result above zero counts as a pass.
pub fn computer_literacy(ctx: &RuleContext<'_>) -> Option<Requirement> {
    if ctx.has_computing_subjects() {
        return None;
    }
    Some(pass_check(
        "CLC (Computer Literacy Certificate)",
        find_by_keyword(&ctx.transcript.subjects, &CLC_KEYWORDS),
        0.0,
        |scale| scale > 0.0,
    ))
}

/// Mathematics for Biology; only asked of students with biology subjects
pub fn mathematics_for_biology(ctx: &RuleContext<'_>) -> Option<Requirement> {
    if !ctx.has_biology_subjects() {
        return None;
    }
    let wanted = NormalizedCode::new(MATHEMATICS_FOR_BIOLOGY);
    let found = ctx
        .degree_subjects
        .iter()
        .find(|s| s.normalized_code() == wanted);
    Some(pass_check(
        &format!("Mathematics for Biology ({MATHEMATICS_FOR_BIOLOGY})"),
        found,
        PASS_GRADE_SCALE,
        |scale| scale >= PASS_GRADE_SCALE,
    ))
}

/// Percentage of level-4 credits graded C or better
pub fn fourth_year_with_c(ctx: &RuleContext<'_>) -> Requirement {
    let level_four = ctx.year_level('4');
    if level_four.is_empty() {
        return Computable::new("4th Year Courses with C (≥ 70%)", 0.0, 70.0, Unit::Percent)
            .with_detail("No level-4 subjects found yet")
            .with_threshold(PASS_GRADE_SCALE)
            .into();
    }
    percent_with_grade(
        "4th Year Courses with C (≥ 70%)",
        level_four,
        PASS_GRADE_SCALE,
        70.0,
        "level-4",
    )
}

/// Level-4 credits registered against `target`
pub fn fourth_year_credits(ctx: &RuleContext<'_>, target: f64) -> Requirement {
    let level_four = ctx.year_level('4');
    Computable::new(
        format!("4th Year Credits (≥ {target:.0})"),
        total_credits(&level_four),
        target,
        Unit::Credits,
    )
    .with_subjects(level_four)
    .into()
}

