//! Requirement outcomes
//!
//! A requirement is either [`Computable`] from the transcript or
//! [`Unavailable`] because the data needed to decide it is not exposed
//! upstream. A computable requirement's `met` flag is derived from its
//! `current`, `target` and `unit` at construction and cannot be set directly.

use crate::core::models::SubjectRecord;
use serde::Serialize;
use std::fmt;

/// Unit in which a computable requirement is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Credit count
    Credits,
    /// Whole-number percentage
    Percent,
    /// Grade-point value
    Gpa,
    /// Number of English levels passed
    Levels,
    /// Single pass/fail check (1 = passed)
    Pass,
    /// Number of course units meeting a bar
    Courses,
}

impl Unit {
    /// Short suffix used when rendering values
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Credits => "credits",
            Self::Percent => "%",
            Self::Gpa => "GPA",
            Self::Levels => "levels",
            Self::Pass => "pass",
            Self::Courses => "courses",
        }
    }

    /// Render a value in this unit
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::Gpa => format!("{value:.2}"),
            Self::Credits if value.fract().abs() > f64::EPSILON => format!("{value:.1}"),
            _ => format!("{value:.0}"),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A requirement evaluated from transcript data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Computable {
    label: String,
    current: f64,
    target: f64,
    unit: Unit,
    met: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    related_subjects: Vec<SubjectRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold_grade_scale: Option<f64>,
}

impl Computable {
    /// Create a requirement; `met` is `current >= target` in every unit
    #[must_use]
    pub fn new(label: impl Into<String>, current: f64, target: f64, unit: Unit) -> Self {
        Self {
            label: label.into(),
            current,
            target,
            unit,
            met: current >= target,
            detail: None,
            related_subjects: Vec::new(),
            threshold_grade_scale: None,
        }
    }

    /// Attach a human-readable breakdown
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the subjects the requirement was computed from
    #[must_use]
    pub fn with_subjects(mut self, subjects: Vec<SubjectRecord>) -> Self {
        self.related_subjects = subjects;
        self
    }

    /// Record the grade-scale cutoff the requirement applies
    #[must_use]
    pub fn with_threshold(mut self, grade_scale: f64) -> Self {
        self.threshold_grade_scale = Some(grade_scale);
        self
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value
    #[must_use]
    pub const fn current(&self) -> f64 {
        self.current
    }

    /// Target value
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Unit of `current` and `target`
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Whether the requirement is satisfied
    #[must_use]
    pub const fn met(&self) -> bool {
        self.met
    }

    /// Optional breakdown text
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Subjects that fed the computation
    #[must_use]
    pub fn related_subjects(&self) -> &[SubjectRecord] {
        &self.related_subjects
    }

    /// Grade-scale cutoff, if the requirement has one
    #[must_use]
    pub const fn threshold_grade_scale(&self) -> Option<f64> {
        self.threshold_grade_scale
    }

    /// Progress towards the target as a percentage capped at 100
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.met {
            return 100.0;
        }
        let ratio = match self.unit {
            Unit::Pass => 0.0,
            Unit::Gpa => self.current / 4.0,
            _ if self.target > 0.0 => self.current / self.target,
            _ => 0.0,
        };
        (ratio * 100.0).clamp(0.0, 100.0)
    }
}

/// A requirement that cannot be decided from the available data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unavailable {
    /// Display label
    pub label: String,
    /// Why it cannot be decided
    pub reason: String,
}

impl Unavailable {
    /// Create an unavailable requirement
    #[must_use]
    pub fn new(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            reason: reason.into(),
        }
    }
}

/// Outcome of one degree requirement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Requirement {
    /// Evaluated from transcript data
    Computable(Computable),
    /// Not decidable from transcript data
    Unavailable(Unavailable),
}

impl Requirement {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Computable(c) => c.label(),
            Self::Unavailable(u) => &u.label,
        }
    }

    /// `Some(met)` for computable requirements, `None` for unavailable ones
    #[must_use]
    pub const fn met(&self) -> Option<bool> {
        match self {
            Self::Computable(c) => Some(c.met()),
            Self::Unavailable(_) => None,
        }
    }

    /// Borrow the computable payload, if any
    #[must_use]
    pub const fn as_computable(&self) -> Option<&Computable> {
        match self {
            Self::Computable(c) => Some(c),
            Self::Unavailable(_) => None,
        }
    }

    /// Whether the requirement could not be evaluated
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<Computable> for Requirement {
    fn from(value: Computable) -> Self {
        Self::Computable(value)
    }
}

impl From<Unavailable> for Requirement {
    fn from(value: Unavailable) -> Self {
        Self::Unavailable(value)
    }
}

/// Honours classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HonoursClass {
    /// First Class Honours
    FirstClass,
    /// Second Class – Upper Division
    SecondUpper,
    /// Second Class – Lower Division
    SecondLower,
}

impl HonoursClass {
    /// All bands, highest first
    pub const ALL: [Self; 3] = [Self::FirstClass, Self::SecondUpper, Self::SecondLower];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstClass => "First Class",
            Self::SecondUpper => "Second Class (Upper Division)",
            Self::SecondLower => "Second Class (Lower Division)",
        }
    }
}

impl fmt::Display for HonoursClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One honours band with its two independent checks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HonoursTier {
    /// Which band this is
    pub class: HonoursClass,
    /// Overall GPA against the band minimum
    pub gpa: Computable,
    /// High-grade credits against the band minimum
    pub credits: Computable,
}

impl HonoursTier {
    /// A band is awarded only when both checks are met
    #[must_use]
    pub const fn met(&self) -> bool {
        self.gpa.met() && self.credits.met()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_met_derived_from_values() {
        assert!(!Computable::new("Credits", 8.0, 90.0, Unit::Credits).met());
        assert!(Computable::new("Credits", 90.0, 90.0, Unit::Credits).met());
        assert!(Computable::new("Practicals", 0.0, 0.0, Unit::Courses).met());
        assert!(!Computable::new("CLC", 0.0, 1.0, Unit::Pass).met());
    }

    #[test]
    fn test_gpa_compared_without_rounding() {
        assert!(!Computable::new("GPA", 3.696, 3.7, Unit::Gpa).met());
        assert!(!Computable::new("GPA", 1.996, 2.0, Unit::Gpa).met());
        assert!(!Computable::new("GPA", 1.994, 2.0, Unit::Gpa).met());
        assert!(Computable::new("GPA", 3.7, 3.7, Unit::Gpa).met());
        assert!(Computable::new("GPA", 2.001, 2.0, Unit::Gpa).met());
    }

    #[test]
    fn test_builders_do_not_touch_met() {
        let req = Computable::new("Optional", 40.0, 60.0, Unit::Percent)
            .with_detail("2 of 5 optional credits")
            .with_threshold(1.3)
            .with_subjects(vec![SubjectRecord::new("CSC3122", "AI", "A", 2.0, 4.0)]);
        assert!(!req.met());
        assert_eq!(req.detail(), Some("2 of 5 optional credits"));
        assert_eq!(req.threshold_grade_scale(), Some(1.3));
        assert_eq!(req.related_subjects().len(), 1);
    }

    #[test]
    fn test_progress_percent() {
        assert!((Computable::new("C", 45.0, 90.0, Unit::Credits).progress_percent() - 50.0).abs() < 1e-9);
        assert!((Computable::new("G", 3.0, 3.7, Unit::Gpa).progress_percent() - 75.0).abs() < 1e-9);
        assert!((Computable::new("P", 0.0, 1.0, Unit::Pass).progress_percent()).abs() < 1e-9);
        assert!((Computable::new("V", 0.0, 0.0, Unit::Courses).progress_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_requirement_accessors() {
        let computable: Requirement = Computable::new("GPA", 2.5, 2.0, Unit::Gpa).into();
        let unavailable: Requirement = Unavailable::new("Specialization", "unknown").into();
        assert_eq!(computable.met(), Some(true));
        assert_eq!(unavailable.met(), None);
        assert!(unavailable.is_unavailable());
        assert_eq!(unavailable.label(), "Specialization");
        assert!(computable.as_computable().is_some());
    }

    #[test]
    fn test_value_formatting() {
        assert_eq!(Unit::Gpa.format_value(3.456), "3.46");
        assert_eq!(Unit::Credits.format_value(8.0), "8");
        assert_eq!(Unit::Credits.format_value(7.5), "7.5");
        assert_eq!(Unit::Percent.format_value(67.0), "67");
    }
}
