//! Transcript model

use crate::core::models::code::{normalize, NormalizedCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Letter grade → grade-point table used by the faculty.
const GRADE_SCALE: [(&str, f64); 17] = [
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("E", 0.0),
    ("E*", 0.0),
    ("E+", 0.0),
    ("E-", 0.0),
    ("F", 0.0),
    ("MC", 0.0),
];

/// Look up the grade-point value of a letter grade (case-insensitive).
///
/// Returns `None` for anything outside the faculty table, e.g. pending results.
#[must_use]
pub fn grade_points(grade: &str) -> Option<f64> {
    let grade = grade.trim();
    GRADE_SCALE
        .iter()
        .find(|(letter, _)| letter.eq_ignore_ascii_case(grade))
        .map(|(_, points)| *points)
}

/// One line of a student's transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    /// Course code as printed by the portal (e.g., "CSC113α")
    pub code: String,

    /// Course title
    pub name: String,

    /// Letter grade (e.g., "B+")
    pub grade: String,

    /// Credit value; zero or negative marks an audit / non-credit entry
    pub credit: f64,

    /// Grade-point equivalent on the 0.0–4.0 scale
    pub grade_scale: f64,

    /// Academic year the result was recorded in
    pub year: u32,

    /// Semester label as printed by the portal
    pub semester: String,
}

impl SubjectRecord {
    /// Create a subject record; year and semester default to empty values
    #[must_use]
    pub fn new(code: &str, name: &str, grade: &str, credit: f64, grade_scale: f64) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            grade: grade.to_string(),
            credit,
            grade_scale,
            year: 0,
            semester: String::new(),
        }
    }

    /// Set the academic year and semester
    #[must_use]
    pub fn in_term(mut self, year: u32, semester: &str) -> Self {
        self.year = year;
        self.semester = semester.to_string();
        self
    }

    /// Normalized form of the course code
    #[must_use]
    pub fn normalized_code(&self) -> NormalizedCode {
        NormalizedCode::new(&self.code)
    }

    /// Whether the record contributes to credit arithmetic.
    ///
    /// Non-finite and non-positive credits are treated as non-credit entries.
    #[must_use]
    pub fn is_credit_bearing(&self) -> bool {
        self.credit.is_finite() && self.credit > 0.0
    }
}

/// Course codes registered outside the formal degree structure.
///
/// Membership is tested on normalized codes, so `"FSC115α"` excludes `fsc115a`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    /// Create an empty exclusion set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a code
    pub fn insert(&mut self, code: &str) {
        let normalized = normalize(code);
        if !normalized.is_empty() {
            self.0.insert(normalized);
        }
    }

    /// Whether `code` is excluded
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(&normalize(code))
    }

    /// Number of excluded codes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no codes are excluded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for code in iter {
            set.insert(code.as_ref());
        }
        set
    }
}

/// A transcript snapshot as supplied by the portal collaborator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    /// Student identifier, if known
    pub student: Option<String>,

    /// Overall GPA as published by the faculty
    pub gpa: f64,

    /// Total confirmed (registered) credits
    pub confirmed_credits: f64,

    /// Result lines in portal order
    pub subjects: Vec<SubjectRecord>,

    /// Codes excluded from degree arithmetic
    pub excluded: ExclusionSet,

    /// Department tags from course registration
    pub departments: Vec<String>,
}

impl Transcript {
    /// Create a transcript with no exclusions or department tags
    #[must_use]
    pub fn new(gpa: f64, confirmed_credits: f64, subjects: Vec<SubjectRecord>) -> Self {
        Self {
            student: None,
            gpa,
            confirmed_credits,
            subjects,
            excluded: ExclusionSet::new(),
            departments: Vec::new(),
        }
    }

    /// Replace the exclusion set
    #[must_use]
    pub fn with_excluded<S: AsRef<str>>(mut self, codes: impl IntoIterator<Item = S>) -> Self {
        self.excluded = codes.into_iter().collect();
        self
    }

    /// Replace the department tags
    #[must_use]
    pub fn with_departments<S: Into<String>>(
        mut self,
        departments: impl IntoIterator<Item = S>,
    ) -> Self {
        self.departments = departments.into_iter().map(Into::into).collect();
        self
    }

    /// Credit-bearing subjects that are not excluded, in transcript order
    #[must_use]
    pub fn degree_subjects(&self) -> Vec<SubjectRecord> {
        self.subjects
            .iter()
            .filter(|s| s.is_credit_bearing() && !self.excluded.contains(&s.code))
            .cloned()
            .collect()
    }
}
