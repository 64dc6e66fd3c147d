//! Course classification model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a course unit is compulsory or elective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    /// Compulsory course unit
    Core,
    /// Elective course unit
    Optional,
}

/// Pedagogical form of a course unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseNature {
    /// Lecture-only unit
    Theory,
    /// Laboratory or practical-only unit
    Practical,
    /// Unit with both lectures and practicals
    Combined,
    /// Research or group project unit
    Project,
}

impl CourseNature {
    /// Theory, Combined and Project units carry a theory component
    #[must_use]
    pub const fn has_theory(self) -> bool {
        matches!(self, Self::Theory | Self::Combined | Self::Project)
    }

    /// Practical, Combined and Project units carry a practical component
    #[must_use]
    pub const fn has_practical(self) -> bool {
        matches!(self, Self::Practical | Self::Combined | Self::Project)
    }
}

/// Classification of one course code in the handbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseClassification {
    /// Core or optional
    #[serde(rename = "type")]
    pub course_type: CourseType,
    /// Theory, practical, combined or project
    pub nature: CourseNature,
}

impl CourseClassification {
    /// Create a classification
    #[must_use]
    pub const fn new(course_type: CourseType, nature: CourseNature) -> Self {
        Self {
            course_type,
            nature,
        }
    }

    /// Whether the unit is compulsory
    #[must_use]
    pub const fn is_core(&self) -> bool {
        matches!(self.course_type, CourseType::Core)
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Optional => write!(f, "optional"),
        }
    }
}

impl fmt::Display for CourseNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theory => write!(f, "theory"),
            Self::Practical => write!(f, "practical"),
            Self::Combined => write!(f, "combined"),
            Self::Project => write!(f, "project"),
        }
    }
}
