//! Data models for `DegreeProgress`

pub mod classification;
pub mod code;
pub mod program;
pub mod requirement;
pub mod subject;

pub use classification::{CourseClassification, CourseNature, CourseType};
pub use code::{normalize, NormalizedCode};
pub use program::{DegreeProgram, Family};
pub use requirement::{Computable, HonoursClass, HonoursTier, Requirement, Unavailable, Unit};
pub use subject::{grade_points, ExclusionSet, SubjectRecord, Transcript};
