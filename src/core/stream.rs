//! Degree family (stream) detection

use crate::core::aggregate::total_credits;
use crate::core::models::{Family, Transcript};
use crate::core::partition::DepartmentGroup;

/// Share of computing credits above which a student is treated as BCS
pub const COMPUTING_SHARE_THRESHOLD: f64 = 0.4;

/// Department tag fragments that mark a BCS registration
const BCS_DEPARTMENT_MARKERS: [&str; 2] = ["BCS", "COMPUTER SCIENCE"];

/// Fraction of credit-bearing, non-excluded credits taken in computing
/// subjects; 0 when there are no such credits.
#[must_use]
pub fn computing_credit_share(transcript: &Transcript) -> f64 {
    let subjects = transcript.degree_subjects();
    let total = total_credits(&subjects);
    if total <= 0.0 {
        return 0.0;
    }
    let computing: Vec<_> = subjects
        .into_iter()
        .filter(|s| DepartmentGroup::of(&s.code) == DepartmentGroup::Computing)
        .collect();
    total_credits(&computing) / total
}

/// Whether any declared department tag names the computer science degree
fn has_bcs_department(transcript: &Transcript) -> bool {
    transcript.departments.iter().any(|department| {
        let department = department.to_uppercase();
        BCS_DEPARTMENT_MARKERS
            .iter()
            .any(|marker| department.contains(marker))
    })
}

/// Whether the student belongs to the computing (BCS) stream
#[must_use]
pub fn is_computing_stream(transcript: &Transcript) -> bool {
    has_bcs_department(transcript)
        || computing_credit_share(transcript) > COMPUTING_SHARE_THRESHOLD
}

/// Classify a transcript into a degree family.
///
/// Declared department tags win; otherwise the computing credit share decides.
#[must_use]
pub fn detect_family(transcript: &Transcript) -> Family {
    let family = if is_computing_stream(transcript) {
        Family::Bcs
    } else {
        Family::Bsc
    };
    logger::debug!(
        "Detected {family} stream (computing share {:.2})",
        computing_credit_share(transcript)
    );
    family
}
