//! Credit and grade aggregation over subject lists
//!
//! Every helper ignores non-credit entries where credits are summed, and
//! none of them can fail: an empty list yields zero.

use crate::core::models::{normalize, SubjectRecord};

/// Grade-scale bar for a named course to count as passed (a C)
pub const PASS_GRADE_SCALE: f64 = 2.0;

/// Sum of credits earned at or above a grade-scale threshold
///
/// # Arguments
/// * `subjects` - Subjects to aggregate
/// * `threshold` - Minimum grade-scale value (inclusive)
#[must_use]
pub fn credits_at_or_above(subjects: &[SubjectRecord], threshold: f64) -> f64 {
    subjects
        .iter()
        .filter(|s| s.is_credit_bearing() && s.grade_scale >= threshold)
        .map(|s| s.credit)
        .sum()
}

/// Sum of all positive credits
#[must_use]
pub fn total_credits(subjects: &[SubjectRecord]) -> f64 {
    subjects
        .iter()
        .filter(|s| s.is_credit_bearing())
        .map(|s| s.credit)
        .sum()
}

/// Whole-number percentage of credits earned at or above `threshold`.
///
/// Returns 0 when the list carries no credits.
#[must_use]
pub fn percent_at_or_above(subjects: &[SubjectRecord], threshold: f64) -> f64 {
    let total = total_credits(subjects);
    if total <= 0.0 {
        return 0.0;
    }
    (100.0 * credits_at_or_above(subjects, threshold) / total).round()
}

/// Whether English level `level` has been passed.
///
/// Matches any subject whose normalized code starts with `eng{level}`,
/// credit-bearing or not, graded at [`PASS_GRADE_SCALE`] or better.
#[must_use]
pub fn english_level_passed(subjects: &[SubjectRecord], level: u8) -> bool {
    let prefix = format!("eng{level}");
    subjects
        .iter()
        .any(|s| normalize(&s.code).starts_with(&prefix) && s.grade_scale >= PASS_GRADE_SCALE)
}

/// Subjects whose code's first digit is the year level `digit`
#[must_use]
pub fn year_level_subjects(subjects: &[SubjectRecord], digit: char) -> Vec<SubjectRecord> {
    subjects
        .iter()
        .filter(|s| s.normalized_code().year_digit() == Some(digit))
        .cloned()
        .collect()
}

/// First subject whose name or code contains any keyword (case-insensitive)
#[must_use]
pub fn find_by_keyword<'a>(
    subjects: &'a [SubjectRecord],
    keywords: &[&str],
) -> Option<&'a SubjectRecord> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    subjects.iter().find(|s| {
        let name = s.name.to_lowercase();
        let code = s.code.to_lowercase();
        keywords
            .iter()
            .any(|k| name.contains(k.as_str()) || code.contains(k.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects() -> Vec<SubjectRecord> {
        vec![
            SubjectRecord::new("CSC1113", "Programming Techniques", "A", 3.0, 4.0),
            SubjectRecord::new("CSC1122", "Computer Systems I", "B+", 2.0, 3.3),
            SubjectRecord::new("MAT121β", "Algebra", "C", 3.0, 2.0),
            SubjectRecord::new("ENG1b10", "English I", "C-", 0.0, 1.7),
        ]
    }

    #[test]
    fn test_credit_sums_skip_non_credit() {
        let subjects = subjects();
        assert!((total_credits(&subjects) - 8.0).abs() < f64::EPSILON);
        assert!((credits_at_or_above(&subjects, 3.3) - 5.0).abs() < f64::EPSILON);
        assert!((credits_at_or_above(&subjects, 0.0) - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_rounds_and_handles_empty() {
        let subjects = subjects();
        // 5 of 8 credits = 62.5%
        assert!((percent_at_or_above(&subjects, 3.3) - 63.0).abs() < f64::EPSILON);
        assert!(percent_at_or_above(&[], 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_monotonic_in_threshold() {
        let subjects = subjects();
        let mut previous = 0.0;
        for threshold in [4.0, 3.7, 3.3, 2.7, 2.0, 1.3, 0.0] {
            let pct = percent_at_or_above(&subjects, threshold);
            assert!(pct >= previous, "{pct} < {previous} at {threshold}");
            previous = pct;
        }
    }

    #[test]
    fn test_english_levels() {
        let mut subjects = subjects();
        assert!(!english_level_passed(&subjects, 1));
        subjects.push(SubjectRecord::new("ENG1b10", "English I", "C", 0.0, 2.0));
        subjects.push(SubjectRecord::new("Eng 2β10", "English II", "B", 0.0, 3.0));
        assert!(english_level_passed(&subjects, 1));
        assert!(english_level_passed(&subjects, 2));
        assert!(!english_level_passed(&subjects, 3));
    }

    #[test]
    fn test_year_level_filter() {
        let mut subjects = subjects();
        subjects.push(SubjectRecord::new("CSC4046", "Research Project", "B", 6.0, 3.0));
        let level_four = year_level_subjects(&subjects, '4');
        assert_eq!(level_four.len(), 1);
        assert_eq!(level_four[0].code, "CSC4046");
        assert_eq!(year_level_subjects(&subjects, '1').len(), 4);
    }

    #[test]
    fn test_find_by_keyword() {
        let subjects = subjects();
        let found = find_by_keyword(&subjects, &["ALGEBRA"]).map(|s| s.code.as_str());
        assert_eq!(found, Some("MAT121β"));
        let found = find_by_keyword(&subjects, &["nothing", "csc11"]).map(|s| s.code.as_str());
        assert_eq!(found, Some("CSC1113"));
        assert!(find_by_keyword(&subjects, &["placement"]).is_none());
    }
}
