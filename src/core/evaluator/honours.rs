//! Honours classification

use crate::core::aggregate::credits_at_or_above;
use crate::core::models::{Computable, HonoursClass, HonoursTier, SubjectRecord, Unit};

/// Credits every band asks for at its grade bar
pub const HONOURS_CREDITS: f64 = 40.0;

/// GPA minimum, grade-scale bar for the credit check, and the grade name
const fn band(class: HonoursClass) -> (f64, f64, &'static str) {
    match class {
        HonoursClass::FirstClass => (3.70, 3.7, "A-"),
        HonoursClass::SecondUpper => (3.30, 2.7, "B-"),
        HonoursClass::SecondLower => (3.00, 2.7, "B-"),
    }
}

/// Evaluate all three bands, highest first.
///
/// `subjects` should already be the credit-bearing, non-excluded set.
#[must_use]
pub fn classify(gpa: f64, subjects: &[SubjectRecord]) -> Vec<HonoursTier> {
    HonoursClass::ALL
        .into_iter()
        .map(|class| {
            let (min_gpa, bar, grade) = band(class);
            let credits = credits_at_or_above(subjects, bar);
            HonoursTier {
                class,
                gpa: Computable::new(format!("GPA (≥ {min_gpa:.2})"), gpa, min_gpa, Unit::Gpa),
                credits: Computable::new(
                    format!("Credits with {grade} or above (≥ {HONOURS_CREDITS:.0})"),
                    credits,
                    HONOURS_CREDITS,
                    Unit::Credits,
                )
                .with_threshold(bar),
            }
        })
        .collect()
}

/// Highest band awarded, if any
#[must_use]
pub fn awarded(tiers: &[HonoursTier]) -> Option<HonoursClass> {
    tiers.iter().find(|tier| tier.met()).map(|tier| tier.class)
}
