//! Integration tests for the handbook registry and code normalization

use degree_progress::core::models::{normalize, CourseNature, CourseType, Family};
use degree_progress::core::registry::Registry;

#[test]
fn normalize_is_idempotent() {
    for code in ["MAT 121β", "csc113α", "ENG1B10", "  PHY 1b22 ", "MAT112Δ", "", "ζ9"] {
        let once = normalize(code);
        assert_eq!(normalize(&once), once, "{code}");
    }
}

#[test]
fn greek_and_latin_spellings_resolve_to_the_same_entry() {
    let registry = Registry::handbook();
    assert_eq!(
        registry.lookup("MAT121β", None),
        registry.lookup("mat 121b", None)
    );
    assert!(registry.lookup("MAT121β", None).is_some());
}

#[test]
fn family_override_wins_and_global_applies_to_other_family() {
    let registry = Registry::handbook();

    let bcs = registry.lookup("MAT313β", Some(Family::Bcs));
    assert_eq!(bcs.map(|c| c.course_type), Some(CourseType::Optional));
    assert_eq!(bcs.map(|c| c.nature), Some(CourseNature::Combined));

    let bsc = registry.lookup("MAT313β", Some(Family::Bsc));
    assert_eq!(bsc.map(|c| c.course_type), Some(CourseType::Core));

    // A shared code without an override is core under both families
    for family in Family::ALL {
        assert!(registry.is_core("MAT311β", Some(family)));
    }
}

#[test]
fn family_only_entry_is_unknown_elsewhere() {
    let registry = Registry::handbook();
    assert!(registry.is_core("MAT1142", Some(Family::Bsc)));
    assert!(registry.has_theory_component("MAT1142", Some(Family::Bsc)));
    assert!(!registry.is_known("MAT1142", Some(Family::Bcs)));
    assert!(!registry.is_known("MAT1142", None));
}

#[test]
fn unknown_codes_are_neither_core_nor_optional() {
    let registry = Registry::handbook();
    assert!(!registry.is_core("XYZ9999", Some(Family::Bsc)));
    assert!(!registry.is_optional("XYZ9999", Some(Family::Bsc)));
}

#[test]
fn custom_registry_from_builder() {
    let registry = Registry::builder()
        .course("ABC1012", CourseType::Core, CourseNature::Practical)
        .family_override(Family::Bcs, "ABC1012", CourseType::Optional, CourseNature::Theory)
        .build();
    assert!(registry.has_practical_component("abc 1012", Some(Family::Bsc)));
    assert!(registry.is_optional("ABC1012", Some(Family::Bcs)));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.override_count(), 1);
}
