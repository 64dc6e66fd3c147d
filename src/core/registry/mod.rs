//! Course classification registry
//!
//! An immutable map from normalized course code to [`CourseClassification`],
//! with per-family overrides that take precedence over the shared entry.
//! Build it once (usually with [`Registry::handbook`]) and pass it by
//! reference; it is `Send + Sync` and never mutated after construction.

pub mod handbook;

use crate::core::models::{normalize, CourseClassification, CourseNature, CourseType, Family};
use std::collections::HashMap;

/// Immutable course classification lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    global: HashMap<String, CourseClassification>,
    overrides: HashMap<(Family, String), CourseClassification>,
}

impl Registry {
    /// Registry seeded from the Faculty of Science handbook
    #[must_use]
    pub fn handbook() -> Self {
        let mut builder = Self::builder();
        for &(code, course_type, nature) in handbook::GLOBAL {
            builder = builder.course(code, course_type, nature);
        }
        for &(family, code, course_type, nature) in handbook::OVERRIDES {
            builder = builder.family_override(family, code, course_type, nature);
        }
        builder.build()
    }

    /// Start an empty registry
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up the classification of a course
    ///
    /// # Arguments
    /// * `code` - Course code in any spelling (e.g., "MAT 313β", "mat313b")
    /// * `family` - Degree family whose overrides apply, if any
    ///
    /// # Returns
    /// The family override when one exists, otherwise the shared entry, or
    /// `None` for a code the handbook does not list
    #[must_use]
    pub fn lookup(&self, code: &str, family: Option<Family>) -> Option<CourseClassification> {
        let key = normalize(code);
        family
            .and_then(|family| self.overrides.get(&(family, key.clone())))
            .or_else(|| self.global.get(&key))
            .copied()
    }

    /// Whether the course is compulsory; `false` when unknown
    #[must_use]
    pub fn is_core(&self, code: &str, family: Option<Family>) -> bool {
        self.lookup(code, family)
            .is_some_and(|c| c.course_type == CourseType::Core)
    }

    /// Whether the course is elective; `false` when unknown
    #[must_use]
    pub fn is_optional(&self, code: &str, family: Option<Family>) -> bool {
        self.lookup(code, family)
            .is_some_and(|c| c.course_type == CourseType::Optional)
    }

    /// Whether the course has lectures (theory, combined or project units)
    #[must_use]
    pub fn has_theory_component(&self, code: &str, family: Option<Family>) -> bool {
        self.lookup(code, family)
            .is_some_and(|c| c.nature.has_theory())
    }

    /// Whether the course has practicals (practical, combined or project units)
    #[must_use]
    pub fn has_practical_component(&self, code: &str, family: Option<Family>) -> bool {
        self.lookup(code, family)
            .is_some_and(|c| c.nature.has_practical())
    }

    /// Whether the handbook lists the course at all
    #[must_use]
    pub fn is_known(&self, code: &str, family: Option<Family>) -> bool {
        self.lookup(code, family).is_some()
    }

    /// Number of distinct codes with a shared entry
    #[must_use]
    pub fn len(&self) -> usize {
        self.global.len()
    }

    /// Whether the registry has no shared entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
    }

    /// Number of family-specific entries
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

/// Builder for custom registries (another catalogue year, tests)
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Add a shared entry; a later entry for the same code replaces the earlier one
    #[must_use]
    pub fn course(mut self, code: &str, course_type: CourseType, nature: CourseNature) -> Self {
        self.registry.global.insert(
            normalize(code),
            CourseClassification::new(course_type, nature),
        );
        self
    }

    /// Add an entry that applies only when evaluating `family`
    #[must_use]
    pub fn family_override(
        mut self,
        family: Family,
        code: &str,
        course_type: CourseType,
        nature: CourseNature,
    ) -> Self {
        self.registry.overrides.insert(
            (family, normalize(code)),
            CourseClassification::new(course_type, nature),
        );
        self
    }

    /// Freeze the registry
    #[must_use]
    pub fn build(self) -> Registry {
        logger::debug!(
            "Course registry built: {} courses, {} family overrides",
            self.registry.global.len(),
            self.registry.overrides.len()
        );
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_registry_is_shareable() {
        assert_send_sync::<Registry>();
    }

    #[test]
    fn test_lookup_normalizes_code() {
        let registry = Registry::handbook();
        let expected = Some(CourseClassification::new(CourseType::Core, CourseNature::Combined));
        assert_eq!(registry.lookup("CSC113α", None), expected);
        assert_eq!(registry.lookup("csc 113a", None), expected);
        assert_eq!(registry.lookup("CSC113Α", Some(Family::Bcs)), expected);
    }

    #[test]
    fn test_override_precedence() {
        let registry = Registry::handbook();
        assert!(registry.is_core("MAT313β", Some(Family::Bsc)));
        assert!(registry.is_core("MAT313β", None));
        assert!(registry.is_optional("MAT313β", Some(Family::Bcs)));
        assert!(registry.has_practical_component("MAT313β", Some(Family::Bcs)));
        assert!(!registry.has_practical_component("MAT313β", Some(Family::Bsc)));
        assert!(registry.is_core("MAT225β", Some(Family::Bsc)));
        assert!(registry.is_core("MAT225β", Some(Family::Bcs)));
    }

    #[test]
    fn test_family_only_entry() {
        let registry = Registry::handbook();
        assert!(registry.is_known("MAT1142", Some(Family::Bsc)));
        assert!(!registry.is_known("MAT1142", Some(Family::Bcs)));
        assert!(!registry.is_known("MAT1142", None));
    }

    #[test]
    fn test_unknown_codes_answer_false() {
        let registry = Registry::handbook();
        assert_eq!(registry.lookup("XYZ9999", None), None);
        assert!(!registry.is_core("XYZ9999", None));
        assert!(!registry.is_optional("XYZ9999", None));
        assert!(!registry.has_theory_component("XYZ9999", None));
        assert!(!registry.has_practical_component("XYZ9999", None));
    }

    #[test]
    fn test_builder_later_entry_wins() {
        let registry = Registry::builder()
            .course("ABC1012", CourseType::Core, CourseNature::Theory)
            .course("abc 1012", CourseType::Optional, CourseNature::Practical)
            .build();
        assert_eq!(registry.len(), 1);
        assert!(registry.is_optional("ABC1012", None));
        assert!(!registry.has_theory_component("ABC1012", None));
    }

    #[test]
    fn test_handbook_contents() {
        let registry = Registry::handbook();
        assert!(registry.len() > 300);
        assert_eq!(registry.override_count(), 2);
        assert!(registry.is_core("ENG1b10", None));
        assert!(registry.is_core("CSC4046", None));
        assert!(registry.has_theory_component("CSC4046", None));
        assert!(registry.has_practical_component("CSC4046", None));
        assert!(registry.is_optional("FSC3bP2", None));
    }
}
