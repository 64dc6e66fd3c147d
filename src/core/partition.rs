//! Subject partitioning by handbook classification

use crate::core::aggregate::total_credits;
use crate::core::models::{Family, NormalizedCode, SubjectRecord, Transcript};
use crate::core::registry::Registry;

/// Department groups used by the computing and mathematics rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentGroup {
    /// CSC and COM codes
    Computing,
    /// MAT, AMT and IMT codes
    Mathematics,
    /// Everything else
    Other,
}

impl DepartmentGroup {
    /// Code prefixes belonging to the group (empty for [`Self::Other`])
    #[must_use]
    pub const fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Computing => &["CSC", "COM"],
            Self::Mathematics => &["MAT", "AMT", "IMT"],
            Self::Other => &[],
        }
    }

    /// Group a course code belongs to
    #[must_use]
    pub fn of(code: &str) -> Self {
        let code = NormalizedCode::new(code);
        if code.has_prefix(Self::Computing.prefixes()) {
            Self::Computing
        } else if code.has_prefix(Self::Mathematics.prefixes()) {
            Self::Mathematics
        } else {
            Self::Other
        }
    }
}

/// Subjects of one classification split by department group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedSubjects {
    /// Computing subjects
    pub computing: Vec<SubjectRecord>,
    /// Mathematics subjects
    pub mathematics: Vec<SubjectRecord>,
    /// Subjects from any other department
    pub other: Vec<SubjectRecord>,
}

impl GroupedSubjects {
    fn push(&mut self, subject: SubjectRecord) {
        match DepartmentGroup::of(&subject.code) {
            DepartmentGroup::Computing => self.computing.push(subject),
            DepartmentGroup::Mathematics => self.mathematics.push(subject),
            DepartmentGroup::Other => self.other.push(subject),
        }
    }

    /// Subjects of one group
    #[must_use]
    pub fn group(&self, group: DepartmentGroup) -> &[SubjectRecord] {
        match group {
            DepartmentGroup::Computing => &self.computing,
            DepartmentGroup::Mathematics => &self.mathematics,
            DepartmentGroup::Other => &self.other,
        }
    }
}

/// Credit-bearing, non-excluded subjects split into classification buckets.
///
/// `core_theory` and `core_practical` overlap exactly on combined and
/// project units; every other bucket pair is disjoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// All core subjects
    pub core: Vec<SubjectRecord>,
    /// Core subjects with a theory component
    pub core_theory: Vec<SubjectRecord>,
    /// Core subjects with a practical component
    pub core_practical: Vec<SubjectRecord>,
    /// Optional subjects
    pub optional: Vec<SubjectRecord>,
    /// Subjects the registry does not know
    pub unknown: Vec<SubjectRecord>,
    /// Core subjects by department group
    pub core_groups: GroupedSubjects,
    /// Optional subjects by department group
    pub optional_groups: GroupedSubjects,
}

impl Partition {
    /// Partition a transcript's degree subjects under `family`'s classifications
    ///
    /// # Arguments
    /// * `registry` - Classification lookup
    /// * `transcript` - Transcript whose credit-bearing, non-excluded subjects are split
    /// * `family` - Degree family whose overrides apply
    #[must_use]
    pub fn build(registry: &Registry, transcript: &Transcript, family: Family) -> Self {
        let mut partition = Self::default();
        for subject in transcript.degree_subjects() {
            let Some(classification) = registry.lookup(&subject.code, Some(family)) else {
                partition.unknown.push(subject);
                continue;
            };
            if classification.is_core() {
                if classification.nature.has_theory() {
                    partition.core_theory.push(subject.clone());
                }
                if classification.nature.has_practical() {
                    partition.core_practical.push(subject.clone());
                }
                partition.core_groups.push(subject.clone());
                partition.core.push(subject);
            } else {
                partition.optional_groups.push(subject.clone());
                partition.optional.push(subject);
            }
        }
        logger::debug!(
            "Partitioned for {family}: {} core ({} theory, {} practical), {} optional, {} unknown",
            partition.core.len(),
            partition.core_theory.len(),
            partition.core_practical.len(),
            partition.optional.len(),
            partition.unknown.len()
        );
        partition
    }

    /// Core and optional subjects of one department group
    #[must_use]
    pub fn group_subjects(&self, group: DepartmentGroup) -> Vec<SubjectRecord> {
        self.core_groups
            .group(group)
            .iter()
            .chain(self.optional_groups.group(group))
            .cloned()
            .collect()
    }

    /// Credits of every classified and unclassified subject, each counted once
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        total_credits(&self.core) + total_credits(&self.optional) + total_credits(&self.unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseNature, CourseType};

    fn registry() -> Registry {
        Registry::builder()
            .course("CSC1113", CourseType::Core, CourseNature::Combined)
            .course("CSC1122", CourseType::Core, CourseNature::Theory)
            .course("CSC1153", CourseType::Core, CourseNature::Practical)
            .course("MAT121β", CourseType::Core, CourseNature::Theory)
            .course("CSC3122", CourseType::Optional, CourseNature::Theory)
            .course("PHY2112", CourseType::Optional, CourseNature::Theory)
            .build()
    }

    fn transcript() -> Transcript {
        Transcript::new(
            3.0,
            20.0,
            vec![
                SubjectRecord::new("CSC1113", "Programming", "A", 3.0, 4.0),
                SubjectRecord::new("CSC1122", "Systems", "B", 2.0, 3.0),
                SubjectRecord::new("CSC1153", "Lab", "C", 3.0, 2.0),
                SubjectRecord::new("MAT121β", "Algebra", "C", 3.0, 2.0),
                SubjectRecord::new("CSC3122", "AI", "B", 2.0, 3.0),
                SubjectRecord::new("PHY2112", "Electronics", "B", 2.0, 3.0),
                SubjectRecord::new("XYZ1010", "Mystery", "A", 1.0, 4.0),
                SubjectRecord::new("FSC115α", "Sports", "A", 1.0, 4.0),
                SubjectRecord::new("ENG1b10", "English", "A", 0.0, 4.0),
            ],
        )
        .with_excluded(["FSC115α"])
    }

    fn codes(subjects: &[SubjectRecord]) -> Vec<&str> {
        subjects.iter().map(|s| s.code.as_str()).collect()
    }

    #[test]
    fn test_buckets() {
        let p = Partition::build(&registry(), &transcript(), Family::Bcs);
        assert_eq!(codes(&p.core), vec!["CSC1113", "CSC1122", "CSC1153", "MAT121β"]);
        assert_eq!(codes(&p.core_theory), vec!["CSC1113", "CSC1122", "MAT121β"]);
        assert_eq!(codes(&p.core_practical), vec!["CSC1113", "CSC1153"]);
        assert_eq!(codes(&p.optional), vec!["CSC3122", "PHY2112"]);
        assert_eq!(codes(&p.unknown), vec!["XYZ1010"]);
    }

    #[test]
    fn test_department_groups() {
        let p = Partition::build(&registry(), &transcript(), Family::Bcs);
        assert_eq!(codes(&p.core_groups.computing), vec!["CSC1113", "CSC1122", "CSC1153"]);
        assert_eq!(codes(&p.core_groups.mathematics), vec!["MAT121β"]);
        assert_eq!(codes(&p.optional_groups.other), vec!["PHY2112"]);
        assert_eq!(
            codes(&p.group_subjects(DepartmentGroup::Computing)),
            vec!["CSC1113", "CSC1122", "CSC1153", "CSC3122"]
        );
    }

    #[test]
    fn test_credit_conservation() {
        let t = transcript();
        let p = Partition::build(&registry(), &t, Family::Bsc);
        let practical_only: Vec<SubjectRecord> = p
            .core_practical
            .iter()
            .filter(|s| !p.core_theory.contains(s))
            .cloned()
            .collect();
        let summed = total_credits(&p.core_theory)
            + total_credits(&practical_only)
            + total_credits(&p.optional)
            + total_credits(&p.unknown);
        let expected = total_credits(&t.degree_subjects());
        assert!((summed - expected).abs() < f64::EPSILON);
        assert!((p.total_credits() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_group_of_code() {
        assert_eq!(DepartmentGroup::of("com 2112"), DepartmentGroup::Computing);
        assert_eq!(DepartmentGroup::of("IMT111β"), DepartmentGroup::Mathematics);
        assert_eq!(DepartmentGroup::of("BOT1112"), DepartmentGroup::Other);
    }
}
