//! Degree program model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two degree families offered by the faculty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Bachelor of Science (physical and biological streams)
    Bsc,
    /// Bachelor of Computer Science
    Bcs,
}

impl Family {
    /// Both families, BSc first
    pub const ALL: [Self; 2] = [Self::Bsc, Self::Bcs];

    /// Display name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bsc => "BSc",
            Self::Bcs => "BCS",
        }
    }

    /// The three programs belonging to this family, general degree first
    #[must_use]
    pub fn programs(self) -> Vec<DegreeProgram> {
        DegreeProgram::ALL
            .into_iter()
            .filter(|p| p.family() == self)
            .collect()
    }

    /// The program offered by default for a student in this family
    #[must_use]
    pub const fn default_program(self) -> DegreeProgram {
        match self {
            Self::Bsc => DegreeProgram::BscGeneral,
            Self::Bcs => DegreeProgram::BcsGeneral,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bsc" | "a" => Ok(Self::Bsc),
            "bcs" | "b" => Ok(Self::Bcs),
            _ => Err(format!("Unknown degree family: '{s}' (expected bsc or bcs)")),
        }
    }
}

/// The six degree-program variants with distinct completion rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegreeProgram {
    /// BSc General Degree – completion
    BscGeneral,
    /// BSc Special Degree – selection into the special stream
    BscSpecialSelection,
    /// BSc Special Degree – completion
    BscSpecialCompletion,
    /// BCS General Degree – completion
    BcsGeneral,
    /// BCS Special Degree – selection into the special stream
    BcsSpecialSelection,
    /// BCS Special Degree – completion
    BcsSpecialCompletion,
}

impl DegreeProgram {
    /// Every program in presentation order
    pub const ALL: [Self; 6] = [
        Self::BscGeneral,
        Self::BscSpecialSelection,
        Self::BscSpecialCompletion,
        Self::BcsGeneral,
        Self::BcsSpecialSelection,
        Self::BcsSpecialCompletion,
    ];

    /// Stable identifier (e.g., "bcs-general")
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::BscGeneral => "bsc-general",
            Self::BscSpecialSelection => "bsc-special-selection",
            Self::BscSpecialCompletion => "bsc-special-completion",
            Self::BcsGeneral => "bcs-general",
            Self::BcsSpecialSelection => "bcs-special-selection",
            Self::BcsSpecialCompletion => "bcs-special-completion",
        }
    }

    /// Full display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BscGeneral => "BSc General Degree",
            Self::BscSpecialSelection => "BSc Special Degree – Selection",
            Self::BscSpecialCompletion => "BSc Special Degree – Completion",
            Self::BcsGeneral => "BCS General Degree",
            Self::BcsSpecialSelection => "BCS Special Degree – Selection",
            Self::BcsSpecialCompletion => "BCS Special Degree – Completion",
        }
    }

    /// Family the program belongs to
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::BscGeneral | Self::BscSpecialSelection | Self::BscSpecialCompletion => {
                Family::Bsc
            }
            Self::BcsGeneral | Self::BcsSpecialSelection | Self::BcsSpecialCompletion => {
                Family::Bcs
            }
        }
    }
}

impl fmt::Display for DegreeProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DegreeProgram {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| format!("Unknown degree program: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programs_split_evenly_between_families() {
        assert_eq!(
            Family::Bsc.programs(),
            vec![
                DegreeProgram::BscGeneral,
                DegreeProgram::BscSpecialSelection,
                DegreeProgram::BscSpecialCompletion
            ]
        );
        assert_eq!(Family::Bcs.programs().len(), 3);
        assert!(Family::Bcs
            .programs()
            .iter()
            .all(|p| p.family() == Family::Bcs));
    }

    #[test]
    fn test_program_id_round_trip() {
        for program in DegreeProgram::ALL {
            assert_eq!(program.id().parse::<DegreeProgram>(), Ok(program));
        }
        assert_eq!(
            "BCS_SPECIAL_COMPLETION".parse::<DegreeProgram>(),
            Ok(DegreeProgram::BcsSpecialCompletion)
        );
        assert!("msc-general".parse::<DegreeProgram>().is_err());
    }

    #[test]
    fn test_family_defaults() {
        assert_eq!(Family::Bsc.default_program(), DegreeProgram::BscGeneral);
        assert_eq!(Family::Bcs.default_program(), DegreeProgram::BcsGeneral);
        assert_eq!("BCS".parse::<Family>(), Ok(Family::Bcs));
    }
}
