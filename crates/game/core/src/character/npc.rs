//! NPC competence, morale, and wage.

/// Result of the NPC competence roll.
///
/// One roll fixes label, level, and morale together; the wage follows from
/// the level.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompetenceTier {
    #[strum(to_string = "A liability", serialize = "liability")]
    Liability,
    #[strum(to_string = "Average", serialize = "average")]
    Average,
    #[strum(to_string = "Competent", serialize = "competent")]
    Competent,
    #[strum(to_string = "Very capable", serialize = "very-capable")]
    VeryCapable,
    #[strum(to_string = "Exceptional", serialize = "exceptional")]
    Exceptional,
}

impl CompetenceTier {
    pub const fn level(self) -> u8 {
        match self {
            Self::Liability => 0,
            Self::Average | Self::Competent => 1,
            Self::VeryCapable => 2,
            Self::Exceptional => 3,
        }
    }

    pub const fn morale(self) -> u8 {
        match self {
            Self::Liability => 5,
            Self::Average => 6,
            Self::Competent => 7,
            Self::VeryCapable => 8,
            Self::Exceptional => 9,
        }
    }

    pub const fn wage(self) -> &'static str {
        wage_for_level(self.level())
    }
}

/// Daily hire rate by NPC level.
pub const fn wage_for_level(level: u8) -> &'static str {
    match level {
        0 => "1 sp per day",
        1 => "5 sp per day",
        2 => "1 gp per day",
        _ => "2 gp per day",
    }
}

/// Sheet values that follow from the competence tier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcStanding {
    pub competence: String,
    pub morale: u8,
    pub wage: String,
}

impl NpcStanding {
    pub fn from_tier(tier: CompetenceTier) -> Self {
        Self {
            competence: tier.to_string(),
            morale: tier.morale(),
            wage: tier.wage().to_string(),
        }
    }
}
