//! Character errors.
//!
//! Raised by the resolver and the record edits when an edit would break a
//! sheet invariant.

use crate::dice::DiceError;
use crate::error::{ErrorSeverity, ForgeError};
use crate::stats::Attribute;
use crate::tables::TableError;

// ============================================================================
// Resolver / Edit Errors
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    /// More primaries on the sheet than the cap allows.
    #[error("{count} primary attributes, at most 2 allowed")]
    TooManyPrimaries { count: usize },

    /// Toggling would add a third primary.
    #[error("cannot make {attribute} primary: two attributes are already primary")]
    PrimaryLimitReached { attribute: Attribute },

    /// Level-0 NPCs treat every attribute as secondary.
    #[error("a level 0 NPC cannot have primary attributes")]
    PrimariesLocked,

    #[error("level {level} is outside 0..={max}")]
    LevelOutOfRange { level: u8, max: u8 },

    /// NPC level follows the competence tier.
    #[error("NPC level {level} does not match competence level {expected}")]
    LevelFixedByCompetence { level: u8, expected: u8 },

    #[error("cannot swap {0} with itself")]
    SwapWithSelf(Attribute),

    #[error("occupation '{0}' is already on the sheet")]
    DuplicateOccupation(String),

    #[error("occupation slot {index} does not exist, the sheet has {count}")]
    OccupationIndex { index: usize, count: usize },

    #[error("take four is only offered at level 1 on a first hit die of 2 or less")]
    TakeFourUnavailable,

    #[error("only NPCs have a competence tier")]
    NotAnNpc,

    /// Attribute slots out of sheet order, usually a hand-edited save.
    #[error("attribute slots are out of order")]
    AttributeOrder,
}

impl ForgeError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AttributeOrder => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooManyPrimaries { .. } => "CHARACTER_TOO_MANY_PRIMARIES",
            Self::PrimaryLimitReached { .. } => "CHARACTER_PRIMARY_LIMIT_REACHED",
            Self::PrimariesLocked => "CHARACTER_PRIMARIES_LOCKED",
            Self::LevelOutOfRange { .. } => "CHARACTER_LEVEL_OUT_OF_RANGE",
            Self::LevelFixedByCompetence { .. } => "CHARACTER_LEVEL_FIXED_BY_COMPETENCE",
            Self::SwapWithSelf(_) => "CHARACTER_SWAP_WITH_SELF",
            Self::DuplicateOccupation(_) => "CHARACTER_DUPLICATE_OCCUPATION",
            Self::OccupationIndex { .. } => "CHARACTER_OCCUPATION_INDEX",
            Self::TakeFourUnavailable => "CHARACTER_TAKE_FOUR_UNAVAILABLE",
            Self::NotAnNpc => "CHARACTER_NOT_AN_NPC",
            Self::AttributeOrder => "CHARACTER_ATTRIBUTE_ORDER",
        }
    }
}

// ============================================================================
// Generation Errors
// ============================================================================

/// Failures while rolling a new record. Only a malformed catalog raises these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Dice(#[from] DiceError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error("catalog has no armour for the rolled tier {0}")]
    MissingArmour(crate::catalog::ArmourTier),
}

impl ForgeError for GenerateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Character(err) => err.severity(),
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Dice(err) => err.error_code(),
            Self::Table(err) => err.error_code(),
            Self::Character(err) => err.error_code(),
            Self::MissingArmour(_) => "GENERATE_MISSING_ARMOUR",
        }
    }
}
