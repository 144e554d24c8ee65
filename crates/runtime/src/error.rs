//! Errors raised by [`crate::Session`].

use thiserror::Error;

use forge_core::{
    CharacterError, DiceError, ForgeError, GenerateError, QuestError, TableError,
    WildernessError,
};

use crate::repository::{RepositoryError, SaveKind};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no saved {kind:?} in slot '{slot}'")]
    SlotNotFound { kind: SaveKind, slot: String },

    #[error("no quest has been rolled yet")]
    NoCurrentQuest,

    #[error("no inspiration in the oracle history to re-roll")]
    NoInspiration,

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error(transparent)]
    Quest(#[from] QuestError),

    #[error(transparent)]
    Wilderness(#[from] WildernessError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Dice(#[from] DiceError),
}

impl SessionError {
    /// Whether the user can fix this by changing what they asked for.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::SlotNotFound { .. } | Self::NoCurrentQuest | Self::NoInspiration => true,
            Self::Repository(err) => matches!(err, RepositoryError::InvalidSlot(_)),
            Self::Generate(err) => !err.is_internal(),
            Self::Character(err) => !err.is_internal(),
            Self::Quest(err) => !err.is_internal(),
            Self::Wilderness(err) => !err.is_internal(),
            Self::Table(err) => !err.is_internal(),
            Self::Dice(err) => !err.is_internal(),
        }
    }

    /// Stable code for logs; core errors keep their own code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(_) => "SESSION_REPOSITORY",
            Self::SlotNotFound { .. } => "SESSION_SLOT_NOT_FOUND",
            Self::NoCurrentQuest => "SESSION_NO_CURRENT_QUEST",
            Self::NoInspiration => "SESSION_NO_INSPIRATION",
            Self::Generate(err) => err.error_code(),
            Self::Character(err) => err.error_code(),
            Self::Quest(err) => err.error_code(),
            Self::Wilderness(err) => err.error_code(),
            Self::Table(err) => err.error_code(),
            Self::Dice(err) => err.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
