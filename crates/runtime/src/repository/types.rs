//! Records persisted by the repositories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forge_core::{DiceRoll, OracleEntry, QuestRecord, WildernessRecord};

/// Which save folder a character record belongs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveKind {
    Character,
    Npc,
}

impl SaveKind {
    /// Directory name under the save root.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Npc => "npcs",
        }
    }
}

/// A history entry stamped with the moment it was recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stamped<T> {
    pub at: DateTime<Utc>,
    pub entry: T,
}

impl<T> Stamped<T> {
    pub fn now(entry: T) -> Self {
        Self {
            at: Utc::now(),
            entry,
        }
    }
}

/// Quest history entry. Stored in `quests.json`.
pub type SavedQuest = Stamped<QuestRecord>;

/// Oracle history entry. Stored in `oracle.json`.
pub type OracleLogEntry = Stamped<OracleEntry>;

/// Dice history entry. Stored in `dice.json`.
pub type DiceLogEntry = Stamped<DiceRoll>;

/// Persisted wilderness generator state. Stored in `wilderness.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildernessState {
    /// Set once the first visit has auto-rolled weather and the next hex.
    pub first_run_complete: bool,
    pub record: WildernessRecord,
}
