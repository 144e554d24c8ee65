//! Repository contracts for saving and loading generator output.

use forge_core::{CharacterRecord, QuestRecord};

use super::error::Result;
use super::types::{DiceLogEntry, OracleLogEntry, SaveKind, SavedQuest, WildernessState};

/// Named save slots for characters and NPCs.
pub trait CharacterRepository: Send + Sync {
    /// Save a record under `slot`, replacing any previous save.
    fn save(&self, kind: SaveKind, slot: &str, record: &CharacterRecord) -> Result<()>;

    /// Load a record exactly as stored. Derived fields are not re-checked here.
    fn load(&self, kind: SaveKind, slot: &str) -> Result<Option<CharacterRecord>>;

    fn exists(&self, kind: SaveKind, slot: &str) -> bool;

    fn delete(&self, kind: SaveKind, slot: &str) -> Result<()>;

    /// Slot names in sorted order.
    fn list_slots(&self, kind: SaveKind) -> Result<Vec<String>>;
}

/// Bounded histories, each stored as one list, newest first, plus the quest
/// currently on the table.
///
/// Bounds are applied by the session; repositories store what they are given.
pub trait HistoryRepository: Send + Sync {
    /// The most recently rolled quest, saved to history or not.
    fn load_current_quest(&self) -> Result<Option<QuestRecord>>;
    fn save_current_quest(&self, quest: &QuestRecord) -> Result<()>;

    fn load_quests(&self) -> Result<Vec<SavedQuest>>;
    fn save_quests(&self, quests: &[SavedQuest]) -> Result<()>;

    fn load_oracle(&self) -> Result<Vec<OracleLogEntry>>;
    fn save_oracle(&self, entries: &[OracleLogEntry]) -> Result<()>;

    fn load_dice(&self) -> Result<Vec<DiceLogEntry>>;
    fn save_dice(&self, rolls: &[DiceLogEntry]) -> Result<()>;
}

/// The single wilderness state.
pub trait WildernessRepository: Send + Sync {
    /// `None` before the wilderness generator has ever run.
    fn load_wilderness(&self) -> Result<Option<WildernessState>>;
    fn save_wilderness(&self, state: &WildernessState) -> Result<()>;
}

/// Everything a [`crate::Session`] persists.
pub trait SaveStore: CharacterRepository + HistoryRepository + WildernessRepository {}

impl<T> SaveStore for T where T: CharacterRepository + HistoryRepository + WildernessRepository {}
