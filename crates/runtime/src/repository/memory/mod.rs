//! In-memory repository for tests and throwaway sessions.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use forge_core::{CharacterRecord, QuestRecord};

use crate::repository::{
    CharacterRepository, DiceLogEntry, HistoryRepository, OracleLogEntry, RepositoryError, Result,
    SaveKind, SavedQuest, WildernessRepository, WildernessState, validate_slot,
};

#[derive(Default)]
struct Histories {
    current_quest: Option<QuestRecord>,
    quests: Vec<SavedQuest>,
    oracle: Vec<OracleLogEntry>,
    dice: Vec<DiceLogEntry>,
}

/// Keeps everything behind `RwLock`s; nothing touches the disk.
#[derive(Default)]
pub struct InMemoryRepository {
    characters: RwLock<HashMap<SaveKind, BTreeMap<String, CharacterRecord>>>,
    histories: RwLock<Histories>,
    wilderness: RwLock<Option<WildernessState>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterRepository for InMemoryRepository {
    fn save(&self, kind: SaveKind, slot: &str, record: &CharacterRecord) -> Result<()> {
        validate_slot(slot)?;
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters
            .entry(kind)
            .or_default()
            .insert(slot.to_string(), record.clone());
        Ok(())
    }

    fn load(&self, kind: SaveKind, slot: &str) -> Result<Option<CharacterRecord>> {
        validate_slot(slot)?;
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.get(&kind).and_then(|slots| slots.get(slot)).cloned())
    }

    fn exists(&self, kind: SaveKind, slot: &str) -> bool {
        self.characters
            .read()
            .map(|characters| characters.get(&kind).is_some_and(|slots| slots.contains_key(slot)))
            .unwrap_or(false)
    }

    fn delete(&self, kind: SaveKind, slot: &str) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if let Some(slots) = characters.get_mut(&kind) {
            slots.remove(slot);
        }
        Ok(())
    }

    fn list_slots(&self, kind: SaveKind) -> Result<Vec<String>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters
            .get(&kind)
            .map(|slots| slots.keys().cloned().collect())
            .unwrap_or_default())
    }
}

impl HistoryRepository for InMemoryRepository {
    fn load_current_quest(&self) -> Result<Option<QuestRecord>> {
        let histories = self.histories.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(histories.current_quest.clone())
    }

    fn save_current_quest(&self, quest: &QuestRecord) -> Result<()> {
        let mut histories = self.histories.write().map_err(|_| RepositoryError::LockPoisoned)?;
        histories.current_quest = Some(quest.clone());
        Ok(())
    }

    fn load_quests(&self) -> Result<Vec<SavedQuest>> {
        let histories = self.histories.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(histories.quests.clone())
    }

    fn save_quests(&self, quests: &[SavedQuest]) -> Result<()> {
        let mut histories = self.histories.write().map_err(|_| RepositoryError::LockPoisoned)?;
        histories.quests = quests.to_vec();
        Ok(())
    }

    fn load_oracle(&self) -> Result<Vec<OracleLogEntry>> {
        let histories = self.histories.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(histories.oracle.clone())
    }

    fn save_oracle(&self, entries: &[OracleLogEntry]) -> Result<()> {
        let mut histories = self.histories.write().map_err(|_| RepositoryError::LockPoisoned)?;
        histories.oracle = entries.to_vec();
        Ok(())
    }

    fn load_dice(&self) -> Result<Vec<DiceLogEntry>> {
        let histories = self.histories.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(histories.dice.clone())
    }

    fn save_dice(&self, rolls: &[DiceLogEntry]) -> Result<()> {
        let mut histories = self.histories.write().map_err(|_| RepositoryError::LockPoisoned)?;
        histories.dice = rolls.to_vec();
        Ok(())
    }
}

impl WildernessRepository for InMemoryRepository {
    fn load_wilderness(&self) -> Result<Option<WildernessState>> {
        let wilderness = self.wilderness.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(wilderness.clone())
    }

    fn save_wilderness(&self, state: &WildernessState) -> Result<()> {
        let mut wilderness = self.wilderness.write().map_err(|_| RepositoryError::LockPoisoned)?;
        *wilderness = Some(state.clone());
        Ok(())
    }
}
