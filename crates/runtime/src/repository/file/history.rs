use forge_core::QuestRecord;

use super::FileRepository;
use crate::repository::{DiceLogEntry, HistoryRepository, OracleLogEntry, Result, SavedQuest};

impl HistoryRepository for FileRepository {
    fn load_current_quest(&self) -> Result<Option<QuestRecord>> {
        self.read_json(&self.base_dir.join(Self::CURRENT_QUEST_FILE))
    }

    fn save_current_quest(&self, quest: &QuestRecord) -> Result<()> {
        self.write_json(&self.base_dir.join(Self::CURRENT_QUEST_FILE), quest)
    }

    fn load_quests(&self) -> Result<Vec<SavedQuest>> {
        let path = self.base_dir.join(Self::QUESTS_FILE);
        Ok(self.read_json(&path)?.unwrap_or_default())
    }

    fn save_quests(&self, quests: &[SavedQuest]) -> Result<()> {
        self.write_json(&self.base_dir.join(Self::QUESTS_FILE), quests)
    }

    fn load_oracle(&self) -> Result<Vec<OracleLogEntry>> {
        let path = self.base_dir.join(Self::ORACLE_FILE);
        Ok(self.read_json(&path)?.unwrap_or_default())
    }

    fn save_oracle(&self, entries: &[OracleLogEntry]) -> Result<()> {
        self.write_json(&self.base_dir.join(Self::ORACLE_FILE), entries)
    }

    fn load_dice(&self) -> Result<Vec<DiceLogEntry>> {
        let path = self.base_dir.join(Self::DICE_FILE);
        Ok(self.read_json(&path)?.unwrap_or_default())
    }

    fn save_dice(&self, rolls: &[DiceLogEntry]) -> Result<()> {
        self.write_json(&self.base_dir.join(Self::DICE_FILE), rolls)
    }
}
