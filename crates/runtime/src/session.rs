//! One generator session: content, dice, histories, and persistence.

use forge_content::Content;
use forge_core::{
    CharacterRecord, CompetenceTier, DiceExpr, DiceRoll, DiceSource, History, Inspiration,
    InspirationPart, Likelihood, OracleAnswer, OracleEntry, PcgRng, QuestField, QuestRecord,
    QuestType, RandomEvent, Season, Terrain, WildernessRecord, ask_oracle, attach_npc,
    recompute_derived, reroll_inspiration, reroll_quest_field, roll_inspiration,
    roll_new_character, roll_new_npc, roll_next_terrain, roll_quest, roll_random_event,
    roll_weather, set_quest_type,
};

use crate::error::{Result, SessionError};
use crate::navigation::{NavigationPayload, Navigator, Screen};
use crate::repository::{
    DiceLogEntry, OracleLogEntry, SaveKind, SaveStore, SavedQuest, Stamped, WildernessState,
};

/// Dice seeded from `seed`, or from entropy when none is given.
///
/// The seed is logged so an unseeded run can be replayed.
pub fn seeded_dice(seed: Option<u64>) -> PcgRng {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "dice seeded");
    PcgRng::new(seed)
}

/// Owns everything a generator command touches.
///
/// Every roll goes through the session's single dice source. Every history
/// push is written back to the store before the call returns.
pub struct Session<S: SaveStore> {
    content: Content,
    store: S,
    dice: Box<dyn DiceSource>,
    quests: History<SavedQuest>,
    oracle: History<OracleLogEntry>,
    rolls: History<DiceLogEntry>,
    navigator: Navigator,
}

impl<S: SaveStore> Session<S> {
    /// Open a session, loading stored histories trimmed to the configured bounds.
    pub fn open(content: Content, store: S, dice: Box<dyn DiceSource>) -> Result<Self> {
        let config = &content.config;
        let quests = History::from_entries(store.load_quests()?, config.quest_history_limit);
        let oracle = History::from_entries(store.load_oracle()?, config.oracle_history_limit);
        let rolls = History::from_entries(store.load_dice()?, config.dice_history_limit);
        tracing::debug!(
            quests = quests.len(),
            oracle = oracle.len(),
            dice = rolls.len(),
            "session opened"
        );
        Ok(Self {
            content,
            store,
            dice,
            quests,
            oracle,
            rolls,
            navigator: Navigator::default(),
        })
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    // ===== characters =====

    /// Roll a player character, optionally raised to `level`.
    pub fn roll_character(&mut self, level: Option<u8>) -> Result<CharacterRecord> {
        let mut record = roll_new_character(&self.content.catalog, &mut *self.dice)?;
        if let Some(level) = level {
            record = record.set_level(level)?;
        }
        tracing::debug!(name = %record.sheet.name, level = record.sheet.level, "rolled character");
        Ok(record)
    }

    /// Roll an NPC, optionally overriding the competence roll.
    pub fn roll_npc(&mut self, competence: Option<CompetenceTier>) -> Result<CharacterRecord> {
        let mut record = roll_new_npc(&self.content.catalog, &mut *self.dice)?;
        if let Some(tier) = competence {
            record = record.set_competence(tier)?;
        }
        tracing::debug!(name = %record.sheet.name, level = record.sheet.level, "rolled NPC");
        Ok(record)
    }

    /// Save under `slot` in the folder matching the record's kind.
    pub fn save_character(&self, slot: &str, record: &CharacterRecord) -> Result<SaveKind> {
        let kind = if record.is_npc() {
            SaveKind::Npc
        } else {
            SaveKind::Character
        };
        self.store.save(kind, slot, record)?;
        tracing::info!(slot, ?kind, "saved");
        Ok(kind)
    }

    /// Load a save and recompute its derived block.
    ///
    /// A stored derived block that disagrees with the canonical fields is
    /// logged and replaced; the canonical fields always win.
    pub fn load_character(&self, kind: SaveKind, slot: &str) -> Result<CharacterRecord> {
        let stored = self
            .store
            .load(kind, slot)?
            .ok_or_else(|| SessionError::SlotNotFound {
                kind,
                slot: slot.to_string(),
            })?;
        let record = recompute_derived(&stored)?;
        if record.derived != stored.derived {
            tracing::warn!(slot, ?kind, "stored derived fields were stale; using recomputed values");
        }
        Ok(record)
    }

    pub fn list_slots(&self, kind: SaveKind) -> Result<Vec<String>> {
        Ok(self.store.list_slots(kind)?)
    }

    // ===== quests =====

    pub fn current_quest(&self) -> Result<Option<QuestRecord>> {
        Ok(self.store.load_current_quest()?)
    }

    /// Roll a fresh quest and make it the current one.
    ///
    /// A Character Based quest comes back with a freshly rolled NPC attached.
    pub fn roll_quest(&mut self) -> Result<QuestRecord> {
        let quest = roll_quest(&self.content.tables.quest, &mut *self.dice)?;
        let quest = self.store_quest(quest)?;
        tracing::debug!(quest_type = %quest.quest_type(), "rolled quest");
        Ok(quest)
    }

    /// Re-roll one field. A type change that lands on Character Based
    /// attaches a new NPC; other fields keep the attached one.
    pub fn reroll_quest(&mut self, field: QuestField) -> Result<QuestRecord> {
        let current = self.require_current_quest()?;
        let quest = reroll_quest_field(&current, field, &self.content.tables.quest, &mut *self.dice)?;
        let quest = self.store_quest(quest)?;
        tracing::debug!(%field, "rerolled quest field");
        Ok(quest)
    }

    pub fn set_quest_type(&mut self, quest_type: QuestType) -> Result<QuestRecord> {
        let current = self.require_current_quest()?;
        let quest = set_quest_type(&current, quest_type, &self.content.tables.quest, &mut *self.dice)?;
        self.store_quest(quest)
    }

    /// Replace the NPC of the current Character Based quest with a new roll.
    pub fn reroll_quest_npc(&mut self) -> Result<QuestRecord> {
        let current = self.require_current_quest()?;
        if current.quest_type() != QuestType::CharacterBased {
            return Err(forge_core::QuestError::NpcNotApplicable(current.quest_type()).into());
        }
        let npc = self.roll_npc(None)?;
        let quest = attach_npc(&current, npc)?;
        self.store.save_current_quest(&quest)?;
        Ok(quest)
    }

    /// Attach an NPC to a Character Based quest that lacks one, then make the
    /// quest current.
    fn store_quest(&mut self, quest: QuestRecord) -> Result<QuestRecord> {
        let quest = if quest.quest_type() == QuestType::CharacterBased && quest.npc.is_none() {
            let npc = self.roll_npc(None)?;
            attach_npc(&quest, npc)?
        } else {
            quest
        };
        self.store.save_current_quest(&quest)?;
        Ok(quest)
    }

    /// Push the current quest onto the quest history.
    pub fn save_current_quest(&mut self) -> Result<SavedQuest> {
        let saved = Stamped::now(self.require_current_quest()?);
        self.quests.push(saved.clone());
        self.store.save_quests(&collect(&self.quests))?;
        tracing::info!(kept = self.quests.len(), "quest saved to history");
        Ok(saved)
    }

    pub fn quest_history(&self) -> &History<SavedQuest> {
        &self.quests
    }

    /// Open the NPC screen with the current quest's NPC.
    ///
    /// A Character Based quest stored without one, as in a hand-edited
    /// save, gets one here.
    pub fn open_quest_npc(&mut self) -> Result<CharacterRecord> {
        let current = self.require_current_quest()?;
        if current.quest_type() != QuestType::CharacterBased {
            return Err(forge_core::QuestError::NpcNotApplicable(current.quest_type()).into());
        }
        let npc = match &current.npc {
            Some(npc) => npc.clone(),
            None => {
                let npc = self.roll_npc(None)?;
                self.store.save_current_quest(&attach_npc(&current, npc.clone())?)?;
                npc
            }
        };
        self.navigator.navigate_with(NavigationPayload::QuestNpc(npc.clone()));
        Ok(npc)
    }

    /// The NPC handed over from a quest, if the NPC screen was opened with one.
    pub fn take_handed_npc(&mut self) -> Option<CharacterRecord> {
        match self.navigator.take_payload(Screen::Npc)? {
            NavigationPayload::QuestNpc(npc) => Some(npc),
        }
    }

    fn require_current_quest(&self) -> Result<QuestRecord> {
        self.store
            .load_current_quest()?
            .ok_or(SessionError::NoCurrentQuest)
    }

    // ===== wilderness =====

    /// The stored wilderness state.
    ///
    /// On the very first visit weather and the next hex are rolled for the
    /// configured default season and terrain, and the result is saved.
    pub fn wilderness(&mut self) -> Result<WildernessState> {
        if let Some(state) = self.store.load_wilderness()?
            && state.first_run_complete
        {
            return Ok(state);
        }

        let config = &self.content.config;
        let record = WildernessRecord::new(config.default_season, config.default_terrain);
        let tables = &self.content.tables.wilderness;
        let weather = roll_weather(tables, record.season, &mut *self.dice)?;
        let next_hex = roll_next_terrain(tables, record.current, &mut *self.dice)?;
        let state = WildernessState {
            first_run_complete: true,
            record: record.with_weather(weather).with_next_hex(next_hex),
        };
        self.store.save_wilderness(&state)?;
        tracing::info!(season = %state.record.season, terrain = %state.record.current, "wilderness initialised");
        Ok(state)
    }

    pub fn set_season(&mut self, season: Season) -> Result<WildernessState> {
        self.update_wilderness(|record, _, _| Ok(record.with_season(season)))
    }

    pub fn set_terrain(&mut self, terrain: Terrain) -> Result<WildernessState> {
        self.update_wilderness(|record, _, _| Ok(record.with_terrain(terrain)))
    }

    pub fn roll_weather(&mut self) -> Result<WildernessState> {
        self.update_wilderness(|record, tables, dice| {
            let weather = roll_weather(tables, record.season, dice)?;
            Ok(record.with_weather(weather))
        })
    }

    pub fn roll_next_hex(&mut self) -> Result<WildernessState> {
        self.update_wilderness(|record, tables, dice| {
            let next = roll_next_terrain(tables, record.current, dice)?;
            Ok(record.with_next_hex(next))
        })
    }

    pub fn move_to_next_hex(&mut self) -> Result<WildernessState> {
        self.update_wilderness(|record, _, _| Ok(record.move_to_next_hex()?))
    }

    fn update_wilderness<F>(&mut self, apply: F) -> Result<WildernessState>
    where
        F: FnOnce(
            &WildernessRecord,
            &forge_core::WildernessTables,
            &mut dyn DiceSource,
        ) -> Result<WildernessRecord>,
    {
        let state = self.wilderness()?;
        let record = apply(&state.record, &self.content.tables.wilderness, &mut *self.dice)?;
        let state = WildernessState { record, ..state };
        self.store.save_wilderness(&state)?;
        Ok(state)
    }

    // ===== oracle =====

    pub fn ask_oracle(&mut self, likelihood: Likelihood) -> Result<OracleAnswer> {
        let answer = ask_oracle(likelihood, &mut *self.dice);
        self.push_oracle(OracleEntry::Answer(answer.clone()))?;
        Ok(answer)
    }

    pub fn random_event(&mut self) -> Result<RandomEvent> {
        let event = roll_random_event(&self.content.tables.oracle, &mut *self.dice)?;
        self.push_oracle(OracleEntry::Event(event.clone()))?;
        Ok(event)
    }

    pub fn inspiration(&mut self) -> Result<Inspiration> {
        let inspiration = roll_inspiration(&self.content.tables.oracle, &mut *self.dice)?;
        self.push_oracle(OracleEntry::Inspiration(inspiration.clone()))?;
        Ok(inspiration)
    }

    /// Re-roll the verb or noun of the newest inspiration in the history.
    ///
    /// The result is pushed as a new entry; the earlier pair stays listed.
    pub fn reroll_inspiration(&mut self, part: InspirationPart) -> Result<Inspiration> {
        let current = self
            .oracle
            .iter()
            .find_map(|logged| match &logged.entry {
                OracleEntry::Inspiration(inspiration) => Some(inspiration.clone()),
                _ => None,
            })
            .ok_or(SessionError::NoInspiration)?;
        let inspiration =
            reroll_inspiration(&self.content.tables.oracle, &current, part, &mut *self.dice)?;
        self.push_oracle(OracleEntry::Inspiration(inspiration.clone()))?;
        Ok(inspiration)
    }

    pub fn oracle_history(&self) -> &History<OracleLogEntry> {
        &self.oracle
    }

    pub fn clear_oracle_history(&mut self) -> Result<()> {
        self.oracle.clear();
        self.store.save_oracle(&[])?;
        Ok(())
    }

    fn push_oracle(&mut self, entry: OracleEntry) -> Result<()> {
        tracing::debug!(summary = %entry.summary(), "oracle");
        self.oracle.push(Stamped::now(entry));
        self.store.save_oracle(&collect(&self.oracle))?;
        Ok(())
    }

    // ===== dice =====

    /// Roll each expression in order, recording each as its own history entry.
    pub fn roll_dice(&mut self, exprs: &[DiceExpr]) -> Result<Vec<DiceRoll>> {
        let rolls: Vec<DiceRoll> = exprs.iter().map(|expr| expr.roll(&mut *self.dice)).collect();
        for roll in &rolls {
            self.rolls.push(Stamped::now(roll.clone()));
        }
        self.store.save_dice(&collect(&self.rolls))?;
        Ok(rolls)
    }

    pub fn dice_history(&self) -> &History<DiceLogEntry> {
        &self.rolls
    }

    pub fn clear_dice_history(&mut self) -> Result<()> {
        self.rolls.clear();
        self.store.save_dice(&[])?;
        Ok(())
    }
}

fn collect<T: Clone>(history: &History<T>) -> Vec<T> {
    history.iter().cloned().collect()
}
