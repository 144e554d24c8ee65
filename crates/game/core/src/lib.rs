//! Deterministic FORGE rules shared by the runtime and the CLI.
//!
//! `forge-core` turns dice rolls and a static [`Catalog`] into character, NPC,
//! quest, wilderness, and oracle records, and recomputes every derived field
//! of a character from its canonical sheet. Nothing here performs I/O; the
//! dice source and the catalog are always passed in.
pub mod catalog;
pub mod character;
pub mod config;
pub mod dice;
pub mod error;
pub mod history;
pub mod oracle;
pub mod quest;
pub mod stats;
pub mod tables;
pub mod wilderness;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::{
    ArmourDef, ArmourTier, Catalog, CatalogError, InventoryItem, ONE_D6, Protection, TWO_D6,
    WeaponDef,
};
pub use character::{
    AttributeLine, CharacterError, CharacterKind, CharacterRecord, CharacterSheet, CompetenceTier,
    DerivedSheet, Flavor, FlavorField, GenerateError, NpcProfile, NpcStanding, derive_sheet,
    recompute_derived, roll_new_character, roll_new_npc, wage_for_level,
};
pub use config::ForgeConfig;
pub use dice::{
    COMMON_DICE, DiceError, DiceExpr, DiceExprError, DiceRoll, DiceSource, PcgRng, ScriptedDice,
    pick_distinct_pair, pick_one, sum_dice, uniform_die,
};
pub use error::{ErrorSeverity, ForgeError};
pub use history::History;
pub use oracle::{
    Inspiration, InspirationPart, Likelihood, OracleAnswer, OracleEntry, OracleTables, RandomEvent,
    ask_oracle, reroll_inspiration, roll_inspiration, roll_random_event,
};
pub use quest::{
    Direction, Location, QuestDetail, QuestError, QuestField, QuestRecord, QuestTables, QuestType,
    Reward, RewardEntry, attach_npc, reroll_quest_field, roll_quest, set_quest_type,
};
pub use stats::{
    ArmourClass, Attribute, AttributeSet, HitDicePools, HitDie, HitPoints, KeywordRule, SlotUsage,
    check_bonus, modifier,
};
pub use tables::{Band, RangeTable, TableError, weighted_range_lookup};
pub use wilderness::{
    Season, Terrain, TerrainResult, TerrainTables, WeatherResult, WeatherTables, WildernessError,
    WildernessRecord, WildernessTables, roll_next_terrain, roll_weather,
};
