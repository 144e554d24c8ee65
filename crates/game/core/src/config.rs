/// Rule constants and tunable parameters.
///
/// The associated constants are fixed by the rule-book. The fields are
/// presentation-side bounds that a `config.toml` may override.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForgeConfig {
    /// Number of saved quests kept in history.
    pub quest_history_limit: usize,
    /// Number of oracle results kept in history.
    pub oracle_history_limit: usize,
    /// Number of dice rolls kept in history.
    pub dice_history_limit: usize,
    /// Season used when the wilderness generator runs for the first time.
    pub default_season: crate::Season,
    /// Terrain the party starts in on first run.
    pub default_terrain: crate::Terrain,
}

impl ForgeConfig {
    // ===== rule constants =====
    /// Attributes flagged primary at most.
    pub const MAX_PRIMARIES: usize = 2;
    /// Hit dice pre-rolled per pool; also the highest reachable level.
    pub const HIT_DICE_LEVELS: usize = 10;
    pub const MAX_LEVEL: u8 = Self::HIT_DICE_LEVELS as u8;
    /// Sides of the hit die used when Constitution is primary.
    pub const PRIMARY_HIT_DIE: u32 = 8;
    /// Sides of the hit die used otherwise.
    pub const SECONDARY_HIT_DIE: u32 = 6;
    /// Constitution modifier floor, applied to hit points only.
    pub const HP_MODIFIER_FLOOR: i32 = -3;
    /// First raw hit die at or below this value may be replaced.
    pub const TAKE_FOUR_THRESHOLD: u8 = 2;
    pub const TAKE_FOUR_VALUE: u8 = 4;
    /// Slot capacity before the Strength check bonus is added.
    pub const BASE_SLOTS: i32 = 10;
    pub const AMMUNITION_SLOTS: u32 = 1;
    pub const HELMET_SLOTS: u32 = 1;
    pub const SHIELD_SLOTS: u32 = 1;
    pub const SHIELD_AC_BONUS: i32 = 1;
    /// Starting gold is 2d6 times this.
    pub const GOLD_MULTIPLIER: u32 = 30;
    pub const RATIONS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_QUEST_HISTORY: usize = 10;
    pub const DEFAULT_ORACLE_HISTORY: usize = 5;
    pub const DEFAULT_DICE_HISTORY: usize = 10;

    pub fn new() -> Self {
        Self {
            quest_history_limit: Self::DEFAULT_QUEST_HISTORY,
            oracle_history_limit: Self::DEFAULT_ORACLE_HISTORY,
            dice_history_limit: Self::DEFAULT_DICE_HISTORY,
            default_season: crate::Season::Wet,
            default_terrain: crate::Terrain::Plains,
        }
    }
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self::new()
    }
}
