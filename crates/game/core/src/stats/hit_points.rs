//! Hit points from pre-rolled hit dice.
//!
//! Both pools are rolled once at creation, one d8 and one d6 per level up to
//! the level cap. Levelling up or down only changes how many entries are
//! read, so earlier levels never re-roll.

use crate::config::ForgeConfig;

const LEVELS: usize = ForgeConfig::HIT_DICE_LEVELS;

/// Raw hit dice, one entry per level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitDicePools {
    /// d8 rolls, read when Constitution is primary.
    pub primary: [u8; LEVELS],
    /// d6 rolls.
    pub secondary: [u8; LEVELS],
}

impl HitDicePools {
    /// The pool consulted for the take-four rule.
    pub const fn relevant(&self, constitution_primary: bool) -> &[u8; LEVELS] {
        if constitution_primary {
            &self.primary
        } else {
            &self.secondary
        }
    }

    pub fn relevant_mut(&mut self, constitution_primary: bool) -> &mut [u8; LEVELS] {
        if constitution_primary {
            &mut self.primary
        } else {
            &mut self.secondary
        }
    }
}

/// Die size shown on the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitDie {
    #[strum(to_string = "d8")]
    D8,
    #[strum(to_string = "d6")]
    D6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    pub max: i32,
    pub hit_die: HitDie,
    /// Level 1 with a first relevant die of 2 or less.
    pub take_four_available: bool,
}

impl HitPoints {
    /// Hit points at `level`.
    ///
    /// Each of the first `level` entries contributes
    /// `max(1, die + max(con modifier, -3))`. With Constitution primary the
    /// better of the two pools wins; otherwise only the d6 pool counts.
    pub fn compute(
        pools: &HitDicePools,
        level: u8,
        constitution_primary: bool,
        constitution_modifier: i32,
    ) -> Self {
        let modifier = constitution_modifier.max(ForgeConfig::HP_MODIFIER_FLOOR);
        let secondary = pool_total(&pools.secondary, level, modifier);
        let max = if constitution_primary {
            pool_total(&pools.primary, level, modifier).max(secondary)
        } else {
            secondary
        };

        Self {
            max,
            hit_die: if constitution_primary {
                HitDie::D8
            } else {
                HitDie::D6
            },
            take_four_available: take_four_applies(pools, level, constitution_primary),
        }
    }
}

/// Sum of the first `level` entries, each floored at 1 after the modifier.
pub fn pool_total(pool: &[u8; LEVELS], level: u8, modifier: i32) -> i32 {
    pool.iter()
        .take(level as usize)
        .map(|&die| (die as i32 + modifier).max(1))
        .sum()
}

fn take_four_applies(pools: &HitDicePools, level: u8, constitution_primary: bool) -> bool {
    level == 1 && pools.relevant(constitution_primary)[0] <= ForgeConfig::TAKE_FOUR_THRESHOLD
}
