//! Attributes - the canonical layer of the stat system.
//!
//! Scores and primary flags are the Single Source of Truth (SSOT). Modifiers
//! and check bonuses are NOT stored; they are recomputed from the score, the
//! flag, and the character level whenever the sheet is resolved.

use crate::config::ForgeConfig;

/// The six attributes, in sheet order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    #[strum(to_string = "Strength", serialize = "str")]
    Strength,
    #[strum(to_string = "Dexterity", serialize = "dex")]
    Dexterity,
    #[strum(to_string = "Constitution", serialize = "con")]
    Constitution,
    #[strum(to_string = "Intelligence", serialize = "int")]
    Intelligence,
    #[strum(to_string = "Wisdom", serialize = "wis")]
    Wisdom,
    #[strum(to_string = "Charisma", serialize = "cha")]
    Charisma,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Position on the sheet.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

/// Ability modifier for a raw score.
///
/// A widened-band step table, not `(score - 10) / 2`:
///
/// | score | modifier |
/// |-------|----------|
/// | ≤1    | -4 |
/// | 2–3   | -3 |
/// | 4–5   | -2 |
/// | 6–8   | -1 |
/// | 9–12  |  0 |
/// | 13–15 | +1 |
/// | 16–17 | +2 |
/// | 18+   | +3 |
pub const fn modifier(score: i32) -> i32 {
    match score {
        i32::MIN..=1 => -4,
        2..=3 => -3,
        4..=5 => -2,
        6..=8 => -1,
        9..=12 => 0,
        13..=15 => 1,
        16..=17 => 2,
        _ => 3,
    }
}

/// `modifier + level` for a primary attribute, `modifier + level / 2` otherwise.
pub const fn check_bonus(modifier: i32, primary: bool, level: u8) -> i32 {
    let level = level as i32;
    if primary {
        modifier + level
    } else {
        modifier + level / 2
    }
}

/// Canonical state of one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeScore {
    pub attribute: Attribute,
    pub score: i32,
    pub primary: bool,
}

/// All six attribute scores, one per slot, in sheet order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttributeSet {
    scores: [AttributeScore; 6],
}

impl AttributeSet {
    /// Scores in sheet order, all secondary.
    pub fn from_scores(scores: [i32; 6]) -> Self {
        Self {
            scores: Attribute::ALL.map(|attribute| AttributeScore {
                attribute,
                score: scores[attribute.index()],
                primary: false,
            }),
        }
    }

    pub fn get(&self, attribute: Attribute) -> &AttributeScore {
        &self.scores[attribute.index()]
    }

    pub fn score(&self, attribute: Attribute) -> i32 {
        self.get(attribute).score
    }

    pub fn is_primary(&self, attribute: Attribute) -> bool {
        self.get(attribute).primary
    }

    pub fn set_primary(&mut self, attribute: Attribute, primary: bool) {
        self.scores[attribute.index()].primary = primary;
    }

    pub fn set_score(&mut self, attribute: Attribute, score: i32) {
        self.scores[attribute.index()].score = score;
    }

    pub fn clear_primaries(&mut self) {
        for slot in &mut self.scores {
            slot.primary = false;
        }
    }

    pub fn primary_count(&self) -> usize {
        self.scores.iter().filter(|slot| slot.primary).count()
    }

    pub fn primaries(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.scores
            .iter()
            .filter(|slot| slot.primary)
            .map(|slot| slot.attribute)
    }

    /// Exchange two scores. Primary flags stay with their slots.
    pub fn swap_scores(&mut self, a: Attribute, b: Attribute) {
        let score_a = self.score(a);
        let score_b = self.score(b);
        self.set_score(a, score_b);
        self.set_score(b, score_a);
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeScore> {
        self.scores.iter()
    }

    /// True when every slot holds the attribute of its sheet position.
    pub fn is_ordered(&self) -> bool {
        self.scores
            .iter()
            .zip(Attribute::ALL)
            .all(|(slot, attribute)| slot.attribute == attribute)
    }

    /// True when no more than the allowed number of attributes are primary.
    pub fn within_primary_cap(&self) -> bool {
        self.primary_count() <= ForgeConfig::MAX_PRIMARIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn modifier_golden_table() {
        let expected = [
            (1, -4),
            (2, -3),
            (3, -3),
            (4, -2),
            (5, -2),
            (6, -1),
            (7, -1),
            (8, -1),
            (9, 0),
            (10, 0),
            (11, 0),
            (12, 0),
            (13, 1),
            (14, 1),
            (15, 1),
            (16, 2),
            (17, 2),
            (18, 3),
        ];
        for (score, modifier_value) in expected {
            assert_eq!(modifier(score), modifier_value, "score {score}");
        }
    }

    #[test]
    fn modifier_is_not_linear() {
        // (score - 10) / 2 would give +1 here
        assert_eq!(modifier(12), 0);
        assert_eq!(modifier(0), -4);
        assert_eq!(modifier(25), 3);
    }

    #[test]
    fn check_bonus_shape() {
        for level in 0..=10u8 {
            for score in 1..=18 {
                let m = modifier(score);
                assert_eq!(check_bonus(m, true, level), m + level as i32);
                assert_eq!(check_bonus(m, false, level), m + (level / 2) as i32);
            }
        }
        assert_eq!(check_bonus(0, true, 1), 1);
        assert_eq!(check_bonus(0, false, 1), 0);
        assert_eq!(check_bonus(0, true, 3), 3);
        assert_eq!(check_bonus(0, false, 3), 1);
    }

    #[test]
    fn swap_keeps_primary_on_slot() {
        let mut set = AttributeSet::from_scores([15, 8, 10, 10, 10, 10]);
        set.set_primary(Attribute::Strength, true);
        set.swap_scores(Attribute::Strength, Attribute::Dexterity);
        assert_eq!(set.score(Attribute::Strength), 8);
        assert_eq!(set.score(Attribute::Dexterity), 15);
        assert!(set.is_primary(Attribute::Strength));
        assert!(!set.is_primary(Attribute::Dexterity));
    }

    #[test]
    fn parses_names_and_abbreviations() {
        assert_eq!("strength".parse::<Attribute>().unwrap(), Attribute::Strength);
        assert_eq!("DEX".parse::<Attribute>().unwrap(), Attribute::Dexterity);
        assert_eq!(Attribute::Wisdom.to_string(), "Wisdom");
        assert!("luck".parse::<Attribute>().is_err());
    }

    #[test]
    fn enum_order_matches_sheet_order() {
        let iterated: Vec<Attribute> = Attribute::iter().collect();
        assert_eq!(iterated, Attribute::ALL.to_vec());
        assert!(AttributeSet::from_scores([10; 6]).is_ordered());
    }
}
