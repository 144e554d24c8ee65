//! Pure record edits.
//!
//! Every edit clones the canonical sheet, changes one field, and resolves the
//! result. The input record is never touched, so a rejected edit leaves the
//! caller holding the record it started with.

use crate::catalog::{ArmourDef, WeaponDef};
use crate::config::ForgeConfig;
use crate::stats::Attribute;

use super::{CharacterError, CharacterKind, CharacterRecord, CharacterSheet, CompetenceTier};

/// Free-text flavor slots on the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlavorField {
    Appearance,
    Detail,
    Clothing,
    Quirk,
}

impl CharacterRecord {
    fn edit<F>(&self, apply: F) -> Result<Self, CharacterError>
    where
        F: FnOnce(&mut CharacterSheet) -> Result<(), CharacterError>,
    {
        let mut sheet = self.sheet.clone();
        apply(&mut sheet)?;
        Self::resolve(sheet)
    }

    /// Clear a primary attribute, or make a secondary one primary.
    pub fn toggle_primary(&self, attribute: Attribute) -> Result<Self, CharacterError> {
        self.edit(|sheet| {
            if sheet.attributes.is_primary(attribute) {
                sheet.attributes.set_primary(attribute, false);
                return Ok(());
            }
            if sheet.kind.is_npc() && sheet.level == 0 {
                return Err(CharacterError::PrimariesLocked);
            }
            if sheet.attributes.primary_count() >= ForgeConfig::MAX_PRIMARIES {
                return Err(CharacterError::PrimaryLimitReached { attribute });
            }
            sheet.attributes.set_primary(attribute, true);
            Ok(())
        })
    }

    /// Player characters only; NPC level follows competence.
    pub fn set_level(&self, level: u8) -> Result<Self, CharacterError> {
        self.edit(|sheet| {
            if let CharacterKind::Npc(profile) = &sheet.kind {
                return Err(CharacterError::LevelFixedByCompetence {
                    level,
                    expected: profile.competence.level(),
                });
            }
            if level > ForgeConfig::MAX_LEVEL {
                return Err(CharacterError::LevelOutOfRange {
                    level,
                    max: ForgeConfig::MAX_LEVEL,
                });
            }
            sheet.level = level;
            Ok(())
        })
    }

    /// Exchange two scores; primary flags stay on their slots.
    pub fn swap_attributes(&self, a: Attribute, b: Attribute) -> Result<Self, CharacterError> {
        if a == b {
            return Err(CharacterError::SwapWithSelf(a));
        }
        self.edit(|sheet| {
            sheet.attributes.swap_scores(a, b);
            Ok(())
        })
    }

    /// Ammunition follows the weapon definition.
    pub fn equip_weapon(&self, weapon: WeaponDef) -> Result<Self, CharacterError> {
        self.edit(|sheet| {
            sheet.weapon = weapon;
            Ok(())
        })
    }

    pub fn equip_armour(&self, armour: ArmourDef) -> Result<Self, CharacterError> {
        self.edit(|sheet| {
            sheet.armour = armour;
            Ok(())
        })
    }

    pub fn set_helmet(&self, helmet: bool) -> Result<Self, CharacterError> {
        self.edit(|sheet| {
            sheet.helmet = helmet;
            Ok(())
        })
    }

    pub fn set_shield(&self, shield: bool) -> Result<Self, CharacterError> {
        self.edit(|sheet| {
            sheet.shield = shield;
            Ok(())
        })
    }

    /// Replace one occupation. A player's two occupations stay distinct.
    ///
    /// Names compare exactly, so "barbarian" and "Barbarian" are distinct.
    ///
    /// Primaries are left alone; occupations only seed them at roll time.
    pub fn set_occupation(&self, index: usize, name: impl Into<String>) -> Result<Self, CharacterError> {
        let name = name.into();
        self.edit(|sheet| {
            let count = sheet.occupations.len();
            if index >= count {
                return Err(CharacterError::OccupationIndex { index, count });
            }
            let clash = sheet
                .occupations
                .iter()
                .enumerate()
                .any(|(i, existing)| i != index && *existing == name);
            if clash {
                return Err(CharacterError::DuplicateOccupation(name));
            }
            sheet.occupations[index] = name;
            Ok(())
        })
    }

    pub fn set_flavor(&self, field: FlavorField, value: impl Into<String>) -> Result<Self, CharacterError> {
        let value = value.into();
        self.edit(|sheet| {
            let slot = match field {
                FlavorField::Appearance => &mut sheet.flavor.appearance,
                FlavorField::Detail => &mut sheet.flavor.detail,
                FlavorField::Clothing => &mut sheet.flavor.clothing,
                FlavorField::Quirk => &mut sheet.flavor.quirk,
            };
            *slot = value;
            Ok(())
        })
    }

    pub fn rename(&self, name: impl Into<String>) -> Result<Self, CharacterError> {
        let name = name.into();
        self.edit(|sheet| {
            sheet.name = name;
            Ok(())
        })
    }

    pub fn set_alignment(&self, alignment: impl Into<String>) -> Result<Self, CharacterError> {
        let alignment = alignment.into();
        self.edit(|sheet| {
            sheet.alignment = alignment;
            Ok(())
        })
    }

    /// Replace a first hit die of 2 or less with a 4.
    ///
    /// Writes the raw die in the pool the current Constitution flag reads, so
    /// the Constitution modifier still applies on top.
    pub fn take_four(&self) -> Result<Self, CharacterError> {
        if !self.derived.hit_points.take_four_available {
            return Err(CharacterError::TakeFourUnavailable);
        }
        self.edit(|sheet| {
            let constitution_primary = sheet.attributes.is_primary(Attribute::Constitution);
            sheet.hit_dice.relevant_mut(constitution_primary)[0] = ForgeConfig::TAKE_FOUR_VALUE;
            Ok(())
        })
    }

    /// Move an NPC to another competence tier.
    ///
    /// Level, morale, and wage follow the tier. Dropping to level 0 clears
    /// every primary flag.
    pub fn set_competence(&self, tier: CompetenceTier) -> Result<Self, CharacterError> {
        self.edit(|sheet| {
            let CharacterKind::Npc(profile) = &mut sheet.kind else {
                return Err(CharacterError::NotAnNpc);
            };
            profile.competence = tier;
            sheet.level = tier.level();
            if sheet.level == 0 {
                sheet.attributes.clear_primaries();
            }
            Ok(())
        })
    }
}
