//! Resolver: canonical sheet in, derived sheet out.

use crate::catalog::InventoryItem;
use crate::config::ForgeConfig;
use crate::stats::{ArmourClass, Attribute, HitPoints, SlotUsage, check_bonus, modifier};

use super::{
    AttributeLine, CharacterError, CharacterKind, CharacterRecord, CharacterSheet, DerivedSheet,
    NpcStanding,
};

/// Rebuild the derived block of `record` from its canonical sheet.
pub fn recompute_derived(record: &CharacterRecord) -> Result<CharacterRecord, CharacterError> {
    CharacterRecord::resolve(record.sheet.clone())
}

/// Compute every derived field of `sheet`.
///
/// Rejects sheets that break an invariant instead of clamping them: more than
/// two primaries, a level beyond the pre-rolled hit dice, an NPC whose level
/// disagrees with its competence, or a level-0 NPC with primaries.
pub fn derive_sheet(sheet: &CharacterSheet) -> Result<DerivedSheet, CharacterError> {
    validate(sheet)?;

    let level = sheet.level;
    let pinned = sheet.kind.is_npc();
    let attributes = Attribute::ALL.map(|attribute| {
        let slot = sheet.attributes.get(attribute);
        // NPC scores are flavor only
        let modifier = if pinned { 0 } else { modifier(slot.score) };
        AttributeLine {
            attribute,
            score: slot.score,
            primary: slot.primary,
            modifier,
            check_bonus: check_bonus(modifier, slot.primary, level),
        }
    });

    let dex = attributes[Attribute::Dexterity.index()].modifier;
    let con = attributes[Attribute::Constitution.index()];
    let strength_check = attributes[Attribute::Strength.index()].check_bonus;

    let armour_class = ArmourClass::compute(&sheet.armour, sheet.shield, dex);
    let hit_points = HitPoints::compute(&sheet.hit_dice, level, con.primary, con.modifier);
    let inventory = displayed_inventory(sheet);
    let slots = SlotUsage::compute(&inventory, strength_check);
    let npc = sheet
        .kind
        .npc()
        .map(|profile| NpcStanding::from_tier(profile.competence));

    Ok(DerivedSheet {
        attributes,
        armour_class,
        hit_points,
        inventory,
        slots,
        npc,
    })
}

fn validate(sheet: &CharacterSheet) -> Result<(), CharacterError> {
    if !sheet.attributes.is_ordered() {
        return Err(CharacterError::AttributeOrder);
    }
    let count = sheet.attributes.primary_count();
    if count > ForgeConfig::MAX_PRIMARIES {
        return Err(CharacterError::TooManyPrimaries { count });
    }
    if sheet.level > ForgeConfig::MAX_LEVEL {
        return Err(CharacterError::LevelOutOfRange {
            level: sheet.level,
            max: ForgeConfig::MAX_LEVEL,
        });
    }
    if let CharacterKind::Npc(profile) = &sheet.kind {
        let expected = profile.competence.level();
        if sheet.level != expected {
            return Err(CharacterError::LevelFixedByCompetence {
                level: sheet.level,
                expected,
            });
        }
        if expected == 0 && count > 0 {
            return Err(CharacterError::PrimariesLocked);
        }
    }
    Ok(())
}

/// Weapon, its ammunition, worn armour, helmet, shield, then carried gear.
fn displayed_inventory(sheet: &CharacterSheet) -> Vec<InventoryItem> {
    let mut items = Vec::with_capacity(sheet.carried.len() + 5);
    items.push(InventoryItem::new(sheet.weapon.name.clone(), sheet.weapon.slots));
    if let Some(ammunition) = &sheet.weapon.ammunition {
        items.push(InventoryItem::new(
            ammunition.clone(),
            ForgeConfig::AMMUNITION_SLOTS,
        ));
    }
    if sheet.armour.is_worn() {
        items.push(InventoryItem::new(sheet.armour.name.clone(), sheet.armour.slots));
    }
    if sheet.helmet {
        items.push(InventoryItem::new("Helmet", ForgeConfig::HELMET_SLOTS));
    }
    if sheet.shield {
        items.push(InventoryItem::new("Shield", ForgeConfig::SHIELD_SLOTS));
    }
    items.extend(sheet.carried.iter().cloned());
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArmourTier;
    use crate::character::CompetenceTier;
    use crate::fixtures;

    #[test]
    fn player_sheet_derives_modifiers_and_checks() {
        let record = CharacterRecord::resolve(fixtures::player_sheet()).unwrap();
        let strength = record.derived.attribute(Attribute::Strength);
        // score 16, primary, level 1
        assert_eq!(strength.modifier, 2);
        assert_eq!(strength.check_bonus, 3);
        let wisdom = record.derived.attribute(Attribute::Wisdom);
        assert_eq!(wisdom.modifier, -1);
        assert_eq!(wisdom.check_bonus, -1);
    }

    #[test]
    fn armour_class_uses_dexterity_and_cap() {
        let mut sheet = fixtures::player_sheet();
        sheet.attributes.set_score(Attribute::Dexterity, 18);
        sheet.armour = fixtures::armour(ArmourTier::Chain);
        sheet.shield = true;
        let derived = derive_sheet(&sheet).unwrap();
        assert_eq!(derived.armour_class.base, 14);
        assert_eq!(derived.armour_class.dex, 2);
        assert_eq!(derived.armour_class.total, 17);
    }

    #[test]
    fn inventory_lists_equipment_before_gear() {
        let mut sheet = fixtures::player_sheet();
        sheet.weapon = fixtures::weapon("Longbow", 2, Some("Quiver of Arrows x20"));
        sheet.armour = fixtures::armour(ArmourTier::Leather);
        sheet.helmet = true;
        let derived = derive_sheet(&sheet).unwrap();
        let names: Vec<&str> = derived.inventory.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Longbow",
                "Quiver of Arrows x20",
                "Leather Armour",
                "Helmet",
                "Rope (Far)",
                "Tent",
                "Ration",
                "Ration",
            ]
        );
        // 2 + 1 + 2 + 1 + 1 + 2 + 1 + 1
        assert_eq!(derived.slots.used, 11);
    }

    #[test]
    fn no_armour_takes_no_slot() {
        let sheet = fixtures::player_sheet();
        let derived = derive_sheet(&sheet).unwrap();
        assert!(derived.inventory.iter().all(|item| item.name != "No Armour"));
    }

    #[test]
    fn capacity_is_ten_plus_strength_check() {
        let derived = derive_sheet(&fixtures::player_sheet()).unwrap();
        assert_eq!(derived.slots.capacity, 13);
    }

    #[test]
    fn rejects_three_primaries() {
        let mut sheet = fixtures::player_sheet();
        sheet.attributes.set_primary(Attribute::Wisdom, true);
        assert_eq!(derive_sheet(&sheet), Err(CharacterError::TooManyPrimaries { count: 3 }));
    }

    #[test]
    fn rejects_level_beyond_hit_dice() {
        let mut sheet = fixtures::player_sheet();
        sheet.level = 11;
        assert!(matches!(
            derive_sheet(&sheet),
            Err(CharacterError::LevelOutOfRange { level: 11, .. })
        ));
    }

    #[test]
    fn npc_modifiers_are_pinned_to_zero() {
        let sheet = fixtures::npc_sheet(CompetenceTier::VeryCapable);
        let derived = derive_sheet(&sheet).unwrap();
        for line in derived.attributes {
            assert_eq!(line.modifier, 0);
            let expected = if line.primary { 2 } else { 1 };
            assert_eq!(line.check_bonus, expected);
        }
        assert_eq!(derived.armour_class.dex, 0);
        let standing = derived.npc.unwrap();
        assert_eq!(standing.morale, 8);
        assert_eq!(standing.competence, "Very capable");
    }

    #[test]
    fn npc_level_must_follow_competence() {
        let mut sheet = fixtures::npc_sheet(CompetenceTier::Average);
        sheet.level = 3;
        assert_eq!(
            derive_sheet(&sheet),
            Err(CharacterError::LevelFixedByCompetence {
                level: 3,
                expected: 1
            })
        );
    }

    #[test]
    fn liability_npc_rejects_primaries() {
        let mut sheet = fixtures::npc_sheet(CompetenceTier::Liability);
        sheet.attributes.set_primary(Attribute::Strength, true);
        assert_eq!(derive_sheet(&sheet), Err(CharacterError::PrimariesLocked));
    }

    #[test]
    fn recompute_is_idempotent() {
        let record = CharacterRecord::resolve(fixtures::player_sheet()).unwrap();
        assert_eq!(recompute_derived(&record).unwrap(), record);
        assert!(record.is_consistent());
    }
}
