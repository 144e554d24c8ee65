//! Roll new player characters and NPCs from the catalog.
//!
//! The roll order is fixed, so a seeded [`DiceSource`] reproduces the same
//! character for the same catalog.

use crate::catalog::{ArmourDef, Catalog};
use crate::config::ForgeConfig;
use crate::dice::{DiceSource, pick_distinct_pair, pick_one};
use crate::stats::{Attribute, AttributeSet, HitDicePools, choose_primaries};

use super::{CharacterKind, CharacterRecord, CharacterSheet, Flavor, GenerateError, NpcProfile};

/// Roll a level-1 player character.
pub fn roll_new_character<D>(catalog: &Catalog, dice: &mut D) -> Result<CharacterRecord, GenerateError>
where
    D: DiceSource + ?Sized,
{
    let name = pick_one(dice, &catalog.names)?.clone();
    let (first, second) = pick_distinct_pair(dice, &catalog.occupations)?;
    let occupations = vec![first.clone(), second.clone()];
    let alignment = pick_one(dice, &catalog.alignments)?.clone();

    let mut attributes = roll_scores(dice);
    for attribute in choose_primaries(first, second, &catalog.occupation_keywords, dice) {
        attributes.set_primary(attribute, true);
    }

    let sheet = roll_common(
        catalog,
        dice,
        Identity {
            name,
            alignment,
            occupations,
            attributes,
            level: 1,
        },
    )?;
    Ok(CharacterRecord::resolve(sheet)?)
}

/// Roll an NPC.
///
/// One occupation feeds primary inference on both sides. The competence roll
/// fixes level, and a level-0 result leaves every attribute secondary.
pub fn roll_new_npc<D>(catalog: &Catalog, dice: &mut D) -> Result<CharacterRecord, GenerateError>
where
    D: DiceSource + ?Sized,
{
    let name = pick_one(dice, &catalog.names)?.clone();
    let occupation = pick_one(dice, &catalog.occupations)?.clone();
    let alignment = pick_one(dice, &catalog.alignments)?.clone();

    let mut attributes = roll_scores(dice);
    for attribute in choose_primaries(&occupation, &occupation, &catalog.occupation_keywords, dice) {
        attributes.set_primary(attribute, true);
    }

    let (_, &competence) = catalog.competence_table.roll(dice, 2, 6)?;
    let (_, equipment) = catalog.equipment_table.roll(dice, 2, 6)?;
    let equipment = equipment.clone();
    let level = competence.level();
    if level == 0 {
        attributes.clear_primaries();
    }

    let mut sheet = roll_common(
        catalog,
        dice,
        Identity {
            name,
            alignment,
            occupations: vec![occupation],
            attributes,
            level,
        },
    )?;

    let personality = pick_optional(dice, &catalog.personalities)?;
    let interest = pick_optional(dice, &catalog.interests)?;
    sheet.kind = CharacterKind::Npc(NpcProfile {
        competence,
        equipment,
        personality,
        interest,
    });
    Ok(CharacterRecord::resolve(sheet)?)
}

struct Identity {
    name: String,
    alignment: String,
    occupations: Vec<String>,
    attributes: AttributeSet,
    level: u8,
}

/// 3d6 per attribute, in sheet order.
fn roll_scores<D: DiceSource + ?Sized>(dice: &mut D) -> AttributeSet {
    let scores = Attribute::ALL.map(|_| dice.sum_dice(3, 6) as i32);
    AttributeSet::from_scores(scores)
}

/// Hit dice, equipment, gear, gold, and flavor, shared by both generators.
///
/// Returns a player sheet; the NPC generator swaps in its profile afterwards.
fn roll_common<D>(catalog: &Catalog, dice: &mut D, identity: Identity) -> Result<CharacterSheet, GenerateError>
where
    D: DiceSource + ?Sized,
{
    let hit_dice = roll_hit_dice(dice);
    let weapon = pick_one(dice, &catalog.weapons)?.clone();
    let armour = roll_armour(catalog, dice)?;
    let (_, &protection) = catalog.protection_table.roll(dice, 2, 6)?;

    let mut carried = Vec::with_capacity(3 + ForgeConfig::RATIONS);
    carried.push(pick_one(dice, &catalog.dungeon_gear)?.clone());
    let (first, second) = pick_distinct_pair(dice, &catalog.general_gear)?;
    carried.push(first.clone());
    carried.push(second.clone());
    carried.extend(std::iter::repeat_n(catalog.ration.clone(), ForgeConfig::RATIONS));

    let gold = dice.sum_dice(2, 6) * ForgeConfig::GOLD_MULTIPLIER;
    let flavor = Flavor {
        appearance: pick_one(dice, &catalog.appearances)?.clone(),
        detail: pick_one(dice, &catalog.details)?.clone(),
        clothing: pick_one(dice, &catalog.clothing)?.clone(),
        quirk: pick_one(dice, &catalog.quirks)?.clone(),
    };

    Ok(CharacterSheet {
        kind: CharacterKind::Player,
        name: identity.name,
        alignment: identity.alignment,
        occupations: identity.occupations,
        attributes: identity.attributes,
        level: identity.level,
        weapon,
        armour,
        helmet: protection.helmet(),
        shield: protection.shield(),
        hit_dice,
        carried,
        gold,
        flavor,
    })
}

/// Ten d8 for the primary pool, then ten d6 for the secondary pool.
fn roll_hit_dice<D: DiceSource + ?Sized>(dice: &mut D) -> HitDicePools {
    let mut pools = HitDicePools {
        primary: [0; ForgeConfig::HIT_DICE_LEVELS],
        secondary: [0; ForgeConfig::HIT_DICE_LEVELS],
    };
    for die in &mut pools.primary {
        *die = dice.roll_die(ForgeConfig::PRIMARY_HIT_DIE) as u8;
    }
    for die in &mut pools.secondary {
        *die = dice.roll_die(ForgeConfig::SECONDARY_HIT_DIE) as u8;
    }
    pools
}

fn roll_armour<D: DiceSource + ?Sized>(catalog: &Catalog, dice: &mut D) -> Result<ArmourDef, GenerateError> {
    let (_, &tier) = catalog.armour_table.roll(dice, 2, 6)?;
    catalog
        .armour(tier)
        .cloned()
        .ok_or(GenerateError::MissingArmour(tier))
}

/// Lists that a catalog may leave empty yield no pick.
fn pick_optional<D: DiceSource + ?Sized>(dice: &mut D, list: &[String]) -> Result<Option<String>, GenerateError> {
    if list.is_empty() {
        return Ok(None);
    }
    Ok(Some(pick_one(dice, list)?.clone()))
}
