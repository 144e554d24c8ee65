//! Small hand-built catalog and sheets shared by unit tests.

use crate::catalog::{ArmourDef, ArmourTier, Catalog, InventoryItem, Protection, WeaponDef};
use crate::character::{CharacterKind, CharacterSheet, CompetenceTier, Flavor, NpcProfile};
use crate::dice::DiceExpr;
use crate::oracle::OracleTables;
use crate::quest::{QuestTables, QuestType, RewardEntry};
use crate::stats::{Attribute, AttributeSet, HitDicePools, KeywordRule};
use crate::tables::RangeTable;
use crate::wilderness::{TerrainTables, Terrain, WeatherTables, WildernessTables};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn text_table(pairs: &[(i32, &str)]) -> RangeTable<String> {
    RangeTable::from_pairs(pairs.iter().map(|&(max, text)| (max, text.to_string()))).unwrap()
}

pub fn weapon(name: &str, slots: u32, ammunition: Option<&str>) -> WeaponDef {
    WeaponDef {
        name: name.to_string(),
        damage: DiceExpr::single(6).unwrap(),
        slots,
        ammunition: ammunition.map(str::to_string),
    }
}

pub fn armour(tier: ArmourTier) -> ArmourDef {
    let (name, slots) = match tier {
        ArmourTier::Unarmoured => ("No Armour", 0),
        ArmourTier::Leather => ("Leather Armour", 2),
        ArmourTier::Chain => ("Chain Armour", 3),
        ArmourTier::Plate => ("Plate Armour", 4),
    };
    ArmourDef {
        name: name.to_string(),
        tier,
        slots,
    }
}

fn rule(attribute: Attribute, keywords: &[&str]) -> KeywordRule {
    KeywordRule {
        attribute,
        keywords: strings(keywords),
    }
}

pub fn catalog() -> Catalog {
    Catalog {
        names: strings(&["Aldric", "Bryony", "Cole", "Dunstan"]),
        occupations: strings(&["Barbarian", "Wizard", "Villager", "Beggar", "Spy", "Priest"]),
        alignments: strings(&["Lawful", "Neutral", "Chaotic"]),
        weapons: vec![
            weapon("Dagger", 1, None),
            weapon("Longbow", 2, Some("Quiver of Arrows x20")),
            weapon("Halberd", 3, None),
            weapon("Sling", 1, Some("Pouch of Bullets x20")),
        ],
        armours: [
            ArmourTier::Unarmoured,
            ArmourTier::Leather,
            ArmourTier::Chain,
            ArmourTier::Plate,
        ]
        .map(armour)
        .to_vec(),
        dungeon_gear: vec![
            InventoryItem::new("Rope (Far)", 1),
            InventoryItem::new("10ft pole", 2),
            InventoryItem::new("Torches x3", 1),
        ],
        general_gear: vec![
            InventoryItem::new("Tent", 2),
            InventoryItem::new("Tinderbox", 1),
            InventoryItem::new("Waterskin", 1),
        ],
        ration: InventoryItem::new("Ration", 1),
        appearances: strings(&["Gaunt", "Stocky"]),
        details: strings(&["Scarred hands", "Missing tooth"]),
        clothing: strings(&["Patched cloak", "Fine silks"]),
        quirks: strings(&["Whistles", "Counts coins"]),
        personalities: strings(&["Gruff", "Cheerful"]),
        interests: strings(&["Local gossip", "Old wars"]),
        occupation_keywords: vec![
            rule(Attribute::Strength, &["barbarian", "knight", "warrior"]),
            rule(Attribute::Dexterity, &["thief", "spy"]),
            rule(Attribute::Constitution, &["miner", "blacksmith", "villager"]),
            rule(Attribute::Intelligence, &["wizard", "scholar"]),
            rule(Attribute::Wisdom, &["cleric", "priest"]),
            rule(Attribute::Charisma, &["bard", "noble"]),
        ],
        armour_table: RangeTable::from_pairs([
            (4, ArmourTier::Unarmoured),
            (8, ArmourTier::Leather),
            (11, ArmourTier::Chain),
            (12, ArmourTier::Plate),
        ])
        .unwrap(),
        protection_table: RangeTable::from_pairs([
            (5, Protection::Nothing),
            (7, Protection::Helmet),
            (10, Protection::Shield),
            (12, Protection::HelmetAndShield),
        ])
        .unwrap(),
        competence_table: RangeTable::from_pairs([
            (3, CompetenceTier::Liability),
            (6, CompetenceTier::Average),
            (9, CompetenceTier::Competent),
            (11, CompetenceTier::VeryCapable),
            (12, CompetenceTier::Exceptional),
        ])
        .unwrap(),
        equipment_table: text_table(&[
            (3, "No equipment of their own"),
            (6, "Equipped for basic travel"),
            (9, "Equipped for basic combat"),
            (11, "Equipped for travel & combat"),
            (12, "Best equipment money can buy"),
        ]),
    }
}

/// Level 1 Barbarian/Wizard with Strength and Intelligence primary.
///
/// Str 16, Dex 10, Con 11, Int 14, Wis 7, Cha 12. The d6 pool opens with a 1,
/// so take four is on offer.
pub fn player_sheet() -> CharacterSheet {
    let mut attributes = AttributeSet::from_scores([16, 10, 11, 14, 7, 12]);
    attributes.set_primary(Attribute::Strength, true);
    attributes.set_primary(Attribute::Intelligence, true);
    CharacterSheet {
        kind: CharacterKind::Player,
        name: "Aldric".into(),
        alignment: "Neutral".into(),
        occupations: strings(&["Barbarian", "Wizard"]),
        attributes,
        level: 1,
        weapon: weapon("Dagger", 1, None),
        armour: armour(ArmourTier::Unarmoured),
        helmet: false,
        shield: false,
        hit_dice: HitDicePools {
            primary: [8, 1, 5, 7, 3, 2, 8, 4, 6, 1],
            secondary: [1, 6, 3, 1, 4, 5, 6, 2, 3, 4],
        },
        carried: vec![
            InventoryItem::new("Rope (Far)", 1),
            InventoryItem::new("Tent", 2),
            InventoryItem::new("Ration", 1),
            InventoryItem::new("Ration", 1),
        ],
        gold: 210,
        flavor: Flavor {
            appearance: "Gaunt".into(),
            detail: "Scarred hands".into(),
            clothing: "Patched cloak".into(),
            quirk: "Whistles".into(),
        },
    }
}

/// Blacksmith NPC at `tier`; Strength and Constitution primary unless level 0.
pub fn npc_sheet(tier: CompetenceTier) -> CharacterSheet {
    let mut sheet = player_sheet();
    sheet.kind = CharacterKind::Npc(NpcProfile {
        competence: tier,
        equipment: "Equipped for basic combat".into(),
        personality: Some("Gruff".into()),
        interest: Some("Old wars".into()),
    });
    sheet.occupations = strings(&["Blacksmith"]);
    sheet.level = tier.level();
    sheet.attributes.clear_primaries();
    if sheet.level > 0 {
        sheet.attributes.set_primary(Attribute::Strength, true);
        sheet.attributes.set_primary(Attribute::Constitution, true);
    }
    sheet
}

pub fn quest_tables() -> QuestTables {
    QuestTables {
        quest_type_table: RangeTable::from_pairs([
            (2, QuestType::CharacterBased),
            (4, QuestType::ItemBased),
            (6, QuestType::LocationBased),
        ])
        .unwrap(),
        reward_table: RangeTable::from_pairs([
            (2, RewardEntry::Fixed("No monetary reward, just XP".into())),
            (4, RewardEntry::Currency),
            (6, RewardEntry::Fixed("XP plus an Item".into())),
        ])
        .unwrap(),
        currency_table: text_table(&[(2, "XP in the form of gold"), (6, "XP in the form of gems")]),
        character_actions: strings(&["Arrest", "Assassinate", "Avenge", "Befriend"]),
        character_subject_table: text_table(&[
            (2, "Urban Character"),
            (4, "Rural Character"),
            (6, "Wilderness Character"),
        ]),
        item_actions: strings(&["Acquire", "Bury", "Conceal"]),
        item_subjects: strings(&["Armour", "Cargo", "Clue"]),
        location_actions: strings(&["Explore", "Clear out", "Map"]),
        location_subjects: strings(&["Ruined tower", "Sunken temple", "Bandit camp"]),
    }
}

fn terrain_table(row: [Terrain; 6]) -> RangeTable<Terrain> {
    RangeTable::from_pairs([3, 5, 8, 10, 11, 12].into_iter().zip(row)).unwrap()
}

pub fn wilderness_tables() -> WildernessTables {
    use Terrain::*;
    let bands = [3, 5, 6, 7, 8, 10, 12];
    let weather = |names: [&str; 7]| {
        RangeTable::from_pairs(bands.into_iter().zip(names.map(str::to_string))).unwrap()
    };
    WildernessTables {
        weather: WeatherTables {
            wet: weather([
                "Sleet, wind",
                "Fog, still",
                "Light rain",
                "Clear, chilly",
                "Steady rain",
                "Cold, wind",
                "Rainstorm",
            ]),
            dry: weather([
                "Cool, wind",
                "Light rain",
                "Overcast, humid",
                "Clear, warm",
                "Hot, wind",
                "Boiling, still",
                "Thunderstorm",
            ]),
            cold: weather([
                "Hail, wind",
                "Icy mist, still",
                "Icy wind, dry",
                "Clear, cold",
                "Light snow",
                "Steady snow",
                "Snowstorm",
            ]),
        },
        terrain: TerrainTables {
            plains: terrain_table([Swamp, Hills, Plains, Forest, Desert, Mountains]),
            forest: terrain_table([Swamp, Plains, Forest, Hills, Mountains, Desert]),
            hills: terrain_table([Plains, Forest, Hills, Mountains, Swamp, Desert]),
            mountains: terrain_table([Forest, Hills, Mountains, Hills, Plains, Swamp]),
            swamp: terrain_table([Forest, Plains, Swamp, Hills, Forest, Mountains]),
            desert: terrain_table([Hills, Plains, Desert, Mountains, Plains, Forest]),
        },
    }
}

pub fn oracle_tables() -> OracleTables {
    OracleTables {
        event_focus: text_table(&[
            (1, "Remote Event"),
            (2, "NPC Related"),
            (3, "Quest Related"),
            (4, "PC Related"),
            (5, "Ambiguous Event"),
            (6, "Current Situation"),
        ]),
        event_effect: text_table(&[(3, "Negative Spin"), (6, "Positive Spin")]),
        verbs: strings(&["Abandon", "Abuse", "Activate"]),
        nouns: strings(&["Advantage", "Adversity", "Agreement"]),
    }
}
