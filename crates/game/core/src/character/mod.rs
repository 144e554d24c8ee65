//! Character and NPC records.
//!
//! A [`CharacterRecord`] pairs the canonical [`CharacterSheet`] with the
//! [`DerivedSheet`] computed from it. The sheet is the only thing a roll or an
//! edit writes; the derived block is rebuilt by [`recompute_derived`] and is
//! never edited on its own. Player characters and NPCs share one record type,
//! with the NPC variance carried by [`CharacterKind`].

mod edit;
mod error;
mod generate;
mod npc;
mod resolve;

pub use edit::FlavorField;
pub use error::{CharacterError, GenerateError};
pub use generate::{roll_new_character, roll_new_npc};
pub use npc::{CompetenceTier, NpcStanding, wage_for_level};
pub use resolve::{derive_sheet, recompute_derived};

use crate::catalog::{ArmourDef, InventoryItem, WeaponDef};
use crate::stats::{ArmourClass, Attribute, AttributeSet, HitDicePools, HitPoints, SlotUsage};

/// NPC-only canonical fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcProfile {
    pub competence: CompetenceTier,
    /// Equipment quality label from the 2d6 equipment roll.
    pub equipment: String,
    pub personality: Option<String>,
    pub interest: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CharacterKind {
    Player,
    Npc(NpcProfile),
}

impl CharacterKind {
    pub const fn is_npc(&self) -> bool {
        matches!(self, Self::Npc(_))
    }

    pub const fn npc(&self) -> Option<&NpcProfile> {
        match self {
            Self::Npc(profile) => Some(profile),
            Self::Player => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flavor {
    pub appearance: String,
    pub detail: String,
    pub clothing: String,
    pub quirk: String,
}

/// Canonical fields: set by a roll or an explicit edit, nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSheet {
    pub kind: CharacterKind,
    pub name: String,
    pub alignment: String,
    /// Two distinct occupations for a player character, one for an NPC.
    pub occupations: Vec<String>,
    pub attributes: AttributeSet,
    pub level: u8,
    pub weapon: WeaponDef,
    pub armour: ArmourDef,
    pub helmet: bool,
    pub shield: bool,
    pub hit_dice: HitDicePools,
    /// Gear carried besides weapon, ammunition, armour, helmet, and shield.
    pub carried: Vec<InventoryItem>,
    pub gold: u32,
    pub flavor: Flavor,
}

/// One attribute line as shown on the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeLine {
    pub attribute: Attribute,
    pub score: i32,
    pub primary: bool,
    pub modifier: i32,
    pub check_bonus: i32,
}

/// Everything computed from a [`CharacterSheet`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedSheet {
    pub attributes: [AttributeLine; 6],
    pub armour_class: ArmourClass,
    pub hit_points: HitPoints,
    /// Full displayed inventory: weapon, ammunition, armour, helmet, shield, carried gear.
    pub inventory: Vec<InventoryItem>,
    pub slots: SlotUsage,
    pub npc: Option<NpcStanding>,
}

impl DerivedSheet {
    pub fn attribute(&self, attribute: Attribute) -> &AttributeLine {
        &self.attributes[attribute.index()]
    }
}

/// Canonical sheet plus its derived block.
///
/// Construct through [`CharacterRecord::resolve`] or the generators so the
/// derived block always matches the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterRecord {
    pub sheet: CharacterSheet,
    pub derived: DerivedSheet,
}

impl CharacterRecord {
    /// Derive every computed field for `sheet`.
    pub fn resolve(sheet: CharacterSheet) -> Result<Self, CharacterError> {
        let derived = derive_sheet(&sheet)?;
        Ok(Self { sheet, derived })
    }

    pub fn is_npc(&self) -> bool {
        self.sheet.kind.is_npc()
    }

    /// True when the stored derived block matches a fresh derivation.
    pub fn is_consistent(&self) -> bool {
        derive_sheet(&self.sheet).is_ok_and(|derived| derived == self.derived)
    }
}
