//! Static rule-book catalog consumed by the generators.
//!
//! The catalog is immutable configuration: name and occupation lists, weapon
//! and armour definitions, gear, flavor lists, the occupation keyword map, and
//! the roll tables. `forge-content` loads it from RON; nothing in this crate
//! mutates it.

use crate::character::CompetenceTier;
use crate::dice::DiceExpr;
use crate::error::{ErrorSeverity, ForgeError};
use crate::stats::KeywordRule;
use crate::tables::{RangeTable, TableError};

/// Roll domain of a 2d6 table.
pub const TWO_D6: (i32, i32) = (2, 12);
/// Roll domain of a 1d6 table.
pub const ONE_D6: (i32, i32) = (1, 6);

/// A carried item and the inventory slots it takes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub name: String,
    pub slots: u32,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, slots: u32) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponDef {
    pub name: String,
    pub damage: DiceExpr,
    pub slots: u32,
    /// Ammunition carried automatically while this weapon is equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ammunition: Option<String>,
}

/// Armour weight class. Fixes base AC and the Dexterity cap.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmourTier {
    #[strum(to_string = "Unarmoured", serialize = "none")]
    Unarmoured,
    Leather,
    Chain,
    Plate,
}

impl ArmourTier {
    pub const fn base_ac(self) -> i32 {
        match self {
            Self::Unarmoured => 10,
            Self::Leather => 12,
            Self::Chain => 14,
            Self::Plate => 16,
        }
    }

    /// Highest Dexterity modifier this armour lets through, if any cap applies.
    pub const fn dex_cap(self) -> Option<i32> {
        match self {
            Self::Unarmoured | Self::Leather => None,
            Self::Chain => Some(2),
            Self::Plate => Some(1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourDef {
    pub name: String,
    pub tier: ArmourTier,
    pub slots: u32,
}

impl ArmourDef {
    pub const fn ac(&self) -> i32 {
        self.tier.base_ac()
    }

    /// Worn armour takes inventory space; the unarmoured entry does not appear.
    pub const fn is_worn(&self) -> bool {
        !matches!(self.tier, ArmourTier::Unarmoured)
    }
}

/// Outcome of the helmet/shield roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Protection {
    Nothing,
    Helmet,
    Shield,
    HelmetAndShield,
}

impl Protection {
    pub const fn helmet(self) -> bool {
        matches!(self, Self::Helmet | Self::HelmetAndShield)
    }

    pub const fn shield(self) -> bool {
        matches!(self, Self::Shield | Self::HelmetAndShield)
    }
}

/// Everything the character and NPC generators draw from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub names: Vec<String>,
    pub occupations: Vec<String>,
    pub alignments: Vec<String>,
    pub weapons: Vec<WeaponDef>,
    pub armours: Vec<ArmourDef>,
    pub dungeon_gear: Vec<InventoryItem>,
    pub general_gear: Vec<InventoryItem>,
    pub ration: InventoryItem,
    pub appearances: Vec<String>,
    pub details: Vec<String>,
    pub clothing: Vec<String>,
    pub quirks: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub personalities: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interests: Vec<String>,
    /// Scanned in declaration order.
    pub occupation_keywords: Vec<KeywordRule>,
    /// 2d6 → armour tier.
    pub armour_table: RangeTable<ArmourTier>,
    /// 2d6 → helmet and shield.
    pub protection_table: RangeTable<Protection>,
    /// 2d6 → NPC competence.
    pub competence_table: RangeTable<CompetenceTier>,
    /// 2d6 → NPC equipment quality.
    pub equipment_table: RangeTable<String>,
}

impl Catalog {
    pub fn armour(&self, tier: ArmourTier) -> Option<&ArmourDef> {
        self.armours.iter().find(|armour| armour.tier == tier)
    }

    /// Case-insensitive weapon lookup by name.
    pub fn weapon(&self, name: &str) -> Option<&WeaponDef> {
        self.weapons
            .iter()
            .find(|weapon| weapon.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive armour lookup by name or tier.
    pub fn armour_named(&self, name: &str) -> Option<&ArmourDef> {
        self.armours
            .iter()
            .find(|armour| armour.name.eq_ignore_ascii_case(name))
            .or_else(|| name.parse().ok().and_then(|tier| self.armour(tier)))
    }

    /// Check every list and table a generator will touch.
    ///
    /// A catalog that passes never makes generation fail.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let lists: [(&'static str, usize); 9] = [
            ("names", self.names.len()),
            ("alignments", self.alignments.len()),
            ("weapons", self.weapons.len()),
            ("armours", self.armours.len()),
            ("dungeon_gear", self.dungeon_gear.len()),
            ("appearances", self.appearances.len()),
            ("details", self.details.len()),
            ("clothing", self.clothing.len()),
            ("quirks", self.quirks.len()),
        ];
        for (list, len) in lists {
            if len == 0 {
                return Err(CatalogError::EmptyList(list));
            }
        }

        require_distinct_pair("occupations", &self.occupations)?;
        require_distinct_pair("general_gear", &self.general_gear)?;

        let tables: [(&'static str, Result<(), TableError>); 4] = [
            ("armour_table", self.armour_table.covers(TWO_D6.0, TWO_D6.1)),
            ("protection_table", self.protection_table.covers(TWO_D6.0, TWO_D6.1)),
            ("competence_table", self.competence_table.covers(TWO_D6.0, TWO_D6.1)),
            ("equipment_table", self.equipment_table.covers(TWO_D6.0, TWO_D6.1)),
        ];
        for (table, result) in tables {
            result.map_err(|source| CatalogError::Table { table, source })?;
        }

        for band in self.armour_table.bands() {
            if self.armour(band.result).is_none() {
                return Err(CatalogError::MissingArmour(band.result));
            }
        }
        Ok(())
    }
}

pub(crate) fn require_distinct_pair<T: PartialEq>(
    list: &'static str,
    items: &[T],
) -> Result<(), CatalogError> {
    let Some(head) = items.first() else {
        return Err(CatalogError::EmptyList(list));
    };
    if items.iter().all(|item| item == head) {
        return Err(CatalogError::NoDistinctPair(list));
    }
    Ok(())
}

/// Catalog data that would make a generator fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog list '{0}' is empty")]
    EmptyList(&'static str),

    #[error("catalog list '{0}' needs at least two distinct entries")]
    NoDistinctPair(&'static str),

    #[error("catalog table '{table}' is malformed: {source}")]
    Table {
        table: &'static str,
        source: TableError,
    },

    #[error("armour table rolls {0} but the catalog has no such armour")]
    MissingArmour(ArmourTier),
}

impl ForgeError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyList(_) => "CATALOG_EMPTY_LIST",
            Self::NoDistinctPair(_) => "CATALOG_NO_DISTINCT_PAIR",
            Self::Table { .. } => "CATALOG_BAD_TABLE",
            Self::MissingArmour(_) => "CATALOG_MISSING_ARMOUR",
        }
    }
}
