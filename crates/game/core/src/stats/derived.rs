//! Derived Stats - armour class and inventory load.
//!
//! Pure functions of the canonical sheet. NOT stored long-term; recomputed
//! every time a record is resolved.

use crate::catalog::{ArmourDef, InventoryItem};
use crate::config::ForgeConfig;

/// Armour class with its three-part breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourClass {
    /// AC of the equipped armour tier.
    pub base: i32,
    /// +1 with a shield.
    pub shield: i32,
    /// Dexterity modifier after the armour cap.
    pub dex: i32,
    pub total: i32,
}

impl ArmourClass {
    /// `base + shield + min(dex modifier, armour cap)`.
    ///
    /// A negative modifier always applies in full.
    pub fn compute(armour: &ArmourDef, shield: bool, dex_modifier: i32) -> Self {
        let base = armour.ac();
        let shield = if shield { ForgeConfig::SHIELD_AC_BONUS } else { 0 };
        let dex = match armour.tier.dex_cap() {
            Some(cap) => dex_modifier.min(cap),
            None => dex_modifier,
        };
        Self {
            base,
            shield,
            dex,
            total: base + shield + dex,
        }
    }
}

/// Inventory load against capacity.
///
/// Over capacity is a warning for the sheet, never a rejection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotUsage {
    pub used: i32,
    pub capacity: i32,
    pub over_capacity: bool,
}

impl SlotUsage {
    /// Sum item costs; capacity is `10 + Strength check bonus`.
    pub fn compute(items: &[InventoryItem], strength_check: i32) -> Self {
        let used = items.iter().map(|item| item.slots as i32).sum();
        let capacity = ForgeConfig::BASE_SLOTS + strength_check;
        Self {
            used,
            capacity,
            over_capacity: used > capacity,
        }
    }

    /// Slots left before the load goes over; negative when already over.
    pub const fn free(&self) -> i32 {
        self.capacity - self.used
    }
}
