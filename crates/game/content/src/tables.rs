//! Bundle of the non-character generator tables.

use forge_core::{CatalogError, OracleTables, QuestTables, WildernessTables};

/// Everything the quest, wilderness, and oracle generators roll against.
///
/// Stored together in `tables.ron`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorTables {
    pub quest: QuestTables,
    pub wilderness: WildernessTables,
    pub oracle: OracleTables,
}

impl GeneratorTables {
    /// Check every table covers its dice domain and every list is usable.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.quest.validate()?;
        self.wilderness.validate()?;
        self.oracle.validate()
    }
}
