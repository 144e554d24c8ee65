//! Quest, wilderness, and oracle tables loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::tables::GeneratorTables;

/// Loader for [`GeneratorTables`] from RON files.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<GeneratorTables> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid tables {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<GeneratorTables> {
        let tables: GeneratorTables = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables RON: {}", e))?;
        tables
            .validate()
            .map_err(|e| anyhow::anyhow!("Tables failed validation: {}", e))?;
        Ok(tables)
    }
}
