//! Content factory for loading FORGE data from a directory.

use std::path::{Path, PathBuf};

use forge_core::{Catalog, ForgeConfig};

use crate::builtin;
use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, TablesLoader};
use crate::tables::GeneratorTables;

/// Everything a session needs, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Content {
    pub config: ForgeConfig,
    pub catalog: Catalog,
    pub tables: GeneratorTables,
}

impl Content {
    /// The embedded rule-book content.
    pub fn builtin() -> LoadResult<Self> {
        Ok(Self {
            config: builtin::config()?,
            catalog: builtin::catalog()?,
            tables: builtin::tables()?,
        })
    }
}

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── catalog.ron
/// └── tables.ron
/// ```
///
/// [`ContentFactory::load_content`] falls back to the embedded copy of any
/// file the directory does not contain.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const CATALOG_FILE: &'static str = "catalog.ron";
    pub const TABLES_FILE: &'static str = "tables.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<ForgeConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load the character catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        CatalogLoader::load(&self.data_dir.join(Self::CATALOG_FILE))
    }

    /// Load quest, wilderness, and oracle tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<GeneratorTables> {
        TablesLoader::load(&self.data_dir.join(Self::TABLES_FILE))
    }

    /// Load all three files, using the embedded copy for any that is missing.
    ///
    /// A file that exists but fails to parse is an error, not a fallback.
    pub fn load_content(&self) -> LoadResult<Content> {
        let config = if self.has_file(Self::CONFIG_FILE) {
            self.load_config()?
        } else {
            tracing::debug!(dir = %self.data_dir.display(), "using built-in config");
            builtin::config()?
        };
        let catalog = if self.has_file(Self::CATALOG_FILE) {
            self.load_catalog()?
        } else {
            tracing::debug!(dir = %self.data_dir.display(), "using built-in catalog");
            builtin::catalog()?
        };
        let tables = if self.has_file(Self::TABLES_FILE) {
            self.load_tables()?
        } else {
            tracing::debug!(dir = %self.data_dir.display(), "using built-in tables");
            builtin::tables()?
        };
        tracing::info!(
            dir = %self.data_dir.display(),
            names = catalog.names.len(),
            occupations = catalog.occupations.len(),
            "content loaded"
        );
        Ok(Content {
            config,
            catalog,
            tables,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn has_file(&self, name: &str) -> bool {
        self.data_dir.join(name).is_file()
    }
}
