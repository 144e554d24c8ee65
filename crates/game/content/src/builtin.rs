//! Content embedded at compile time.
//!
//! These are the files under `data/`, parsed with the same loaders used for
//! a data directory.

use forge_core::{Catalog, ForgeConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, TablesLoader};
use crate::tables::GeneratorTables;

pub const CATALOG_RON: &str = include_str!("../data/catalog.ron");
pub const TABLES_RON: &str = include_str!("../data/tables.ron");
pub const CONFIG_TOML: &str = include_str!("../data/config.toml");

pub fn catalog() -> LoadResult<Catalog> {
    CatalogLoader::parse(CATALOG_RON)
}

pub fn tables() -> LoadResult<GeneratorTables> {
    TablesLoader::parse(TABLES_RON)
}

pub fn config() -> LoadResult<ForgeConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}
