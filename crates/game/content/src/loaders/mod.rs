//! Content loaders for reading FORGE data from files.
//!
//! Each loader offers `load(path)` for a file on disk and `parse(text)` for
//! the embedded copy in [`crate::builtin`].

pub mod catalog;
pub mod config;
pub mod factory;
pub mod tables;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
