//! Character catalog loader.

use std::path::Path;

use forge_core::Catalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for the character catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }

    /// Parse and validate catalog RON text.
    ///
    /// Validation runs here because serde bypasses the table constructors;
    /// a table with a gap would otherwise only fail at roll time.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Catalog failed validation: {}", e))?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_a_table_that_stops_short() {
        let short = crate::builtin::CATALOG_RON.replacen(
            "(max: 12, result: Plate)",
            "(max: 11, result: Plate)",
            1,
        );
        assert_ne!(short, crate::builtin::CATALOG_RON);
        let err = CatalogLoader::parse(&short).unwrap_err();
        assert!(err.to_string().contains("validation"), "{err}");
    }

    #[test]
    fn reports_the_file_it_could_not_read() {
        let err = CatalogLoader::load(Path::new("/nonexistent/catalog.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.ron"));
    }
}
