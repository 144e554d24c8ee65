//! Configuration loader.

use std::path::Path;

use forge_core::ForgeConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`ForgeConfig`] from TOML files.
///
/// Missing keys take their defaults, so an empty file is valid.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<ForgeConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ForgeConfig> {
        let config: ForgeConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{Season, Terrain};

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("oracle_history_limit = 3\ndefault_season = \"Cold\"\n").unwrap();
        assert_eq!(config.oracle_history_limit, 3);
        assert_eq!(config.default_season, Season::Cold);
        assert_eq!(config.quest_history_limit, ForgeConfig::DEFAULT_QUEST_HISTORY);
        assert_eq!(config.default_terrain, Terrain::Plains);
    }

    #[test]
    fn unknown_terrain_is_an_error() {
        let err = ConfigLoader::parse("default_terrain = \"Tundra\"\n").unwrap_err();
        assert!(err.to_string().contains("config TOML"));
    }
}
