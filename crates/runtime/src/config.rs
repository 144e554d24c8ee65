//! Process-level configuration read from the environment.
use std::env;
use std::path::PathBuf;

use crate::dirs;

/// Where FORGE reads content, writes saves and logs, and how it seeds dice.
///
/// Rule tables and history bounds live in [`forge_core::ForgeConfig`]; this
/// only covers what differs between machines or runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory whose `catalog.ron`, `tables.ron`, or `config.toml` override
    /// the built-in content.
    pub data_dir: Option<PathBuf>,
    pub save_dir: Option<PathBuf>,
    /// Fixed dice seed; a fresh one is drawn from entropy when unset.
    pub seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FORGE_DATA_DIR` - Content override directory (default: built-in content)
    /// - `FORGE_SAVE_DIR` - Save directory (default: platform data dir)
    /// - `FORGE_SEED` - Dice seed as an unsigned integer (default: random)
    /// - `FORGE_LOG_DIR` - Directory for the log file (default: no file log)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("FORGE_DATA_DIR"),
            save_dir: read_env::<PathBuf>("FORGE_SAVE_DIR"),
            seed: read_env::<u64>("FORGE_SEED"),
            log_dir: read_env::<PathBuf>("FORGE_LOG_DIR"),
        }
    }

    /// Configured save directory, or the platform default.
    pub fn save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(dirs::data_dir)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|value| !value.is_empty())?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_save_dir_wins() {
        let config = RuntimeConfig {
            save_dir: Some(PathBuf::from("/tmp/forge-saves")),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.save_dir(), PathBuf::from("/tmp/forge-saves"));
    }
}
