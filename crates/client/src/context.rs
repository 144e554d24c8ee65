//! Session assembly for a single command invocation.

use anyhow::{Context, Result};
use forge_content::{Content, ContentFactory};
use forge_runtime::{FileRepository, RuntimeConfig, Session, seeded_dice};

pub type CliSession = Session<FileRepository>;

/// Open a session over the configured save directory.
///
/// `seed` overrides `FORGE_SEED`. Content comes from `FORGE_DATA_DIR` when
/// set, falling back to the built-in tables file by file.
pub fn open_session(config: &RuntimeConfig, seed: Option<u64>) -> Result<CliSession> {
    let content = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir)
            .load_content()
            .with_context(|| format!("Failed to load content from {}", dir.display()))?,
        None => Content::builtin()?,
    };

    let save_dir = config.save_dir();
    tracing::debug!("Save directory: {}", save_dir.display());
    let store = FileRepository::new(&save_dir)
        .with_context(|| format!("Failed to open save directory {}", save_dir.display()))?;

    let dice = seeded_dice(seed.or(config.seed));
    Ok(Session::open(content, store, Box::new(dice))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &std::path::Path, seed: u64) -> RuntimeConfig {
        RuntimeConfig {
            save_dir: Some(dir.to_path_buf()),
            seed: Some(seed),
            ..RuntimeConfig::default()
        }
    }

    #[test]
    fn same_seed_rolls_the_same_character() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), 77);

        let first = open_session(&config, None).unwrap().roll_character(None).unwrap();
        let second = open_session(&config, None).unwrap().roll_character(None).unwrap();
        assert_eq!(first, second);

        let other = open_session(&config, Some(78)).unwrap().roll_character(None).unwrap();
        assert_eq!(other.sheet.attributes.iter().count(), 6);
    }

    #[test]
    fn content_dir_without_files_uses_builtin_content() {
        let saves = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        let config = RuntimeConfig {
            data_dir: Some(data.path().to_path_buf()),
            ..config(saves.path(), 1)
        };
        let session = open_session(&config, None).unwrap();
        assert_eq!(session.content().catalog.names.len(), 216);
    }
}
