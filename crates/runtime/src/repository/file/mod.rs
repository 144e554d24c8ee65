//! File-based repository storing JSON documents under one save directory.
//!
//! # Layout
//!
//! ```text
//! save_dir/
//! ├── characters/<slot>.json
//! ├── npcs/<slot>.json
//! ├── current_quest.json
//! ├── quests.json
//! ├── oracle.json
//! ├── dice.json
//! └── wilderness.json
//! ```

mod characters;
mod history;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repository::{RepositoryError, Result, WildernessRepository, WildernessState};

pub struct FileRepository {
    base_dir: PathBuf,
}

impl FileRepository {
    pub const CURRENT_QUEST_FILE: &'static str = "current_quest.json";
    pub const QUESTS_FILE: &'static str = "quests.json";
    pub const ORACLE_FILE: &'static str = "oracle.json";
    pub const DICE_FILE: &'static str = "dice.json";
    pub const WILDERNESS_FILE: &'static str = "wilderness.json";

    /// Create a repository rooted at `base_dir`, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Serialize `value` and swap it into place through a temp file.
    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(value).map_err(|e| json_error(path, e))?;
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {}", path.display());
        Ok(())
    }

    /// Read a JSON document, `None` if the file does not exist.
    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(RepositoryError::Io)?;
        let value = serde_json::from_slice(&bytes).map_err(|e| json_error(path, e))?;

        tracing::debug!("Loaded {}", path.display());
        Ok(Some(value))
    }
}

fn json_error(path: &Path, error: serde_json::Error) -> RepositoryError {
    RepositoryError::Json {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

impl WildernessRepository for FileRepository {
    fn load_wilderness(&self) -> Result<Option<WildernessState>> {
        self.read_json(&self.base_dir.join(Self::WILDERNESS_FILE))
    }

    fn save_wilderness(&self, state: &WildernessState) -> Result<()> {
        self.write_json(&self.base_dir.join(Self::WILDERNESS_FILE), state)
    }
}
