use std::fs;
use std::path::PathBuf;

use forge_core::CharacterRecord;

use super::FileRepository;
use crate::repository::{CharacterRepository, RepositoryError, Result, SaveKind, validate_slot};

impl FileRepository {
    fn slot_path(&self, kind: SaveKind, slot: &str) -> Result<PathBuf> {
        validate_slot(slot)?;
        Ok(self
            .base_dir
            .join(kind.dir_name())
            .join(format!("{slot}.json")))
    }
}

impl CharacterRepository for FileRepository {
    fn save(&self, kind: SaveKind, slot: &str, record: &CharacterRecord) -> Result<()> {
        let path = self.slot_path(kind, slot)?;
        self.write_json(&path, record)
    }

    fn load(&self, kind: SaveKind, slot: &str) -> Result<Option<CharacterRecord>> {
        let path = self.slot_path(kind, slot)?;
        self.read_json(&path)
    }

    fn exists(&self, kind: SaveKind, slot: &str) -> bool {
        self.slot_path(kind, slot).is_ok_and(|path| path.exists())
    }

    fn delete(&self, kind: SaveKind, slot: &str) -> Result<()> {
        let path = self.slot_path(kind, slot)?;
        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted {}", path.display());
        }
        Ok(())
    }

    fn list_slots(&self, kind: SaveKind) -> Result<Vec<String>> {
        let dir = self.base_dir.join(kind.dir_name());
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut slots = Vec::new();
        for entry in fs::read_dir(&dir).map_err(RepositoryError::Io)? {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(slot) = filename.strip_suffix(".json")
                && validate_slot(slot).is_ok()
            {
                slots.push(slot.to_string());
            }
        }

        slots.sort_unstable();
        Ok(slots)
    }
}
