//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in {path}: {message}")]
    Json { path: String, message: String },

    /// Slots become file names, so path separators and dots are refused.
    #[error("invalid save slot '{0}': use letters, digits, '-' or '_'")]
    InvalidSlot(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Check a slot name is safe to use as a file stem.
pub fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot.len() <= 64
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidSlot(slot.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_names() {
        assert!(validate_slot("hero-1").is_ok());
        assert!(validate_slot("Old_Tom").is_ok());
        for bad in ["", "../escape", "a/b", "dot.json", "with space"] {
            assert!(matches!(validate_slot(bad), Err(RepositoryError::InvalidSlot(_))), "{bad}");
        }
    }
}
