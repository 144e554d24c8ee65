//! Repository layer for generator output.
//!
//! Repositories hold data the user CHOSE to keep:
//! - Saved characters and NPCs, by slot
//! - Quest, oracle, and dice histories
//! - The wilderness state
//!
//! Static rule-book content is loaded by `forge-content`, not stored here.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result, validate_slot};
pub use file::FileRepository;
pub use memory::InMemoryRepository;
pub use traits::{CharacterRepository, HistoryRepository, SaveStore, WildernessRepository};
pub use types::{DiceLogEntry, OracleLogEntry, SaveKind, SavedQuest, Stamped, WildernessState};
