//! Runtime shell around the FORGE generators.
//!
//! This crate wires the pure `forge-core` engine to content, dice, and
//! persistence. Consumers open a [`Session`] over any [`SaveStore`] and drive
//! every generator through it.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its dice seeding
//! - [`navigation`] routes typed payloads between generator screens
//! - [`repository`] stores saves and histories on disk or in memory
//! - [`config`] and [`dirs`] resolve environment and platform paths
pub mod config;
pub mod dirs;
pub mod error;
pub mod navigation;
pub mod repository;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, SessionError};
pub use navigation::{NavigationPayload, Navigator, Screen};
pub use repository::{
    CharacterRepository, DiceLogEntry, FileRepository, HistoryRepository, InMemoryRepository,
    OracleLogEntry, RepositoryError, SaveKind, SaveStore, SavedQuest, Stamped, WildernessRepository,
    WildernessState,
};
pub use session::{Session, seeded_dice};
