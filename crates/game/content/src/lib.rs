//! Data-driven FORGE content and its loaders.
//!
//! This crate houses the rule-book data and loaders for its RON/TOML files:
//! - Character catalog: names, occupations, equipment, flavor lists, roll tables (RON)
//! - Generator tables for quests, wilderness, and the oracle (RON)
//! - Presentation bounds and first-run defaults (TOML)
//!
//! The same files are embedded into the crate, so a binary works without a
//! data directory. A directory passed to [`ContentFactory`] overrides them
//! file by file.
//!
//! All loaders use forge-core types directly with serde for deserialization.

pub mod tables;

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use tables::GeneratorTables;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, Content, ContentFactory, LoadResult, TablesLoader};
