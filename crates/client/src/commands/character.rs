//! Roll a player character.

use anyhow::Result;
use clap::Parser;
use forge_runtime::RuntimeConfig;

use super::{save_if_requested, show_record};
use crate::context::open_session;

/// Roll a new player character
#[derive(Parser, Debug)]
pub struct CharacterCmd {
    /// Raise the new character to this level (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub level: Option<u8>,

    /// Dice seed, overriding FORGE_SEED
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,

    /// Save the character under this slot name
    #[arg(long, value_name = "SLOT")]
    pub save: Option<String>,
}

impl CharacterCmd {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let mut session = open_session(config, self.seed)?;
        let record = session.roll_character(self.level)?;
        show_record(&record, self.json)?;
        save_if_requested(&session, self.save.as_deref(), &record)
    }
}
