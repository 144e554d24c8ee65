//! Show a saved record or list save slots.

use anyhow::Result;
use clap::Parser;
use console::style;
use forge_runtime::RuntimeConfig;

use super::{save_kind, show_record};
use crate::context::open_session;

/// Show a saved character, or list saves when no slot is given
#[derive(Parser, Debug)]
pub struct ShowCmd {
    /// Slot name to show
    pub slot: Option<String>,

    /// Look in the NPC saves
    #[arg(long)]
    pub npc: bool,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowCmd {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let session = open_session(config, None)?;
        let kind = save_kind(self.npc);

        let Some(slot) = self.slot else {
            let slots = session.list_slots(kind)?;
            if slots.is_empty() {
                println!("{}", style(format!("No saves in {}", kind.dir_name())).dim());
            }
            for slot in slots {
                println!("{slot}");
            }
            return Ok(());
        };

        let record = session.load_character(kind, &slot)?;
        show_record(&record, self.json)
    }
}
