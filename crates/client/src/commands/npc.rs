//! Roll an NPC, or show the NPC of the current quest.

use anyhow::Result;
use clap::Parser;
use forge_core::CompetenceTier;
use forge_runtime::RuntimeConfig;

use super::{save_if_requested, show_record};
use crate::context::open_session;

/// Roll a new NPC
#[derive(Parser, Debug)]
pub struct NpcCmd {
    /// Competence tier instead of rolling one
    /// (liability, average, competent, very-capable, exceptional)
    #[arg(long)]
    pub competence: Option<CompetenceTier>,

    /// Open the NPC of the current Character Based quest instead of rolling
    #[arg(long, conflicts_with = "competence")]
    pub quest: bool,

    /// Dice seed, overriding FORGE_SEED
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,

    /// Save the NPC under this slot name
    #[arg(long, value_name = "SLOT")]
    pub save: Option<String>,
}

impl NpcCmd {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let mut session = open_session(config, self.seed)?;
        let record = if self.quest {
            session.open_quest_npc()?;
            match session.take_handed_npc() {
                Some(npc) => npc,
                None => anyhow::bail!("The current quest did not hand over an NPC"),
            }
        } else {
            session.roll_npc(self.competence)?
        };
        show_record(&record, self.json)?;
        save_if_requested(&session, self.save.as_deref(), &record)
    }
}
