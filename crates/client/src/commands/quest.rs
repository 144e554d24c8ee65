//! Quest generator.
//!
//! The working quest persists between invocations, so `--reroll` and
//! `--type` act on whatever the last `forge quest` rolled.

use anyhow::Result;
use clap::Parser;
use console::style;
use forge_core::{QuestField, QuestType};
use forge_runtime::RuntimeConfig;

use crate::context::open_session;
use crate::render;

/// Roll a quest, or adjust and save the current one
#[derive(Parser, Debug)]
pub struct QuestCmd {
    /// Re-roll one field of the current quest (type, reward, action, subject, location)
    #[arg(long, value_name = "FIELD", conflicts_with = "quest_type")]
    pub reroll: Option<QuestField>,

    /// Switch the current quest to this type (character, item, location)
    #[arg(long = "type", value_name = "TYPE")]
    pub quest_type: Option<QuestType>,

    /// Push the current quest onto the quest history
    #[arg(long)]
    pub save: bool,

    /// Hand the quest's NPC to the NPC generator and show it
    #[arg(long)]
    pub npc: bool,

    /// Replace the NPC of the current Character Based quest
    #[arg(long)]
    pub new_npc: bool,

    /// List saved quests, newest first
    #[arg(long, exclusive = true)]
    pub history: bool,

    /// Dice seed, overriding FORGE_SEED
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the quest as JSON
    #[arg(long)]
    pub json: bool,
}

impl QuestCmd {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let mut session = open_session(config, self.seed)?;

        if self.history {
            let saved: Vec<_> = session.quest_history().iter().collect();
            render::print_quest_history(&saved);
            return Ok(());
        }

        let mut quest = match (self.reroll, self.quest_type) {
            (Some(field), _) => session.reroll_quest(field)?,
            (None, Some(quest_type)) => session.set_quest_type(quest_type)?,
            // Flags that act on a quest keep the current one.
            (None, None) if self.save || self.npc || self.new_npc => match session.current_quest()? {
                Some(quest) => quest,
                None => session.roll_quest()?,
            },
            (None, None) => session.roll_quest()?,
        };
        if self.new_npc {
            quest = session.reroll_quest_npc()?;
        }

        if self.json {
            render::print_json(&quest)?;
        } else {
            render::print_quest(&quest);
        }

        if self.npc {
            session.open_quest_npc()?;
            if let Some(npc) = session.take_handed_npc() {
                println!();
                if self.json {
                    render::print_json(&npc)?;
                } else {
                    render::print_character(&npc);
                }
            }
        }

        if self.save {
            session.save_current_quest()?;
            let kept = session.quest_history().len();
            eprintln!(
                "{} Quest saved ({} in history)",
                style("✓").green().bold(),
                style(kept).cyan()
            );
        }
        Ok(())
    }
}
