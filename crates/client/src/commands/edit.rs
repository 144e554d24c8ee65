//! Edit a saved character or NPC.
//!
//! Every edit loads the slot, applies one change, and saves the result back
//! to the same slot. A rejected edit leaves the save untouched.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use forge_core::{Attribute, CharacterRecord, CompetenceTier, FlavorField};
use forge_runtime::RuntimeConfig;

use super::{save_kind, show_record};
use crate::context::{CliSession, open_session};

/// Edit a saved character or NPC
#[derive(Parser, Debug)]
pub struct EditCmd {
    /// Slot name of the save to edit
    pub slot: String,

    /// Edit an NPC save
    #[arg(long, global = true)]
    pub npc: bool,

    /// Print the edited record as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub change: Change,
}

#[derive(Subcommand, Debug)]
pub enum Change {
    /// Make an attribute primary, or clear its primary flag
    TogglePrimary { attribute: Attribute },

    /// Swap the scores of two attributes
    Swap { first: Attribute, second: Attribute },

    /// Set a player character's level
    Level { level: u8 },

    /// Equip a weapon from the catalog
    Weapon { name: String },

    /// Wear armour from the catalog (none, leather, chain, plate, or a name)
    Armour { name: String },

    /// Put a helmet on or take it off
    Helmet {
        #[arg(action = clap::ArgAction::Set)]
        on: bool,
    },

    /// Carry a shield or put it away
    Shield {
        #[arg(action = clap::ArgAction::Set)]
        on: bool,
    },

    /// Replace an occupation (slot 1 or 2)
    Occupation {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        index: u8,
        name: String,
    },

    /// Rewrite a flavor line (appearance, detail, clothing, quirk)
    Flavor { field: FlavorField, value: String },

    /// Rename the character
    Name { name: String },

    /// Change alignment
    Alignment { alignment: String },

    /// Replace a first hit die of 2 or less with a 4
    TakeFour,

    /// Move an NPC to another competence tier
    Competence { tier: CompetenceTier },
}

impl Change {
    fn apply(self, record: &CharacterRecord, session: &CliSession) -> Result<CharacterRecord> {
        let catalog = &session.content().catalog;
        let edited = match self {
            Self::TogglePrimary { attribute } => record.toggle_primary(attribute)?,
            Self::Swap { first, second } => record.swap_attributes(first, second)?,
            Self::Level { level } => record.set_level(level)?,
            Self::Weapon { name } => {
                let weapon = catalog
                    .weapon(&name)
                    .with_context(|| format!("Unknown weapon '{name}'"))?;
                record.equip_weapon(weapon.clone())?
            }
            Self::Armour { name } => {
                let armour = catalog
                    .armour_named(&name)
                    .with_context(|| format!("Unknown armour '{name}'"))?;
                record.equip_armour(armour.clone())?
            }
            Self::Helmet { on } => record.set_helmet(on)?,
            Self::Shield { on } => record.set_shield(on)?,
            Self::Occupation { index, name } => record.set_occupation(usize::from(index - 1), name)?,
            Self::Flavor { field, value } => record.set_flavor(field, value)?,
            Self::Name { name } => record.rename(name)?,
            Self::Alignment { alignment } => record.set_alignment(alignment)?,
            Self::TakeFour => record.take_four()?,
            Self::Competence { tier } => record.set_competence(tier)?,
        };
        Ok(edited)
    }
}

impl EditCmd {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let session = open_session(config, None)?;
        let kind = save_kind(self.npc);
        let record = session.load_character(kind, &self.slot)?;

        let edited = self.change.apply(&record, &session)?;
        session.save_character(&self.slot, &edited)?;

        show_record(&edited, self.json)?;
        eprintln!("{} Updated {}", style("✓").green().bold(), style(&self.slot).cyan());
        Ok(())
    }
}
