//! Subcommands of the `forge` binary.
//!
//! Each command owns its CLI args and opens its own session.

mod character;
mod dice;
mod edit;
mod npc;
mod oracle;
mod quest;
mod show;
mod wilderness;

pub use character::CharacterCmd;
pub use dice::DiceCmd;
pub use edit::EditCmd;
pub use npc::NpcCmd;
pub use oracle::OracleCommand;
pub use quest::QuestCmd;
pub use show::ShowCmd;
pub use wilderness::WildernessCmd;

use anyhow::Result;
use console::style;
use forge_core::CharacterRecord;
use forge_runtime::SaveKind;

use crate::context::CliSession;
use crate::render;

/// Print a record, as JSON or as a sheet.
pub(crate) fn show_record(record: &CharacterRecord, json: bool) -> Result<()> {
    if json {
        render::print_json(record)
    } else {
        render::print_character(record);
        Ok(())
    }
}

/// Save `record` under `slot` when one was given.
pub(crate) fn save_if_requested(
    session: &CliSession,
    slot: Option<&str>,
    record: &CharacterRecord,
) -> Result<()> {
    let Some(slot) = slot else {
        return Ok(());
    };
    let kind = session.save_character(slot, record)?;
    eprintln!(
        "{} Saved to {}/{}",
        style("✓").green().bold(),
        kind.dir_name(),
        style(slot).cyan()
    );
    Ok(())
}

pub(crate) const fn save_kind(npc: bool) -> SaveKind {
    if npc { SaveKind::Npc } else { SaveKind::Character }
}
