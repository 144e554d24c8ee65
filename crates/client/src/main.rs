//! FORGE tabletop generator.
//!
//! Rolls characters, NPCs, quests, wilderness hexes, oracle answers, and
//! dice from the terminal. Saves and histories live under the platform data
//! directory unless `FORGE_SAVE_DIR` points elsewhere.

mod commands;
mod context;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use forge_runtime::RuntimeConfig;

use commands::{
    CharacterCmd, DiceCmd, EditCmd, NpcCmd, OracleCommand, QuestCmd, ShowCmd, WildernessCmd,
};

/// FORGE character, quest, and oracle generator
#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Random generators for the FORGE tabletop game", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Roll a new player character
    Character(CharacterCmd),

    /// Roll a new NPC, or show the NPC handed over by a quest
    Npc(NpcCmd),

    /// Edit a saved character or NPC
    Edit(EditCmd),

    /// Show a saved character or NPC, or list saves
    Show(ShowCmd),

    /// Roll, re-roll, and save quests
    Quest(QuestCmd),

    /// Weather and next-hex rolls for the hex crawl
    Wilderness(WildernessCmd),

    /// Yes/no oracle, random events, and inspiration
    #[command(subcommand)]
    Oracle(OracleCommand),

    /// Roll dice expressions such as 2d6 or d20
    Roll(DiceCmd),
}

fn main() -> Result<()> {
    // Load .env file if it exists (FORGE_SAVE_DIR, RUST_LOG, ...)
    dotenvy::dotenv().ok();

    let config = RuntimeConfig::from_env();
    logging::setup_logging(config.log_dir.as_deref())?;

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Character(cmd) => cmd.execute(&config),
        Command::Npc(cmd) => cmd.execute(&config),
        Command::Edit(cmd) => cmd.execute(&config),
        Command::Show(cmd) => cmd.execute(&config),
        Command::Quest(cmd) => cmd.execute(&config),
        Command::Wilderness(cmd) => cmd.execute(&config),
        Command::Oracle(cmd) => cmd.execute(&config),
        Command::Roll(cmd) => cmd.execute(&config),
    };

    if let Err(error) = &result {
        tracing::error!("{error:#}");
    }
    result
}
