//! Freeform dice roller.

use anyhow::Result;
use clap::Parser;
use console::style;
use forge_core::DiceExpr;
use forge_runtime::RuntimeConfig;

use crate::context::open_session;
use crate::render;

/// Roll dice, or show and clear the roll history
#[derive(Parser, Debug)]
pub struct DiceCmd {
    /// Expressions such as 2d6, d20, or 3d8
    #[arg(required_unless_present_any = ["history", "clear"])]
    pub exprs: Vec<DiceExpr>,

    /// List recent rolls, newest first
    #[arg(long, conflicts_with = "clear")]
    pub history: bool,

    /// Clear the roll history
    #[arg(long)]
    pub clear: bool,

    /// Dice seed, overriding FORGE_SEED
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DiceCmd {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let mut session = open_session(config, self.seed)?;

        if self.clear {
            session.clear_dice_history()?;
            eprintln!("{} Dice history cleared", style("✓").green().bold());
        }
        if !self.exprs.is_empty() {
            for roll in session.roll_dice(&self.exprs)? {
                render::print_roll(&roll);
            }
        }
        if self.history {
            let entries: Vec<_> = session.dice_history().iter().collect();
            render::print_dice_history(&entries);
        }
        Ok(())
    }
}
