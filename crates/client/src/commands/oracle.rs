//! Oracle subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use forge_core::{InspirationPart, Likelihood};
use forge_runtime::RuntimeConfig;

use crate::context::open_session;
use crate::render;

#[derive(Subcommand, Debug)]
pub enum OracleCommand {
    /// Ask a yes/no question
    Ask(Ask),

    /// Roll a random event
    Event(SeedArg),

    /// Roll a verb and a noun for inspiration
    Inspire(Inspire),

    /// List recent oracle results, newest first
    History,

    /// Clear the oracle history
    Clear,
}

#[derive(Parser, Debug)]
pub struct Ask {
    /// How likely the answer is yes (impossible, unlikely, even, likely, certain)
    #[arg(default_value = "even")]
    pub likelihood: Likelihood,

    #[command(flatten)]
    pub seed: SeedArg,
}

#[derive(Parser, Debug)]
pub struct Inspire {
    /// Re-roll only the verb or only the noun of the last inspiration
    #[arg(long, value_name = "PART")]
    pub reroll: Option<InspirationPart>,

    #[command(flatten)]
    pub seed: SeedArg,
}

#[derive(Parser, Debug)]
pub struct SeedArg {
    /// Dice seed, overriding FORGE_SEED
    #[arg(long)]
    pub seed: Option<u64>,
}

impl OracleCommand {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        match self {
            Self::Ask(ask) => {
                let mut session = open_session(config, ask.seed.seed)?;
                let answer = session.ask_oracle(ask.likelihood)?;
                render::print_answer(&answer);
                if answer.random_event_due {
                    let event = session.random_event()?;
                    render::print_event(&event);
                }
            }
            Self::Event(arg) => {
                let mut session = open_session(config, arg.seed)?;
                render::print_event(&session.random_event()?);
            }
            Self::Inspire(inspire) => {
                let mut session = open_session(config, inspire.seed.seed)?;
                let inspiration = match inspire.reroll {
                    Some(part) => session.reroll_inspiration(part)?,
                    None => session.inspiration()?,
                };
                render::print_inspiration(&inspiration);
            }
            Self::History => {
                let session = open_session(config, None)?;
                let entries: Vec<_> = session.oracle_history().iter().collect();
                render::print_oracle_history(&entries);
            }
            Self::Clear => {
                let mut session = open_session(config, None)?;
                session.clear_oracle_history()?;
                eprintln!("{} Oracle history cleared", style("✓").green().bold());
            }
        }
        Ok(())
    }
}
