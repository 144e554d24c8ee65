//! Hex-crawl weather and terrain.

use anyhow::Result;
use clap::Parser;
use forge_core::{Season, Terrain};
use forge_runtime::RuntimeConfig;

use crate::context::open_session;
use crate::render;

/// Show or advance the wilderness state
///
/// Options apply in order: season, terrain, weather roll, move, next-hex roll.
#[derive(Parser, Debug)]
pub struct WildernessCmd {
    /// Change the season (wet, dry, cold)
    #[arg(long)]
    pub season: Option<Season>,

    /// Set the current terrain directly; discards a pending next hex
    #[arg(long)]
    pub terrain: Option<Terrain>,

    /// Roll weather for the current season
    #[arg(long)]
    pub weather: bool,

    /// Move into the rolled next hex
    #[arg(long = "move")]
    pub move_on: bool,

    /// Roll the next hex from the current terrain
    #[arg(long)]
    pub next_hex: bool,

    /// Dice seed, overriding FORGE_SEED
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the state as JSON
    #[arg(long)]
    pub json: bool,
}

impl WildernessCmd {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let mut session = open_session(config, self.seed)?;
        let mut state = session.wilderness()?;

        if let Some(season) = self.season {
            state = session.set_season(season)?;
        }
        if let Some(terrain) = self.terrain {
            state = session.set_terrain(terrain)?;
        }
        if self.weather {
            state = session.roll_weather()?;
        }
        if self.move_on {
            state = session.move_to_next_hex()?;
        }
        if self.next_hex {
            state = session.roll_next_hex()?;
        }

        if self.json {
            render::print_json(&state)
        } else {
            render::print_wilderness(&state);
            Ok(())
        }
    }
}
