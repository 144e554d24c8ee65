//! Hex-crawl weather and terrain.

use crate::catalog::{CatalogError, TWO_D6};
use crate::dice::DiceSource;
use crate::error::{ErrorSeverity, ForgeError};
use crate::tables::{RangeTable, TableError};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    #[default]
    #[strum(to_string = "Wet Season", serialize = "wet")]
    Wet,
    #[strum(to_string = "Dry Season", serialize = "dry")]
    Dry,
    #[strum(to_string = "Cold Season", serialize = "cold")]
    Cold,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Plains,
    Forest,
    Hills,
    Mountains,
    Swamp,
    Desert,
}

/// 2d6 weather table per season.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherTables {
    pub wet: RangeTable<String>,
    pub dry: RangeTable<String>,
    pub cold: RangeTable<String>,
}

impl WeatherTables {
    pub const fn for_season(&self, season: Season) -> &RangeTable<String> {
        match season {
            Season::Wet => &self.wet,
            Season::Dry => &self.dry,
            Season::Cold => &self.cold,
        }
    }
}

/// 2d6 next-hex table per current terrain.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainTables {
    pub plains: RangeTable<Terrain>,
    pub forest: RangeTable<Terrain>,
    pub hills: RangeTable<Terrain>,
    pub mountains: RangeTable<Terrain>,
    pub swamp: RangeTable<Terrain>,
    pub desert: RangeTable<Terrain>,
}

impl TerrainTables {
    pub const fn from_terrain(&self, terrain: Terrain) -> &RangeTable<Terrain> {
        match terrain {
            Terrain::Plains => &self.plains,
            Terrain::Forest => &self.forest,
            Terrain::Hills => &self.hills,
            Terrain::Mountains => &self.mountains,
            Terrain::Swamp => &self.swamp,
            Terrain::Desert => &self.desert,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildernessTables {
    pub weather: WeatherTables,
    pub terrain: TerrainTables,
}

impl WildernessTables {
    pub fn validate(&self) -> Result<(), CatalogError> {
        let (min, max) = TWO_D6;
        let checks = [
            ("weather.wet", self.weather.wet.covers(min, max)),
            ("weather.dry", self.weather.dry.covers(min, max)),
            ("weather.cold", self.weather.cold.covers(min, max)),
            ("terrain.plains", self.terrain.plains.covers(min, max)),
            ("terrain.forest", self.terrain.forest.covers(min, max)),
            ("terrain.hills", self.terrain.hills.covers(min, max)),
            ("terrain.mountains", self.terrain.mountains.covers(min, max)),
            ("terrain.swamp", self.terrain.swamp.covers(min, max)),
            ("terrain.desert", self.terrain.desert.covers(min, max)),
        ];
        for (table, result) in checks {
            result.map_err(|source| CatalogError::Table { table, source })?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherResult {
    pub season: Season,
    pub roll: i32,
    pub weather: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainResult {
    pub from: Terrain,
    pub roll: i32,
    pub terrain: Terrain,
}

pub fn roll_weather<D>(tables: &WildernessTables, season: Season, dice: &mut D) -> Result<WeatherResult, TableError>
where
    D: DiceSource + ?Sized,
{
    let (roll, weather) = tables.weather.for_season(season).roll(dice, 2, 6)?;
    Ok(WeatherResult {
        season,
        roll,
        weather: weather.clone(),
    })
}

pub fn roll_next_terrain<D>(
    tables: &WildernessTables,
    current: Terrain,
    dice: &mut D,
) -> Result<TerrainResult, TableError>
where
    D: DiceSource + ?Sized,
{
    let (roll, &terrain) = tables.terrain.from_terrain(current).roll(dice, 2, 6)?;
    Ok(TerrainResult {
        from: current,
        roll,
        terrain,
    })
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WildernessError {
    #[error("no next hex has been rolled")]
    NoNextHex,

    /// The rolled hex was rolled from a terrain the party has since left.
    #[error("next hex was rolled from {rolled_from}, but the party is in {current}")]
    StaleNextHex { rolled_from: Terrain, current: Terrain },
}

impl ForgeError for WildernessError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoNextHex => "WILDERNESS_NO_NEXT_HEX",
            Self::StaleNextHex { .. } => "WILDERNESS_STALE_NEXT_HEX",
        }
    }
}

/// The single active wilderness state of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildernessRecord {
    pub season: Season,
    pub current: Terrain,
    pub weather: Option<WeatherResult>,
    pub next_hex: Option<TerrainResult>,
}

impl WildernessRecord {
    pub fn new(season: Season, current: Terrain) -> Self {
        Self {
            season,
            current,
            weather: None,
            next_hex: None,
        }
    }

    /// Weather rolled under the old season is kept until re-rolled.
    pub fn with_season(&self, season: Season) -> Self {
        Self {
            season,
            ..self.clone()
        }
    }

    /// Setting the current terrain directly discards a pending next hex.
    pub fn with_terrain(&self, current: Terrain) -> Self {
        Self {
            current,
            next_hex: None,
            ..self.clone()
        }
    }

    pub fn with_weather(&self, weather: WeatherResult) -> Self {
        Self {
            weather: Some(weather),
            ..self.clone()
        }
    }

    pub fn with_next_hex(&self, next_hex: TerrainResult) -> Self {
        Self {
            next_hex: Some(next_hex),
            ..self.clone()
        }
    }

    /// Step into the rolled hex; its terrain becomes the current terrain.
    pub fn move_to_next_hex(&self) -> Result<Self, WildernessError> {
        let next = self.next_hex.ok_or(WildernessError::NoNextHex)?;
        if next.from != self.current {
            return Err(WildernessError::StaleNextHex {
                rolled_from: next.from,
                current: self.current,
            });
        }
        Ok(Self {
            current: next.terrain,
            next_hex: None,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{PcgRng, ScriptedDice};
    use crate::fixtures;
    use strum::IntoEnumIterator;

    #[test]
    fn weather_by_season() {
        let tables = fixtures::wilderness_tables();
        tables.validate().unwrap();
        let cases = [
            (Season::Wet, [1, 1], "Sleet, wind"),
            (Season::Wet, [3, 4], "Clear, chilly"),
            (Season::Dry, [4, 4], "Hot, wind"),
            (Season::Dry, [5, 5], "Boiling, still"),
            (Season::Cold, [3, 3], "Icy wind, dry"),
            (Season::Cold, [6, 6], "Snowstorm"),
        ];
        for (season, faces, expected) in cases {
            let weather = roll_weather(&tables, season, &mut ScriptedDice::new(faces)).unwrap();
            assert_eq!(weather.weather, expected, "{season} {faces:?}");
            assert_eq!(weather.roll, (faces[0] + faces[1]) as i32);
        }
    }

    #[test]
    fn same_key_and_roll_give_same_terrain() {
        let tables = fixtures::wilderness_tables();
        for terrain in Terrain::iter() {
            let a = roll_next_terrain(&tables, terrain, &mut ScriptedDice::new([3, 4])).unwrap();
            let b = roll_next_terrain(&tables, terrain, &mut ScriptedDice::new([4, 3])).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.from, terrain);
        }
    }

    #[test]
    fn middle_roll_usually_stays_put() {
        let tables = fixtures::wilderness_tables();
        for terrain in Terrain::iter() {
            let result = roll_next_terrain(&tables, terrain, &mut ScriptedDice::new([3, 4])).unwrap();
            assert_eq!(result.terrain, terrain);
        }
        let swamp = roll_next_terrain(&tables, Terrain::Plains, &mut ScriptedDice::new([1, 1])).unwrap();
        assert_eq!(swamp.terrain, Terrain::Swamp);
    }

    #[test]
    fn moving_adopts_the_rolled_terrain() {
        let tables = fixtures::wilderness_tables();
        let record = WildernessRecord::new(Season::Dry, Terrain::Plains);
        assert_eq!(record.move_to_next_hex(), Err(WildernessError::NoNextHex));

        let next = roll_next_terrain(&tables, record.current, &mut ScriptedDice::new([6, 6])).unwrap();
        let moved = record.with_next_hex(next).move_to_next_hex().unwrap();
        assert_eq!(moved.current, Terrain::Mountains);
        assert!(moved.next_hex.is_none());
    }

    #[test]
    fn stale_next_hex_is_rejected() {
        let tables = fixtures::wilderness_tables();
        let record = WildernessRecord::new(Season::Wet, Terrain::Forest);
        let next = roll_next_terrain(&tables, Terrain::Forest, &mut PcgRng::new(4)).unwrap();
        let drifted = WildernessRecord {
            current: Terrain::Desert,
            ..record.with_next_hex(next)
        };
        assert!(matches!(
            drifted.move_to_next_hex(),
            Err(WildernessError::StaleNextHex { .. })
        ));
        assert!(record.with_next_hex(next).with_terrain(Terrain::Hills).next_hex.is_none());
    }

    #[test]
    fn season_labels() {
        assert_eq!(Season::Cold.to_string(), "Cold Season");
        assert_eq!("dry".parse::<Season>().unwrap(), Season::Dry);
        assert_eq!("Wet Season".parse::<Season>().unwrap(), Season::Wet);
        assert_eq!("mountains".parse::<Terrain>().unwrap(), Terrain::Mountains);
    }
}
