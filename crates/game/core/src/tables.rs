//! Weighted range tables.
//!
//! A table is an ordered list of `(max inclusive, result)` bands. A roll maps
//! to the first band whose `max` is at least the roll, so a 2d6 table with
//! bands `4, 8, 11, 12` reads as 2–4, 5–8, 9–11, 12.
//!
//! Tables arrive from data files, so [`RangeTable::covers`] checks the band
//! layout against the roll domain once at load time. Lookups after that only
//! fail for rolls beyond the last band.

use crate::dice::DiceSource;
use crate::error::{ErrorSeverity, ForgeError};

/// One band of a [`RangeTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Band<T> {
    pub max: i32,
    pub result: T,
}

impl<T> Band<T> {
    pub const fn new(max: i32, result: T) -> Self {
        Self { max, result }
    }
}

/// Ordered bands covering a contiguous roll range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RangeTable<T> {
    bands: Vec<Band<T>>,
}

impl<T> RangeTable<T> {
    /// Build a table, checking that bands are non-empty and strictly increasing.
    pub fn new(bands: Vec<Band<T>>) -> Result<Self, TableError> {
        let table = Self { bands };
        table.check_order()?;
        Ok(table)
    }

    /// Build a table from `(max, result)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i32, T)>) -> Result<Self, TableError> {
        Self::new(
            pairs
                .into_iter()
                .map(|(max, result)| Band::new(max, result))
                .collect(),
        )
    }

    pub fn bands(&self) -> &[Band<T>] {
        &self.bands
    }

    /// Check that the table covers `[min, max]` with no gaps or overlaps.
    ///
    /// The first band must reach at least `min` and the last band must end
    /// exactly at `max`.
    pub fn covers(&self, min: i32, max: i32) -> Result<(), TableError> {
        self.check_order()?;
        let (Some(first), Some(last)) = (self.bands.first(), self.bands.last()) else {
            return Err(TableError::Empty);
        };
        if first.max < min || last.max != max {
            return Err(TableError::DomainNotCovered {
                min,
                max,
                first: first.max,
                last: last.max,
            });
        }
        Ok(())
    }

    /// Result of the first band whose `max` is at least `roll`.
    pub fn lookup(&self, roll: i32) -> Result<&T, TableError> {
        weighted_range_lookup(roll, &self.bands)
    }

    /// Roll `count` dice of `sides` sides and look the total up.
    ///
    /// Returns the roll together with the result so callers can keep both.
    pub fn roll<D: DiceSource + ?Sized>(
        &self,
        dice: &mut D,
        count: u32,
        sides: u32,
    ) -> Result<(i32, &T), TableError> {
        let roll = dice.sum_dice(count, sides) as i32;
        Ok((roll, self.lookup(roll)?))
    }

    /// Inclusive roll span of each band, given the domain minimum.
    pub fn spans(&self, min: i32) -> impl Iterator<Item = (i32, i32, &T)> {
        let mut low = min;
        self.bands.iter().map(move |band| {
            let span = (low, band.max, &band.result);
            low = band.max + 1;
            span
        })
    }

    fn check_order(&self) -> Result<(), TableError> {
        if self.bands.is_empty() {
            return Err(TableError::Empty);
        }
        for (index, pair) in self.bands.windows(2).enumerate() {
            if pair[1].max <= pair[0].max {
                return Err(TableError::NotIncreasing {
                    index: index + 1,
                    previous: pair[0].max,
                    max: pair[1].max,
                });
            }
        }
        Ok(())
    }
}

/// Result of the first band whose `max` is at least `roll`.
pub fn weighted_range_lookup<T>(roll: i32, bands: &[Band<T>]) -> Result<&T, TableError> {
    if bands.is_empty() {
        return Err(TableError::Empty);
    }
    bands
        .iter()
        .find(|band| band.max >= roll)
        .map(|band| &band.result)
        .ok_or(TableError::RollOutOfRange { roll })
}

/// Malformed range tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableError {
    #[error("range table has no bands")]
    Empty,

    #[error("band {index} ends at {max}, not after the previous band ending at {previous}")]
    NotIncreasing { index: usize, previous: i32, max: i32 },

    #[error("bands span ..{first}..={last}, expected to cover {min}..={max}")]
    DomainNotCovered {
        min: i32,
        max: i32,
        first: i32,
        last: i32,
    },

    #[error("roll {roll} is beyond the last band")]
    RollOutOfRange { roll: i32 },
}

impl ForgeError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "TABLE_EMPTY",
            Self::NotIncreasing { .. } => "TABLE_NOT_INCREASING",
            Self::DomainNotCovered { .. } => "TABLE_DOMAIN_NOT_COVERED",
            Self::RollOutOfRange { .. } => "TABLE_ROLL_OUT_OF_RANGE",
        }
    }
}
