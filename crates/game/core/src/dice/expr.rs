//! Dice expressions such as `2d6` or `d20`.

use core::fmt;
use core::str::FromStr;

use crate::error::{ErrorSeverity, ForgeError};

use super::rng::DiceSource;

/// Dice available as one-click rolls in the dice roller.
pub const COMMON_DICE: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

/// A count of identical dice, written `NdS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DiceExpr {
    count: u32,
    sides: u32,
}

impl DiceExpr {
    pub const MAX_COUNT: u32 = 100;
    pub const MIN_SIDES: u32 = 2;
    pub const MAX_SIDES: u32 = 1000;

    pub fn new(count: u32, sides: u32) -> Result<Self, DiceExprError> {
        if count == 0 || count > Self::MAX_COUNT {
            return Err(DiceExprError::CountOutOfRange(count));
        }
        if !(Self::MIN_SIDES..=Self::MAX_SIDES).contains(&sides) {
            return Err(DiceExprError::SidesOutOfRange(sides));
        }
        Ok(Self { count, sides })
    }

    /// A single die.
    pub fn single(sides: u32) -> Result<Self, DiceExprError> {
        Self::new(1, sides)
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    pub const fn sides(&self) -> u32 {
        self.sides
    }

    /// Short label: `d6` for one die, `3d6` otherwise.
    pub fn label(&self) -> String {
        if self.count == 1 {
            format!("d{}", self.sides)
        } else {
            self.to_string()
        }
    }

    /// Roll every die independently.
    pub fn roll<D: DiceSource + ?Sized>(&self, dice: &mut D) -> DiceRoll {
        let results: Vec<u32> = (0..self.count).map(|_| dice.roll_die(self.sides)).collect();
        let total = results.iter().sum();
        DiceRoll {
            expr: *self,
            results,
            total,
        }
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl FromStr for DiceExpr {
    type Err = DiceExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let Some((count, sides)) = lower.split_once('d') else {
            return Err(DiceExprError::Malformed(trimmed.to_string()));
        };

        let count = if count.is_empty() {
            1
        } else {
            count
                .parse()
                .map_err(|_| DiceExprError::Malformed(trimmed.to_string()))?
        };
        let sides = sides
            .parse()
            .map_err(|_| DiceExprError::Malformed(trimmed.to_string()))?;

        Self::new(count, sides)
    }
}

impl TryFrom<String> for DiceExpr {
    type Error = DiceExprError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DiceExpr> for String {
    fn from(value: DiceExpr) -> Self {
        value.to_string()
    }
}

/// Outcome of rolling a [`DiceExpr`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceRoll {
    pub expr: DiceExpr,
    pub results: Vec<u32>,
    pub total: u32,
}

/// Errors raised while parsing a dice expression.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiceExprError {
    #[error("malformed dice expression '{0}', expected NdS")]
    Malformed(String),

    #[error("dice count {0} outside 1..={max}", max = DiceExpr::MAX_COUNT)]
    CountOutOfRange(u32),

    #[error("die sides {0} outside {min}..={max}", min = DiceExpr::MIN_SIDES, max = DiceExpr::MAX_SIDES)]
    SidesOutOfRange(u32),
}

impl ForgeError for DiceExprError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "DICE_EXPR_MALFORMED",
            Self::CountOutOfRange(_) => "DICE_EXPR_COUNT_OUT_OF_RANGE",
            Self::SidesOutOfRange(_) => "DICE_EXPR_SIDES_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn parses_common_forms() {
        assert_eq!("2d6".parse::<DiceExpr>().unwrap(), DiceExpr::new(2, 6).unwrap());
        assert_eq!("d20".parse::<DiceExpr>().unwrap(), DiceExpr::single(20).unwrap());
        assert_eq!(" 1D8 ".parse::<DiceExpr>().unwrap(), DiceExpr::single(8).unwrap());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!("six".parse::<DiceExpr>(), Err(DiceExprError::Malformed(_))));
        assert!(matches!("2d".parse::<DiceExpr>(), Err(DiceExprError::Malformed(_))));
        assert_eq!("0d6".parse::<DiceExpr>(), Err(DiceExprError::CountOutOfRange(0)));
        assert_eq!("1d1".parse::<DiceExpr>(), Err(DiceExprError::SidesOutOfRange(1)));
    }

    #[test]
    fn labels_match_dice_roller() {
        assert_eq!(DiceExpr::single(6).unwrap().label(), "d6");
        assert_eq!(DiceExpr::new(3, 6).unwrap().label(), "3d6");
        assert_eq!(DiceExpr::single(8).unwrap().to_string(), "1d8");
    }

    #[test]
    fn roll_records_each_die() {
        let mut dice = ScriptedDice::new([2, 5, 6]);
        let roll = DiceExpr::new(3, 6).unwrap().roll(&mut dice);
        assert_eq!(roll.results, vec![2, 5, 6]);
        assert_eq!(roll.total, 13);
    }
}
