//! Randomizer: uniform dice, list picks, and dice expressions.

mod expr;
mod pick;
mod rng;
mod scripted;

pub use expr::{COMMON_DICE, DiceExpr, DiceExprError, DiceRoll};
pub use pick::{pick_distinct_pair, pick_one};
pub use rng::{DiceSource, PcgRng, mix_seed};
pub use scripted::ScriptedDice;

use crate::error::{ErrorSeverity, ForgeError};

/// Uniform integer in `[1, sides]`.
pub fn uniform_die<D: DiceSource + ?Sized>(dice: &mut D, sides: u32) -> u32 {
    dice.roll_die(sides)
}

/// Sum of `count` independent rolls of a `sides`-sided die.
pub fn sum_dice<D: DiceSource + ?Sized>(dice: &mut D, count: u32, sides: u32) -> u32 {
    dice.sum_dice(count, sides)
}

/// Precondition violations raised by list picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiceError {
    #[error("cannot pick from an empty list")]
    EmptyList,

    #[error("list holds fewer than two distinct values")]
    NoDistinctPair,
}

impl ForgeError for DiceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyList => "DICE_EMPTY_LIST",
            Self::NoDistinctPair => "DICE_NO_DISTINCT_PAIR",
        }
    }
}
