//! Yes/no oracle, random events, and verb/noun inspiration.

use crate::catalog::{CatalogError, ONE_D6};
use crate::dice::{DiceError, DiceSource, pick_one};
use crate::tables::{RangeTable, TableError};

/// How likely the asked question is, from the asker's point of view.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Likelihood {
    #[strum(serialize = "Impossible")]
    Impossible,
    #[strum(serialize = "Unlikely")]
    Unlikely,
    #[strum(to_string = "Even Odds", serialize = "even", serialize = "even-odds")]
    EvenOdds,
    #[strum(serialize = "Likely")]
    Likely,
    #[strum(serialize = "Certain")]
    Certain,
}

impl Likelihood {
    /// Answer die at or above this reads Yes.
    pub const fn threshold(self) -> u32 {
        match self {
            Self::Impossible => 6,
            Self::Unlikely => 5,
            Self::EvenOdds => 4,
            Self::Likely => 3,
            Self::Certain => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OracleAnswer {
    pub likelihood: Likelihood,
    pub roll: u32,
    pub modifier_roll: u32,
    pub yes: bool,
    /// "Yes", "No", optionally followed by ", but" or ", and".
    pub answer: String,
    /// Set when both dice match.
    pub random_event_due: bool,
}

/// Roll the answer die and the modifier die.
pub fn ask_oracle<D: DiceSource + ?Sized>(likelihood: Likelihood, dice: &mut D) -> OracleAnswer {
    let roll = dice.roll_die(6);
    let modifier_roll = dice.roll_die(6);
    let yes = roll >= likelihood.threshold();

    let mut answer = String::from(if yes { "Yes" } else { "No" });
    match modifier_roll {
        1 => answer.push_str(", but"),
        6 => answer.push_str(", and"),
        _ => {}
    }

    OracleAnswer {
        likelihood,
        roll,
        modifier_roll,
        yes,
        answer,
        random_event_due: roll == modifier_roll,
    }
}

/// Static oracle tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OracleTables {
    /// 1d6 → what the event is about.
    pub event_focus: RangeTable<String>,
    /// 1d6 → negative or positive spin.
    pub event_effect: RangeTable<String>,
    pub verbs: Vec<String>,
    pub nouns: Vec<String>,
}

impl OracleTables {
    pub fn validate(&self) -> Result<(), CatalogError> {
        let (min, max) = ONE_D6;
        for (table, result) in [
            ("event_focus", self.event_focus.covers(min, max)),
            ("event_effect", self.event_effect.covers(min, max)),
        ] {
            result.map_err(|source| CatalogError::Table { table, source })?;
        }
        if self.verbs.is_empty() {
            return Err(CatalogError::EmptyList("verbs"));
        }
        if self.nouns.is_empty() {
            return Err(CatalogError::EmptyList("nouns"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomEvent {
    pub focus_roll: i32,
    pub effect_roll: i32,
    pub focus: String,
    pub effect: String,
}

impl RandomEvent {
    /// "{focus} with a {effect}".
    pub fn text(&self) -> String {
        format!("{} with a {}", self.focus, self.effect)
    }
}

pub fn roll_random_event<D>(tables: &OracleTables, dice: &mut D) -> Result<RandomEvent, TableError>
where
    D: DiceSource + ?Sized,
{
    let (focus_roll, focus) = tables.event_focus.roll(dice, 1, 6)?;
    let (effect_roll, effect) = tables.event_effect.roll(dice, 1, 6)?;
    Ok(RandomEvent {
        focus_roll,
        effect_roll,
        focus: focus.clone(),
        effect: effect.clone(),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inspiration {
    pub verb: String,
    pub noun: String,
    /// Set when one half was re-rolled from an earlier pair.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rerolled: bool,
}

/// Half of an inspiration pair.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InspirationPart {
    Verb,
    Noun,
}

pub fn roll_inspiration<D>(tables: &OracleTables, dice: &mut D) -> Result<Inspiration, DiceError>
where
    D: DiceSource + ?Sized,
{
    Ok(Inspiration {
        verb: pick_one(dice, &tables.verbs)?.clone(),
        noun: pick_one(dice, &tables.nouns)?.clone(),
        rerolled: false,
    })
}

/// Pick a new verb or noun, keeping the other half of `current`.
pub fn reroll_inspiration<D>(
    tables: &OracleTables,
    current: &Inspiration,
    part: InspirationPart,
    dice: &mut D,
) -> Result<Inspiration, DiceError>
where
    D: DiceSource + ?Sized,
{
    let mut next = current.clone();
    match part {
        InspirationPart::Verb => next.verb = pick_one(dice, &tables.verbs)?.clone(),
        InspirationPart::Noun => next.noun = pick_one(dice, &tables.nouns)?.clone(),
    }
    next.rerolled = true;
    Ok(next)
}

/// One oracle history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum OracleEntry {
    Answer(OracleAnswer),
    Event(RandomEvent),
    Inspiration(Inspiration),
}

impl OracleEntry {
    /// One-line rendering for history listings.
    pub fn summary(&self) -> String {
        match self {
            Self::Answer(answer) => format!(
                "{} ({}) rolled {},{}",
                answer.answer, answer.likelihood, answer.roll, answer.modifier_roll
            ),
            Self::Event(event) => event.text(),
            Self::Inspiration(inspiration) if inspiration.rerolled => {
                format!("{} {} (Re-rolled)", inspiration.verb, inspiration.noun)
            }
            Self::Inspiration(inspiration) => format!("{} {}", inspiration.verb, inspiration.noun),
        }
    }
}
