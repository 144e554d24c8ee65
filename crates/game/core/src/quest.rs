//! Quest generator.
//!
//! A quest is a type roll, a reward roll, and a type-dependent detail block.
//! The detail block is an enum so a record can never carry an action list
//! from one quest type and a subject from another.

use crate::catalog::{CatalogError, ONE_D6, require_distinct_pair};
use crate::character::CharacterRecord;
use crate::dice::{DiceError, DiceSource, pick_one};
use crate::error::{ErrorSeverity, ForgeError};
use crate::tables::{RangeTable, TableError};

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
pub enum QuestType {
    #[strum(to_string = "Character Based", serialize = "character")]
    CharacterBased,
    #[strum(to_string = "Item Based", serialize = "item")]
    ItemBased,
    #[strum(to_string = "Location Based", serialize = "location")]
    LocationBased,
}

/// The six hex faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    #[strum(to_string = "North-east")]
    NorthEast,
    #[strum(to_string = "South-east")]
    SouthEast,
    South,
    #[strum(to_string = "South-west")]
    SouthWest,
    #[strum(to_string = "North-west")]
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Face for a 1d6 roll; out-of-range rolls wrap.
    pub const fn from_roll(roll: u32) -> Self {
        Self::ALL[(roll.saturating_sub(1) % 6) as usize]
    }
}

/// Quest field that can be re-rolled on its own.
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
pub enum QuestField {
    Type,
    Reward,
    Action,
    Subject,
    Location,
}

/// What a reward-table band resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RewardEntry {
    Fixed(String),
    /// Roll the currency table for the final text.
    Currency,
}

/// Static quest tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestTables {
    /// 1d6 → quest type.
    pub quest_type_table: RangeTable<QuestType>,
    /// 1d6 → reward.
    pub reward_table: RangeTable<RewardEntry>,
    /// 1d6 → gold or gems.
    pub currency_table: RangeTable<String>,
    pub character_actions: Vec<String>,
    /// 1d6 → urban, rural, or wilderness character.
    pub character_subject_table: RangeTable<String>,
    pub item_actions: Vec<String>,
    pub item_subjects: Vec<String>,
    pub location_actions: Vec<String>,
    pub location_subjects: Vec<String>,
}

impl QuestTables {
    pub fn validate(&self) -> Result<(), CatalogError> {
        let tables = [
            ("quest_type_table", self.quest_type_table.covers(ONE_D6.0, ONE_D6.1)),
            ("reward_table", self.reward_table.covers(ONE_D6.0, ONE_D6.1)),
            ("currency_table", self.currency_table.covers(ONE_D6.0, ONE_D6.1)),
            (
                "character_subject_table",
                self.character_subject_table.covers(ONE_D6.0, ONE_D6.1),
            ),
        ];
        for (table, result) in tables {
            result.map_err(|source| CatalogError::Table { table, source })?;
        }
        require_distinct_pair("character_actions", &self.character_actions)?;
        require_distinct_pair("item_actions", &self.item_actions)?;
        require_distinct_pair("item_subjects", &self.item_subjects)?;
        require_distinct_pair("location_actions", &self.location_actions)?;
        require_distinct_pair("location_subjects", &self.location_subjects)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub text: String,
    pub roll: i32,
    /// Present when the reward roll called for the currency sub-roll.
    pub currency_roll: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub direction: Direction,
    pub direction_roll: u32,
    /// Hexes away, 1 to 6.
    pub distance: u32,
}

/// Type-dependent quest fields, with the rolls that chose them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum QuestDetail {
    Character {
        action: String,
        subject: String,
        subject_roll: i32,
    },
    Item {
        action: String,
        subject: String,
    },
    Location {
        action: String,
        subject: String,
        location: Location,
    },
}

impl QuestDetail {
    pub const fn quest_type(&self) -> QuestType {
        match self {
            Self::Character { .. } => QuestType::CharacterBased,
            Self::Item { .. } => QuestType::ItemBased,
            Self::Location { .. } => QuestType::LocationBased,
        }
    }

    pub fn action(&self) -> &str {
        match self {
            Self::Character { action, .. } | Self::Item { action, .. } | Self::Location { action, .. } => {
                action
            }
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            Self::Character { subject, .. }
            | Self::Item { subject, .. }
            | Self::Location { subject, .. } => subject,
        }
    }

    pub const fn location(&self) -> Option<&Location> {
        match self {
            Self::Location { location, .. } => Some(location),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestRecord {
    /// `None` when the type was selected rather than rolled.
    pub type_roll: Option<i32>,
    pub reward: Reward,
    pub detail: QuestDetail,
    /// Only Character Based quests carry one.
    pub npc: Option<CharacterRecord>,
}

impl QuestRecord {
    pub const fn quest_type(&self) -> QuestType {
        self.detail.quest_type()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("{field} does not apply to a {quest_type} quest")]
    FieldNotApplicable { field: QuestField, quest_type: QuestType },

    #[error("only Character Based quests carry an NPC, this one is {0}")]
    NpcNotApplicable(QuestType),

    #[error(transparent)]
    Dice(#[from] DiceError),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl ForgeError for QuestError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FieldNotApplicable { .. } | Self::NpcNotApplicable(_) => ErrorSeverity::Validation,
            Self::Dice(_) | Self::Table(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::FieldNotApplicable { .. } => "QUEST_FIELD_NOT_APPLICABLE",
            Self::NpcNotApplicable(_) => "QUEST_NPC_NOT_APPLICABLE",
            Self::Dice(err) => err.error_code(),
            Self::Table(err) => err.error_code(),
        }
    }
}

/// Roll type, reward, and the detail block for the rolled type.
pub fn roll_quest<D>(tables: &QuestTables, dice: &mut D) -> Result<QuestRecord, QuestError>
where
    D: DiceSource + ?Sized,
{
    let (type_roll, &quest_type) = tables.quest_type_table.roll(dice, 1, 6)?;
    let reward = roll_reward(tables, dice)?;
    let detail = roll_detail(tables, quest_type, dice)?;
    Ok(QuestRecord {
        type_roll: Some(type_roll),
        reward,
        detail,
        npc: None,
    })
}

/// Re-roll one field, leaving the rest of the record alone.
///
/// A new type brings a new detail block and drops any attached NPC.
pub fn reroll_quest_field<D>(
    record: &QuestRecord,
    field: QuestField,
    tables: &QuestTables,
    dice: &mut D,
) -> Result<QuestRecord, QuestError>
where
    D: DiceSource + ?Sized,
{
    let mut next = record.clone();
    match field {
        QuestField::Type => {
            let (roll, &quest_type) = tables.quest_type_table.roll(dice, 1, 6)?;
            next.type_roll = Some(roll);
            next.detail = roll_detail(tables, quest_type, dice)?;
            next.npc = None;
        }
        QuestField::Reward => next.reward = roll_reward(tables, dice)?,
        QuestField::Action => {
            let rolled = match &next.detail {
                QuestDetail::Character { .. } => pick_one(dice, &tables.character_actions)?,
                QuestDetail::Item { .. } => pick_one(dice, &tables.item_actions)?,
                QuestDetail::Location { .. } => pick_one(dice, &tables.location_actions)?,
            }
            .clone();
            match &mut next.detail {
                QuestDetail::Character { action, .. }
                | QuestDetail::Item { action, .. }
                | QuestDetail::Location { action, .. } => *action = rolled,
            }
        }
        QuestField::Subject => match &mut next.detail {
            QuestDetail::Character {
                subject,
                subject_roll,
                ..
            } => {
                let (roll, rolled) = tables.character_subject_table.roll(dice, 1, 6)?;
                *subject = rolled.clone();
                *subject_roll = roll;
            }
            QuestDetail::Item { subject, .. } => {
                *subject = pick_one(dice, &tables.item_subjects)?.clone();
            }
            QuestDetail::Location { subject, .. } => {
                *subject = pick_one(dice, &tables.location_subjects)?.clone();
            }
        },
        QuestField::Location => match &mut next.detail {
            QuestDetail::Location { location, .. } => *location = roll_location(dice),
            other => {
                return Err(QuestError::FieldNotApplicable {
                    field,
                    quest_type: other.quest_type(),
                });
            }
        },
    }
    Ok(next)
}

/// Select a type directly. Behaves like a type re-roll without the roll.
pub fn set_quest_type<D>(
    record: &QuestRecord,
    quest_type: QuestType,
    tables: &QuestTables,
    dice: &mut D,
) -> Result<QuestRecord, QuestError>
where
    D: DiceSource + ?Sized,
{
    Ok(QuestRecord {
        type_roll: None,
        reward: record.reward.clone(),
        detail: roll_detail(tables, quest_type, dice)?,
        npc: None,
    })
}

/// Attach a generated NPC to a Character Based quest.
pub fn attach_npc(record: &QuestRecord, npc: CharacterRecord) -> Result<QuestRecord, QuestError> {
    match record.quest_type() {
        QuestType::CharacterBased => Ok(QuestRecord {
            npc: Some(npc),
            ..record.clone()
        }),
        other => Err(QuestError::NpcNotApplicable(other)),
    }
}

fn roll_reward<D: DiceSource + ?Sized>(tables: &QuestTables, dice: &mut D) -> Result<Reward, QuestError> {
    let (roll, entry) = tables.reward_table.roll(dice, 1, 6)?;
    let reward = match entry {
        RewardEntry::Fixed(text) => Reward {
            text: text.clone(),
            roll,
            currency_roll: None,
        },
        RewardEntry::Currency => {
            let (currency_roll, text) = tables.currency_table.roll(dice, 1, 6)?;
            Reward {
                text: text.clone(),
                roll,
                currency_roll: Some(currency_roll),
            }
        }
    };
    Ok(reward)
}

fn roll_detail<D: DiceSource + ?Sized>(
    tables: &QuestTables,
    quest_type: QuestType,
    dice: &mut D,
) -> Result<QuestDetail, QuestError> {
    let detail = match quest_type {
        QuestType::CharacterBased => {
            let action = pick_one(dice, &tables.character_actions)?.clone();
            let (subject_roll, subject) = tables.character_subject_table.roll(dice, 1, 6)?;
            QuestDetail::Character {
                action,
                subject: subject.clone(),
                subject_roll,
            }
        }
        QuestType::ItemBased => QuestDetail::Item {
            action: pick_one(dice, &tables.item_actions)?.clone(),
            subject: pick_one(dice, &tables.item_subjects)?.clone(),
        },
        QuestType::LocationBased => QuestDetail::Location {
            action: pick_one(dice, &tables.location_actions)?.clone(),
            subject: pick_one(dice, &tables.location_subjects)?.clone(),
            location: roll_location(dice),
        },
    };
    Ok(detail)
}

fn roll_location<D: DiceSource + ?Sized>(dice: &mut D) -> Location {
    let direction_roll = dice.roll_die(6);
    Location {
        direction: Direction::from_roll(direction_roll),
        direction_roll,
        distance: dice.roll_die(6),
    }
}
