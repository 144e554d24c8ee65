//! Uniform picks from ordered lists.

use super::DiceError;
use super::rng::DiceSource;

/// Uniform choice from a non-empty ordered list.
pub fn pick_one<'a, T, D>(dice: &mut D, list: &'a [T]) -> Result<&'a T, DiceError>
where
    D: DiceSource + ?Sized,
{
    if list.is_empty() {
        return Err(DiceError::EmptyList);
    }
    let index = dice.roll_die(list.len() as u32) as usize - 1;
    Ok(&list[index])
}

/// Two uniform choices where the second re-rolls until it differs from the
/// first by value.
///
/// The list is checked for at least two distinct values before rolling, so
/// the re-roll loop always has an exit.
pub fn pick_distinct_pair<'a, T, D>(dice: &mut D, list: &'a [T]) -> Result<(&'a T, &'a T), DiceError>
where
    T: PartialEq,
    D: DiceSource + ?Sized,
{
    let Some(head) = list.first() else {
        return Err(DiceError::EmptyList);
    };
    if list.iter().all(|item| item == head) {
        return Err(DiceError::NoDistinctPair);
    }

    let first = pick_one(dice, list)?;
    loop {
        let second = pick_one(dice, list)?;
        if second != first {
            return Ok((first, second));
        }
    }
}
