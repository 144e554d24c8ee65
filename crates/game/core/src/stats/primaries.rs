//! Occupation-implied primary attributes.

use arrayvec::ArrayVec;

use crate::config::ForgeConfig;
use crate::dice::{DiceSource, pick_one};

use super::attribute::Attribute;

/// Keyword fragments that mark an occupation as leaning on an attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordRule {
    pub attribute: Attribute,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// True when `occupation` contains any keyword, ignoring ASCII case.
    pub fn matches(&self, occupation: &str) -> bool {
        let occupation = occupation.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| occupation.contains(&keyword.to_lowercase()))
    }
}

/// Up to two distinct primary attributes.
pub type Primaries = ArrayVec<Attribute, { ForgeConfig::MAX_PRIMARIES }>;

/// Attributes implied by keyword matches alone, in rule order.
///
/// Rules are scanned in declaration order and scanning stops once two
/// distinct attributes are marked.
pub fn keyword_primaries(first: &str, second: &str, rules: &[KeywordRule]) -> Primaries {
    let mut primaries = Primaries::new();
    for rule in rules {
        if primaries.is_full() {
            break;
        }
        if primaries.contains(&rule.attribute) {
            continue;
        }
        if rule.matches(first) || rule.matches(second) {
            primaries.push(rule.attribute);
        }
    }
    primaries
}

/// Initial primary attributes for a pair of occupations.
///
/// Keyword matches come first; any remaining slots are filled by uniform
/// picks from the six attributes, re-rolling attributes already chosen.
/// NPCs pass their single occupation twice.
pub fn choose_primaries<D>(first: &str, second: &str, rules: &[KeywordRule], dice: &mut D) -> Primaries
where
    D: DiceSource + ?Sized,
{
    let mut primaries = keyword_primaries(first, second, rules);
    while !primaries.is_full() {
        // ALL is non-empty, so the pick cannot fail; the guard keeps the loop total.
        let Ok(&attribute) = pick_one(dice, &Attribute::ALL) else {
            break;
        };
        if !primaries.contains(&attribute) {
            primaries.push(attribute);
        }
    }
    primaries
}
