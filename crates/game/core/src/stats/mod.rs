//! Stat System - canonical attributes and the stats derived from them.
//!
//! # Architecture
//!
//! ```text
//! [ Attributes: score + primary flag (SSOT) ]
//!      ↓
//! [ Modifier / check bonus ]
//!      ↓
//! [ Armour class, hit points, slot capacity ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: scores, primary flags, level, and raw hit dice only
//! 2. **Unidirectional Flow**: derived values never feed back into canonical ones
//! 3. **Deterministic**: pure functions, no I/O or randomness

pub mod attribute;
pub mod derived;
pub mod hit_points;
pub mod primaries;

pub use attribute::{Attribute, AttributeScore, AttributeSet, check_bonus, modifier};
pub use derived::{ArmourClass, SlotUsage};
pub use hit_points::{HitDicePools, HitDie, HitPoints, pool_total};
pub use primaries::{KeywordRule, Primaries, choose_primaries, keyword_primaries};
