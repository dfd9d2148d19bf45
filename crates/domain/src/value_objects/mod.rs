//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod attribute_set;
mod dice;
mod skill_ranks;

pub use attribute::{modifier, Attribute};
pub use attribute_set::AttributeSet;
pub use dice::{
    resolve_skill_check, resolve_skill_check_with, roll_d20, skill_check_total, skill_total,
    SkillCheckOutcome, D20_SIDES,
};
pub use skill_ranks::SkillRanks;
