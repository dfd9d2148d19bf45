//! Character builder domain.
//!
//! Rule tables, the character record model with its derived values and
//! point-buy checks, and the roster that holds records by id. Everything here
//! is pure and synchronous; transport and presentation live in other crates.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod value_objects;

pub use aggregates::CharacterCollection;
pub use entities::{CharacterData, CharacterRecord};
pub use error::DomainError;
pub use ids::CharacterId;
pub use rules::{
    class_by_name, governing_attribute_of, skill_by_name, ClassDefinition, SkillDefinition,
    CLASS_LIST, MAX_ATTRIBUTE_POINTS, SKILL_LIST,
};
pub use value_objects::{
    modifier, resolve_skill_check, resolve_skill_check_with, roll_d20, skill_check_total,
    skill_total, Attribute, AttributeSet, SkillCheckOutcome, SkillRanks,
};
