//! Rule tables for the character builder.
//!
//! Static configuration loaded once and never mutated: the class list with
//! per-attribute minimums and the skill list with each skill's governing
//! attribute. The attribute list itself is [`Attribute::ALL`].

use crate::error::DomainError;
use crate::value_objects::Attribute;
use crate::value_objects::Attribute::{
    Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom,
};

/// Maximum sum of all attribute values (point-buy budget).
pub const MAX_ATTRIBUTE_POINTS: i32 = 70;

/// Value every attribute starts at.
pub const DEFAULT_ATTRIBUTE_VALUE: i32 = 10;

/// Lowest value an attribute can be decremented to.
pub const MIN_ATTRIBUTE_VALUE: i32 = 1;

/// Skill points granted before the Intelligence modifier is applied.
pub const BASE_SKILL_POINTS: i32 = 10;

/// Skill points gained (or lost) per point of Intelligence modifier.
pub const SKILL_POINTS_PER_INT_MODIFIER: i32 = 4;

/// A class gated by minimum attribute values.
///
/// Attributes absent from `requirements` impose no minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: &'static str,
    pub requirements: &'static [(Attribute, i32)],
}

impl ClassDefinition {
    /// Minimum value required for `attribute`, if this class sets one.
    pub fn minimum(&self, attribute: Attribute) -> Option<i32> {
        self.requirements
            .iter()
            .find(|(attr, _)| *attr == attribute)
            .map(|(_, min)| *min)
    }
}

/// A skill and the attribute whose modifier it adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub governing_attribute: Attribute,
}

const fn skill(name: &'static str, governing_attribute: Attribute) -> SkillDefinition {
    SkillDefinition {
        name,
        governing_attribute,
    }
}

/// Selectable classes, in display order.
pub const CLASS_LIST: [ClassDefinition; 3] = [
    ClassDefinition {
        name: "Barbarian",
        requirements: &[
            (Strength, 14),
            (Dexterity, 9),
            (Constitution, 9),
            (Intelligence, 9),
            (Wisdom, 9),
            (Charisma, 9),
        ],
    },
    ClassDefinition {
        name: "Wizard",
        requirements: &[
            (Strength, 9),
            (Dexterity, 9),
            (Constitution, 9),
            (Intelligence, 14),
            (Wisdom, 9),
            (Charisma, 9),
        ],
    },
    ClassDefinition {
        name: "Bard",
        requirements: &[
            (Strength, 9),
            (Dexterity, 9),
            (Constitution, 9),
            (Intelligence, 9),
            (Wisdom, 9),
            (Charisma, 14),
        ],
    },
];

/// Allocatable skills, in display order.
pub const SKILL_LIST: [SkillDefinition; 18] = [
    skill("Acrobatics", Dexterity),
    skill("Animal Handling", Wisdom),
    skill("Arcana", Intelligence),
    skill("Athletics", Strength),
    skill("Deception", Charisma),
    skill("History", Intelligence),
    skill("Insight", Wisdom),
    skill("Intimidation", Charisma),
    skill("Investigation", Intelligence),
    skill("Medicine", Wisdom),
    skill("Nature", Intelligence),
    skill("Perception", Wisdom),
    skill("Performance", Charisma),
    skill("Persuasion", Charisma),
    skill("Religion", Intelligence),
    skill("Sleight of Hand", Dexterity),
    skill("Stealth", Dexterity),
    skill("Survival", Wisdom),
];

/// Number of entries in every skill rank set.
pub const SKILL_COUNT: usize = SKILL_LIST.len();

/// Look up a class by its exact name.
pub fn class_by_name(name: &str) -> Result<&'static ClassDefinition, DomainError> {
    CLASS_LIST
        .iter()
        .find(|class| class.name == name)
        .ok_or_else(|| DomainError::unknown_class(name))
}

/// Position of a skill in [`SKILL_LIST`].
pub(crate) fn skill_index(name: &str) -> Result<usize, DomainError> {
    SKILL_LIST
        .iter()
        .position(|skill| skill.name == name)
        .ok_or_else(|| DomainError::unknown_skill(name))
}

/// Look up a skill by its exact name.
pub fn skill_by_name(name: &str) -> Result<&'static SkillDefinition, DomainError> {
    skill_index(name).map(|i| &SKILL_LIST[i])
}

/// The attribute whose modifier a skill adds.
pub fn governing_attribute_of(skill_name: &str) -> Result<Attribute, DomainError> {
    skill_by_name(skill_name).map(|skill| skill.governing_attribute)
}
