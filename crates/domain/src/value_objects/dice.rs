//! Dice rolling and skill checks
//!
//! A skill check is one d20 roll plus the skill's rank plus the modifier of
//! its governing attribute, compared against a difficulty class (DC).

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::attribute_set::AttributeSet;
use super::skill_ranks::SkillRanks;
use crate::error::DomainError;
use crate::rules::governing_attribute_of;

/// Number of faces on the check die.
pub const D20_SIDES: i32 = 20;

/// Roll a d20: uniform in `1..=20`.
pub fn roll_d20() -> i32 {
    rand::thread_rng().gen_range(1..=D20_SIDES)
}

/// Rank plus governing-attribute modifier for a skill, before any roll.
pub fn skill_total(
    attributes: &AttributeSet,
    skills: &SkillRanks,
    skill_name: &str,
) -> Result<i32, DomainError> {
    let governing = governing_attribute_of(skill_name)?;
    Ok(skills
        .rank(skill_name)?
        .saturating_add(attributes.modifier(governing)))
}

/// Total of a skill check for a given roll.
pub fn skill_check_total(
    attributes: &AttributeSet,
    skills: &SkillRanks,
    skill_name: &str,
    roll: i32,
) -> Result<i32, DomainError> {
    Ok(roll.saturating_add(skill_total(attributes, skills, skill_name)?))
}

/// Result of a resolved skill check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCheckOutcome {
    /// The raw d20 result
    pub roll: i32,
    /// Roll plus rank plus modifier
    pub total: i32,
    /// Difficulty class the total was compared against
    pub dc: i32,
    /// Whether `total >= dc`
    pub success: bool,
}

impl SkillCheckOutcome {
    pub fn new(roll: i32, total: i32, dc: i32) -> Self {
        Self {
            roll,
            total,
            dc,
            success: total >= dc,
        }
    }
}

/// Roll a d20 and resolve a skill check against `dc`.
pub fn resolve_skill_check(
    attributes: &AttributeSet,
    skills: &SkillRanks,
    skill_name: &str,
    dc: i32,
) -> Result<SkillCheckOutcome, DomainError> {
    resolve_skill_check_with(attributes, skills, skill_name, dc, roll_d20)
}

/// Resolve a skill check using `roll` as the single die draw.
///
/// The skill name is validated before the die is rolled.
pub fn resolve_skill_check_with(
    attributes: &AttributeSet,
    skills: &SkillRanks,
    skill_name: &str,
    dc: i32,
    roll: impl FnOnce() -> i32,
) -> Result<SkillCheckOutcome, DomainError> {
    let base = skill_total(attributes, skills, skill_name)?;
    let roll = roll();
    Ok(SkillCheckOutcome::new(roll, roll.saturating_add(base), dc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Attribute;

    fn acrobat() -> (AttributeSet, SkillRanks) {
        // Dexterity 12 gives +1; two ranks in Acrobatics.
        let attrs = AttributeSet::default().with_value(Attribute::Dexterity, 12);
        let skills = SkillRanks::default().with_rank("Acrobatics", 2).unwrap();
        (attrs, skills)
    }

    #[test]
    fn roll_d20_stays_in_range() {
        for _ in 0..1_000 {
            let roll = roll_d20();
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn check_meeting_dc_succeeds() {
        let (attrs, skills) = acrobat();
        let outcome = resolve_skill_check_with(&attrs, &skills, "Acrobatics", 18, || 15).unwrap();
        assert_eq!(outcome.roll, 15);
        assert_eq!(outcome.total, 18);
        assert!(outcome.success);
    }

    #[test]
    fn check_below_dc_fails() {
        let (attrs, skills) = acrobat();
        let outcome = resolve_skill_check_with(&attrs, &skills, "Acrobatics", 19, || 15).unwrap();
        assert_eq!(outcome.total, 18);
        assert!(!outcome.success);
    }

    #[test]
    fn negative_modifier_lowers_total() {
        let attrs = AttributeSet::default().with_value(Attribute::Wisdom, 7);
        let skills = SkillRanks::default();
        assert_eq!(skill_total(&attrs, &skills, "Insight").unwrap(), -2);
        assert_eq!(skill_check_total(&attrs, &skills, "Insight", 10).unwrap(), 8);
    }

    #[test]
    fn unknown_skill_does_not_roll() {
        let (attrs, skills) = acrobat();
        let result = resolve_skill_check_with(&attrs, &skills, "Cooking", 10, || {
            panic!("die should not be rolled")
        });
        assert!(matches!(result, Err(DomainError::UnknownSkill(_))));
    }

    #[test]
    fn random_check_reports_its_roll() {
        let (attrs, skills) = acrobat();
        let outcome = resolve_skill_check(&attrs, &skills, "Acrobatics", 10).unwrap();
        assert!((1..=20).contains(&outcome.roll));
        assert_eq!(outcome.total, outcome.roll + 3);
        assert_eq!(outcome.success, outcome.total >= 10);
    }
}
