//! Character entity - one character build in the roster
//!
//! All mutations are pure: they return a new [`CharacterData`] and leave the
//! original untouched, including when they are rejected.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::rules::{class_by_name, ClassDefinition, CLASS_LIST};
use crate::value_objects::{
    resolve_skill_check, resolve_skill_check_with, skill_total, Attribute, AttributeSet,
    SkillCheckOutcome, SkillRanks,
};

/// The editable fields of a character.
///
/// Every field has a defined default, so a record stored as `{}` (or missing
/// any of its fields) decodes to a fresh build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterData {
    pub attributes: AttributeSet,
    /// Name of the selected class, if any. Refers into the class table by name.
    pub selected_class: Option<String>,
    pub skills: SkillRanks,
}

impl CharacterData {
    pub fn increment_attribute(&self, attribute: Attribute) -> Result<Self, DomainError> {
        Ok(Self {
            attributes: self.attributes.increment(attribute)?,
            ..self.clone()
        })
    }

    pub fn decrement_attribute(&self, attribute: Attribute) -> Self {
        Self {
            attributes: self.attributes.decrement(attribute),
            ..self.clone()
        }
    }

    pub fn increment_skill(&self, skill_name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            skills: self.skills.increment(skill_name, &self.attributes)?,
            ..self.clone()
        })
    }

    pub fn decrement_skill(&self, skill_name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            skills: self.skills.decrement(skill_name)?,
            ..self.clone()
        })
    }

    /// Select `class_name`, or clear the selection if it is already selected.
    ///
    /// Selection is not gated on requirements; eligibility is advisory.
    pub fn toggle_class(&self, class_name: &str) -> Result<Self, DomainError> {
        let class = class_by_name(class_name)?;
        let selected_class = if self.selected_class.as_deref() == Some(class.name) {
            None
        } else {
            Some(class.name.to_string())
        };
        Ok(Self {
            selected_class,
            ..self.clone()
        })
    }

    /// Definition of the selected class. A name missing from the table reads as none.
    pub fn selected_class_definition(&self) -> Option<&'static ClassDefinition> {
        self.selected_class
            .as_deref()
            .and_then(|name| class_by_name(name).ok())
    }

    pub fn meets_class_requirements(&self, class: &ClassDefinition) -> bool {
        self.attributes.meets_requirements(class)
    }

    /// Classes whose minimums the current attributes meet, in table order.
    pub fn eligible_classes(&self) -> impl Iterator<Item = &'static ClassDefinition> + '_ {
        CLASS_LIST
            .iter()
            .filter(move |class| self.meets_class_requirements(class))
    }

    pub fn attribute_points_total(&self) -> i32 {
        self.attributes.total()
    }

    pub fn available_skill_points(&self) -> i32 {
        self.attributes.available_skill_points()
    }

    pub fn used_skill_points(&self) -> i32 {
        self.skills.used_points()
    }

    /// Rank plus governing modifier for one skill.
    pub fn skill_total(&self, skill_name: &str) -> Result<i32, DomainError> {
        skill_total(&self.attributes, &self.skills, skill_name)
    }

    pub fn resolve_skill_check(
        &self,
        skill_name: &str,
        dc: i32,
    ) -> Result<SkillCheckOutcome, DomainError> {
        resolve_skill_check(&self.attributes, &self.skills, skill_name, dc)
    }

    pub fn resolve_skill_check_with(
        &self,
        skill_name: &str,
        dc: i32,
        roll: impl FnOnce() -> i32,
    ) -> Result<SkillCheckOutcome, DomainError> {
        resolve_skill_check_with(&self.attributes, &self.skills, skill_name, dc, roll)
    }
}

/// A character in the roster: a stable id plus its editable data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    #[serde(default)]
    pub data: CharacterData,
}

impl CharacterRecord {
    /// A fresh record: all attributes 10, no class, all skills 0.
    pub fn new(id: CharacterId) -> Self {
        Self {
            id,
            data: CharacterData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_default_build() {
        let record = CharacterRecord::new(CharacterId::new(1));
        assert_eq!(record.data.attribute_points_total(), 60);
        assert_eq!(record.data.selected_class, None);
        assert_eq!(record.data.used_skill_points(), 0);
        assert_eq!(record.data.available_skill_points(), 10);
    }

    #[test]
    fn rejected_increment_leaves_data_unchanged() {
        let mut data = CharacterData::default();
        for _ in 0..10 {
            data = data.increment_attribute(Attribute::Constitution).unwrap();
        }
        let before = data.clone();
        assert!(matches!(
            data.increment_attribute(Attribute::Strength),
            Err(DomainError::BudgetExceeded { total: 70, max: 70 })
        ));
        assert_eq!(data, before);
    }

    #[test]
    fn toggle_class_selects_then_clears() {
        let data = CharacterData::default();
        let bard = data.toggle_class("Bard").unwrap();
        assert_eq!(bard.selected_class.as_deref(), Some("Bard"));
        assert_eq!(bard.selected_class_definition().map(|c| c.name), Some("Bard"));

        let wizard = bard.toggle_class("Wizard").unwrap();
        assert_eq!(wizard.selected_class.as_deref(), Some("Wizard"));

        let none = wizard.toggle_class("Wizard").unwrap();
        assert_eq!(none.selected_class, None);

        assert!(data.toggle_class("Paladin").is_err());
    }

    #[test]
    fn eligible_classes_track_attributes() {
        let mut data = CharacterData::default();
        assert_eq!(data.eligible_classes().count(), 0);

        for _ in 0..4 {
            data = data.increment_attribute(Attribute::Strength).unwrap();
        }
        let names: Vec<_> = data.eligible_classes().map(|c| c.name).collect();
        assert_eq!(names, vec!["Barbarian"]);

        let clumsy = data
            .decrement_attribute(Attribute::Dexterity)
            .decrement_attribute(Attribute::Dexterity);
        assert_eq!(clumsy.eligible_classes().count(), 0);
    }

    #[test]
    fn raising_intelligence_unlocks_skill_points() {
        let mut data = CharacterData::default();
        for _ in 0..10 {
            data = data.increment_skill("Arcana").unwrap();
        }
        assert!(data.increment_skill("Arcana").is_err());

        let data = data
            .increment_attribute(Attribute::Intelligence)
            .unwrap()
            .increment_attribute(Attribute::Intelligence)
            .unwrap();
        assert_eq!(data.available_skill_points(), 14);
        let data = data.increment_skill("Arcana").unwrap();
        assert_eq!(data.skills.rank("Arcana").unwrap(), 11);
        assert_eq!(data.skill_total("Arcana").unwrap(), 12);
    }

    #[test]
    fn empty_data_object_decodes_to_defaults() {
        let record: CharacterRecord = serde_json::from_str(r#"{"id":3,"data":{}}"#).unwrap();
        assert_eq!(record, CharacterRecord::new(CharacterId::new(3)));

        let record: CharacterRecord = serde_json::from_str(r#"{"id":4}"#).unwrap();
        assert_eq!(record.data, CharacterData::default());
    }

    #[test]
    fn record_serializes_in_store_shape() {
        let mut record = CharacterRecord::new(CharacterId::new(2));
        record.data = record.data.toggle_class("Barbarian").unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["data"]["selectedClass"], "Barbarian");
        assert_eq!(value["data"]["attributes"]["Strength"], 10);
        assert_eq!(value["data"]["skills"]["Stealth"], 0);
    }

    #[test]
    fn null_class_decodes_as_none() {
        let record: CharacterRecord =
            serde_json::from_str(r#"{"id":1,"data":{"selectedClass":null,"skills":{"Arcana":2}}}"#)
                .unwrap();
        assert_eq!(record.data.selected_class, None);
        assert_eq!(record.data.used_skill_points(), 2);
    }

    #[test]
    fn fetched_record_with_extreme_values_stays_usable() {
        let record: CharacterRecord = serde_json::from_str(
            r#"{"id":1,"data":{"attributes":{"Strength":2147483647,"Dexterity":2147483647},"skills":{"Arcana":-2147483648}}}"#,
        )
        .unwrap();
        let data = record.data;

        assert_eq!(data.attribute_points_total(), i32::MAX);
        assert!(data.increment_attribute(Attribute::Wisdom).is_err());

        let lowered = data.decrement_skill("Arcana").unwrap();
        assert_eq!(lowered.skills.rank("Arcana").unwrap(), i32::MIN);
        let outcome = lowered
            .resolve_skill_check_with("Arcana", 10, || 20)
            .unwrap();
        assert!(!outcome.success);
    }
}
