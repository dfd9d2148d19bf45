//! Attribute set value object - one value per attribute, under a point budget.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::ops::Index;

use super::attribute::{modifier, Attribute};
use crate::error::DomainError;
use crate::rules::{
    ClassDefinition, BASE_SKILL_POINTS, DEFAULT_ATTRIBUTE_VALUE, MAX_ATTRIBUTE_POINTS,
    MIN_ATTRIBUTE_VALUE, SKILL_POINTS_PER_INT_MODIFIER,
};

/// A complete set of attribute values.
///
/// Every attribute always has an entry. Values never drop below
/// [`MIN_ATTRIBUTE_VALUE`], and [`AttributeSet::increment`] refuses to grow the
/// total past [`MAX_ATTRIBUTE_POINTS`].
///
/// On the wire this is an object keyed by the exact attribute name. Missing
/// keys decode to the default value; unknown keys (abbreviations included)
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "HashMap<String, i32>")]
pub struct AttributeSet {
    values: [i32; Attribute::COUNT],
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            values: [DEFAULT_ATTRIBUTE_VALUE; Attribute::COUNT],
        }
    }
}

impl AttributeSet {
    /// Value of one attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.values[attribute.index()]
    }

    /// Copy of this set with one value replaced (floored at the minimum).
    ///
    /// Does not check the point budget; use [`AttributeSet::increment`] for
    /// user-driven changes.
    pub fn with_value(mut self, attribute: Attribute, value: i32) -> Self {
        self.values[attribute.index()] = value.max(MIN_ATTRIBUTE_VALUE);
        self
    }

    /// Sum of all attribute values, saturating at `i32::MAX`.
    pub fn total(&self) -> i32 {
        self.values.iter().fold(0, |sum, &v| sum.saturating_add(v))
    }

    /// Points left before the budget is reached.
    pub fn remaining_points(&self) -> i32 {
        MAX_ATTRIBUTE_POINTS.saturating_sub(self.total())
    }

    /// Modifier derived from one attribute value.
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        modifier(self.get(attribute))
    }

    /// Raise one attribute by a point.
    ///
    /// The budget check is made on the total *before* the increment, so the
    /// total can reach exactly [`MAX_ATTRIBUTE_POINTS`] but not pass it.
    pub fn increment(&self, attribute: Attribute) -> Result<Self, DomainError> {
        let total = self.total();
        if total >= MAX_ATTRIBUTE_POINTS {
            return Err(DomainError::budget_exceeded(total, MAX_ATTRIBUTE_POINTS));
        }
        let mut next = *self;
        let value = &mut next.values[attribute.index()];
        *value = value.saturating_add(1);
        Ok(next)
    }

    /// Lower one attribute by a point, flooring silently at the minimum.
    pub fn decrement(&self, attribute: Attribute) -> Self {
        let mut next = *self;
        let value = &mut next.values[attribute.index()];
        *value = value.saturating_sub(1).max(MIN_ATTRIBUTE_VALUE);
        next
    }

    /// Whether every attribute meets the class minimum, where one is set.
    pub fn meets_requirements(&self, class: &ClassDefinition) -> bool {
        Attribute::ALL.iter().all(|&attribute| {
            class
                .minimum(attribute)
                .map_or(true, |minimum| self.get(attribute) >= minimum)
        })
    }

    /// Skill points granted by Intelligence: `max(0, 10 + 4 * INT modifier)`.
    pub fn available_skill_points(&self) -> i32 {
        SKILL_POINTS_PER_INT_MODIFIER
            .saturating_mul(self.modifier(Attribute::Intelligence))
            .saturating_add(BASE_SKILL_POINTS)
            .max(0)
    }

    /// Attributes and their values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.iter().map(move |&attribute| (attribute, self.get(attribute)))
    }
}

impl Index<Attribute> for AttributeSet {
    type Output = i32;

    fn index(&self, attribute: Attribute) -> &Self::Output {
        &self.values[attribute.index()]
    }
}

impl From<HashMap<String, i32>> for AttributeSet {
    fn from(map: HashMap<String, i32>) -> Self {
        map.iter().fold(Self::default(), |set, (name, &value)| {
            match Attribute::from_name(name) {
                Some(attribute) => set.with_value(attribute, value),
                None => set,
            }
        })
    }
}

impl Serialize for AttributeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Attribute::COUNT))?;
        for (attribute, value) in self.iter() {
            map.serialize_entry(attribute.name(), &value)?;
        }
        map.end()
    }
}
