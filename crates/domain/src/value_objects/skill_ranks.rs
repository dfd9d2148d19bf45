//! Skill ranks value object - allocated ranks for every skill in the table.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

use super::attribute_set::AttributeSet;
use crate::error::DomainError;
use crate::rules::{skill_index, SkillDefinition, SKILL_COUNT, SKILL_LIST};

/// Ranks for every skill in [`SKILL_LIST`], defaulting to 0.
///
/// Spending is capped by the Intelligence-derived skill points at the moment
/// of the increment only; lowering Intelligence later does not refund ranks.
/// Decrement has no floor, so ranks can go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "HashMap<String, i32>")]
pub struct SkillRanks {
    ranks: [i32; SKILL_COUNT],
}

impl SkillRanks {
    /// Rank of a skill by name.
    pub fn rank(&self, skill_name: &str) -> Result<i32, DomainError> {
        skill_index(skill_name).map(|i| self.ranks[i])
    }

    /// Copy of these ranks with one skill set to `rank`.
    pub fn with_rank(mut self, skill_name: &str, rank: i32) -> Result<Self, DomainError> {
        let i = skill_index(skill_name)?;
        self.ranks[i] = rank;
        Ok(self)
    }

    /// Sum of all ranks, saturating at the `i32` bounds.
    pub fn used_points(&self) -> i32 {
        self.ranks.iter().fold(0, |sum, &r| sum.saturating_add(r))
    }

    /// Spend a skill point on `skill_name`.
    ///
    /// Allowed only while used points are strictly below the points
    /// `attributes` grants, so the used total can reach but never pass it.
    pub fn increment(
        &self,
        skill_name: &str,
        attributes: &AttributeSet,
    ) -> Result<Self, DomainError> {
        let i = skill_index(skill_name)?;
        let used = self.used_points();
        let available = attributes.available_skill_points();
        if used >= available {
            return Err(DomainError::insufficient_points(used, available));
        }
        let mut next = *self;
        next.ranks[i] = next.ranks[i].saturating_add(1);
        Ok(next)
    }

    /// Take a point back from `skill_name`. Unfloored.
    pub fn decrement(&self, skill_name: &str) -> Result<Self, DomainError> {
        let i = skill_index(skill_name)?;
        let mut next = *self;
        next.ranks[i] = next.ranks[i].saturating_sub(1);
        Ok(next)
    }

    /// Skills and their ranks in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static SkillDefinition, i32)> + '_ {
        SKILL_LIST.iter().zip(self.ranks.iter().copied())
    }
}

impl From<HashMap<String, i32>> for SkillRanks {
    fn from(map: HashMap<String, i32>) -> Self {
        map.iter().fold(Self::default(), |ranks, (name, &rank)| {
            ranks.with_rank(name, rank).unwrap_or(ranks)
        })
    }
}

impl Serialize for SkillRanks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SKILL_COUNT))?;
        for (skill, rank) in self.iter() {
            map.serialize_entry(skill.name, &rank)?;
        }
        map.end()
    }
}
