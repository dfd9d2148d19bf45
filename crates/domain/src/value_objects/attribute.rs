//! Attribute value object - the six character stats used for point-buy.
//!
//! Provides type safety for attribute references instead of passing
//! attribute names around as strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Character attributes, in display order.
///
/// Serialized by their full names ("Strength", "Dexterity", ...), which is the
/// key format the remote store uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    /// Physical power
    Strength,
    /// Agility and reflexes
    Dexterity,
    /// Endurance and health
    Constitution,
    /// Reasoning and memory; drives skill points
    Intelligence,
    /// Perception and insight
    Wisdom,
    /// Force of personality
    Charisma,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Number of attributes in every attribute set.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the full name (e.g., "Strength").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Attribute with exactly this full name, as used on the wire.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attribute| attribute.name() == name)
    }

    /// Returns the short uppercase abbreviation (e.g., "STR").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Strength),
            "DEX" | "DEXTERITY" => Ok(Self::Dexterity),
            "CON" | "CONSTITUTION" => Ok(Self::Constitution),
            "INT" | "INTELLIGENCE" => Ok(Self::Intelligence),
            "WIS" | "WISDOM" => Ok(Self::Wisdom),
            "CHA" | "CHARISMA" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
        }
    }
}

/// Derived modifier for an attribute value: `floor((value - 10) / 2)`.
///
/// Rust's `/` rounds toward zero, so this uses Euclidean division, which
/// floors for a positive divisor.
pub fn modifier(value: i32) -> i32 {
    value.saturating_sub(10).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_uses_floor_division() {
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(12), 1);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(7), -2);
        assert_eq!(modifier(1), -5);
        assert_eq!(modifier(20), 5);
    }

    #[test]
    fn test_attribute_from_str() {
        assert_eq!(Attribute::from_str("Strength"), Ok(Attribute::Strength));
        assert_eq!(Attribute::from_str("int"), Ok(Attribute::Intelligence));
        assert_eq!(Attribute::from_str(" CHA "), Ok(Attribute::Charisma));
        assert!(Attribute::from_str("Luck").is_err());
    }

    #[test]
    fn test_from_name_matches_wire_names_only() {
        assert_eq!(Attribute::from_name("Wisdom"), Some(Attribute::Wisdom));
        assert_eq!(Attribute::from_name("WIS"), None);
        assert_eq!(Attribute::from_name("wisdom"), None);
    }

    #[test]
    fn test_attribute_order_matches_index() {
        for (i, attribute) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attribute.index(), i);
        }
    }

    #[test]
    fn test_attribute_serde_uses_full_name() {
        let json = serde_json::to_string(&Attribute::Wisdom).unwrap();
        assert_eq!(json, "\"Wisdom\"");
        let parsed: Attribute = serde_json::from_str("\"Dexterity\"").unwrap();
        assert_eq!(parsed, Attribute::Dexterity);
    }
}
