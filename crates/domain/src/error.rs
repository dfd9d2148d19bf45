//! Unified error types for the domain layer
//!
//! Point-buy rejections are ordinary values: the caller shows them as a
//! notice and keeps the previous state.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Attribute point budget is exhausted
    #[error("A character can have up to {max} delegated attribute points (currently {total})")]
    BudgetExceeded { total: i32, max: i32 },

    /// No skill points left to spend
    #[error("You need more skill points ({used}/{available} used); raise Intelligence to get more")]
    InsufficientPoints { used: i32, available: i32 },

    /// Skill name is not in the skill table
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    /// Class name is not in the class table
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a budget exceeded error
    pub fn budget_exceeded(total: i32, max: i32) -> Self {
        Self::BudgetExceeded { total, max }
    }

    /// Create an insufficient skill points error
    pub fn insufficient_points(used: i32, available: i32) -> Self {
        Self::InsufficientPoints { used, available }
    }

    /// Create an unknown skill error
    pub fn unknown_skill(name: impl Into<String>) -> Self {
        Self::UnknownSkill(name.into())
    }

    /// Create an unknown class error
    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::UnknownClass(name.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Attribute {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "STR" => Ok(Self::Strength),
    ///             _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Whether this is a point-buy limit the user can resolve by reallocating.
    pub fn is_allocation_limit(&self) -> bool {
        matches!(
            self,
            Self::BudgetExceeded { .. } | Self::InsufficientPoints { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_exceeded_error() {
        let err = DomainError::budget_exceeded(70, 70);
        assert!(matches!(err, DomainError::BudgetExceeded { .. }));
        assert_eq!(
            err.to_string(),
            "A character can have up to 70 delegated attribute points (currently 70)"
        );
        assert!(err.is_allocation_limit());
    }

    #[test]
    fn test_insufficient_points_error() {
        let err = DomainError::insufficient_points(10, 10);
        assert!(err.to_string().contains("10/10"));
        assert!(err.is_allocation_limit());
    }

    #[test]
    fn test_unknown_names_are_not_allocation_limits() {
        let err = DomainError::unknown_skill("Cooking");
        assert_eq!(err.to_string(), "Unknown skill: Cooking");
        assert!(!err.is_allocation_limit());
        assert!(!DomainError::unknown_class("Paladin").is_allocation_limit());
    }
}
