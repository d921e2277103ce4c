//! Household member model
//!
//! A member is one paying person in a household together with the monthly
//! income the income-based split policies look at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;
use super::money::Money;

/// Minimum length of member and household names
pub const MIN_NAME_LEN: usize = 2;

/// Maximum length of member and household names
pub const MAX_NAME_LEN: usize = 80;

/// A paying member of a household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Monthly income (never negative)
    pub monthly_income: Money,

    /// When the member joined the household
    pub joined_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member with zero income
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            monthly_income: Money::zero(),
            joined_at: Utc::now(),
        }
    }

    /// Create a new member with a monthly income
    pub fn with_income(name: impl Into<String>, monthly_income: Money) -> Self {
        let mut member = Self::new(name);
        member.monthly_income = monthly_income;
        member
    }

    /// Validate the member
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        validate_name(&self.name)?;

        if self.monthly_income.is_negative() {
            return Err(MemberValidationError::NegativeIncome(self.monthly_income));
        }

        Ok(())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (income: {})", self.name, self.monthly_income)
    }
}

/// Check a member or household name against the length bounds
pub fn validate_name(name: &str) -> Result<(), MemberValidationError> {
    let len = name.trim().chars().count();
    if len == 0 {
        return Err(MemberValidationError::EmptyName);
    }
    if len < MIN_NAME_LEN {
        return Err(MemberValidationError::NameTooShort(len));
    }
    if len > MAX_NAME_LEN {
        return Err(MemberValidationError::NameTooLong(len));
    }
    Ok(())
}

/// Validation errors for members and households
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    NameTooShort(usize),
    NameTooLong(usize),
    NegativeIncome(Money),
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameTooShort(len) => {
                write!(f, "Name too short ({} chars, min {})", len, MIN_NAME_LEN)
            }
            Self::NameTooLong(len) => {
                write!(f, "Name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::NegativeIncome(amount) => {
                write!(f, "Monthly income cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for MemberValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = Member::new("Alex");
        assert_eq!(member.name, "Alex");
        assert!(member.monthly_income.is_zero());
        assert!(member.validate().is_ok());
    }

    #[test]
    fn test_negative_income_rejected() {
        let member = Member::with_income("Alex", Money::from_minor(-1));
        assert!(matches!(
            member.validate(),
            Err(MemberValidationError::NegativeIncome(_))
        ));
    }

    #[test]
    fn test_name_bounds() {
        assert_eq!(validate_name("  "), Err(MemberValidationError::EmptyName));
        assert_eq!(validate_name("A"), Err(MemberValidationError::NameTooShort(1)));
        assert_eq!(
            validate_name(&"x".repeat(81)),
            Err(MemberValidationError::NameTooLong(81))
        );
        assert!(validate_name("Jo").is_ok());
    }
}
