//! Budget category model
//!
//! A category is one named line of a monthly budget plan with its target
//! amount, e.g. "Rent" = 10000.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::engine::SplitError;

/// A spending category with its budgeted amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name (trimmed, non-empty)
    pub name: String,

    /// Budgeted amount for the month
    pub amount: Money,
}

impl BudgetCategory {
    /// Create a new category, trimming the name
    pub fn new(name: impl AsRef<str>, amount: Money) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            amount,
        }
    }

    /// Parse a `Name=Amount` pair, e.g. `Rent=10000` or `Food=40.50`
    pub fn parse_pair(s: &str) -> Result<Self, SplitError> {
        let (name, amount) = s.rsplit_once('=').ok_or_else(|| {
            SplitError::InvalidCategoryAmount {
                name: s.trim().to_string(),
                amount: String::new(),
            }
        })?;

        let parsed = Money::parse(amount).map_err(|_| SplitError::InvalidCategoryAmount {
            name: name.trim().to_string(),
            amount: amount.trim().to_string(),
        })?;

        Ok(Self::new(name, parsed))
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.amount.is_negative() {
            return Err(CategoryValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.amount)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NegativeAmount(Money),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Category amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
