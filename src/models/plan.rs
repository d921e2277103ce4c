//! Monthly budget plan model
//!
//! A plan belongs to exactly one household and one calendar month. Saving a
//! plan for a (household, month) pair that already has one replaces its
//! categories and split policy instead of creating a second plan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::BudgetCategory;
use super::ids::{HouseholdId, MemberId, PlanId};
use super::money::Money;
use super::month::BudgetMonth;
use super::split::SplitPolicy;

/// A household's budget for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    /// Unique identifier
    pub id: PlanId,

    /// The household this plan belongs to
    pub household_id: HouseholdId,

    /// The month this plan covers
    pub month: BudgetMonth,

    /// Spending categories in display order
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,

    /// How costs are divided between members
    #[serde(default)]
    pub split: SplitPolicy,

    /// The member who first saved this plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<MemberId>,

    /// When the plan was created
    pub created_at: DateTime<Utc>,

    /// When the plan was last modified
    pub updated_at: DateTime<Utc>,
}

impl BudgetPlan {
    /// Create an empty plan using the default split policy
    pub fn new(household_id: HouseholdId, month: BudgetMonth) -> Self {
        let now = Utc::now();
        Self {
            id: PlanId::new(),
            household_id,
            month,
            categories: Vec::new(),
            split: SplitPolicy::default(),
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the categories
    pub fn set_categories(&mut self, categories: Vec<BudgetCategory>) {
        self.categories = categories;
        self.updated_at = Utc::now();
    }

    /// Replace the split policy
    pub fn set_split(&mut self, split: SplitPolicy) {
        self.split = split;
        self.updated_at = Utc::now();
    }

    /// Sum of all category amounts, or None if it overflows
    pub fn total_budget(&self) -> Option<Money> {
        Money::checked_sum(self.categories.iter().map(|c| c.amount))
    }

    /// Get a category by name (case-insensitive)
    pub fn category(&self, name: &str) -> Option<&BudgetCategory> {
        let name_lower = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
    }
}

impl fmt::Display for BudgetPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} categories, ", self.month, self.categories.len())?;
        match self.total_budget() {
            Some(total) => write!(f, "total {}", total)?,
            None => write!(f, "total out of range")?,
        }
        write!(f, " ({})", self.split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plan_defaults() {
        let month = BudgetMonth::new(2024, 5).unwrap();
        let plan = BudgetPlan::new(HouseholdId::new(), month);

        assert!(plan.categories.is_empty());
        assert_eq!(plan.split, SplitPolicy::Income);
        assert_eq!(plan.total_budget(), Some(Money::zero()));
    }

    #[test]
    fn test_total_budget() {
        let mut plan = BudgetPlan::new(HouseholdId::new(), BudgetMonth::new(2024, 5).unwrap());
        plan.set_categories(vec![
            BudgetCategory::new("Rent", Money::from_minor(10000)),
            BudgetCategory::new("Food", Money::from_minor(4000)),
        ]);

        assert_eq!(plan.total_budget(), Some(Money::from_minor(14000)));
        assert!(plan.category("rent").is_some());
        assert_eq!(plan.to_string(), "2024-05: 2 categories, total 140.00 (income)");
    }

    #[test]
    fn test_total_budget_overflow() {
        let mut plan = BudgetPlan::new(HouseholdId::new(), BudgetMonth::new(2024, 5).unwrap());
        plan.set_categories(vec![
            BudgetCategory::new("X", Money::from_minor(i64::MAX)),
            BudgetCategory::new("Y", Money::from_minor(1)),
        ]);

        assert_eq!(plan.total_budget(), None);
        assert!(plan.to_string().contains("total out of range"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut plan = BudgetPlan::new(HouseholdId::new(), BudgetMonth::new(2024, 5).unwrap());
        plan.set_split(SplitPolicy::TopEarnsMore { percent_more: 20.0 });

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"month\":\"2024-05\""));
        let back: BudgetPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
