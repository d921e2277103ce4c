//! Budget summary builder
//!
//! Combines weight calculation and rounding allocation into the full
//! per-member, per-category breakdown of one budget plan. Summaries are
//! derived data: they are rebuilt on every request and never stored.

use serde::Serialize;
use tracing::debug;

use super::allocator::{allocate, MemberAmount};
use super::error::SplitError;
use super::weights::compute_weights;
use crate::models::{BudgetMonth, BudgetPlan, Household, HouseholdId, MemberId, Money, SplitPolicy};

/// Decimal places kept when weights are shown to people
pub const WEIGHT_DISPLAY_DECIMALS: i32 = 4;

/// One member's totals within a summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSummary {
    pub id: MemberId,
    pub name: String,
    pub income: Money,
    /// Weight rounded for display; computation uses full precision
    pub weight: f64,
    pub total: Money,
}

/// One category and how it is divided
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub name: String,
    pub amount: Money,
    pub per_person: Vec<MemberAmount>,
}

/// Who owes what for one month's budget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub household_id: HouseholdId,
    pub month: BudgetMonth,
    pub split: SplitPolicy,
    pub total_budget: Money,
    pub total_income: Money,
    pub people: Vec<PersonSummary>,
    pub categories: Vec<CategorySummary>,
}

impl BudgetSummary {
    /// The summary row for a member
    pub fn person(&self, id: MemberId) -> Option<&PersonSummary> {
        self.people.iter().find(|p| p.id == id)
    }

    /// The summary row for a category (case-insensitive)
    pub fn category(&self, name: &str) -> Option<&CategorySummary> {
        let name_lower = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
    }
}

/// Build the summary of `plan` for the members of `household`
///
/// Every category is allocated on its own with the same weights, and the
/// grand total is allocated once more independently, so each of them sums
/// exactly; rounding slack never moves between categories.
pub fn build_summary(plan: &BudgetPlan, household: &Household) -> Result<BudgetSummary, SplitError> {
    if household.members.len() < 2 {
        return Err(SplitError::InsufficientMembers {
            found: household.members.len(),
        });
    }

    if let Some(category) = plan.categories.iter().find(|c| c.amount.is_negative()) {
        return Err(SplitError::InvalidCategoryAmount {
            name: category.name.clone(),
            amount: category.amount.to_string(),
        });
    }

    let total_budget = plan.total_budget().ok_or(SplitError::AmountOverflow)?;
    let total_income = household.total_income().ok_or(SplitError::AmountOverflow)?;
    let weights = compute_weights(&plan.split, &household.members);

    let people = allocate(total_budget, &weights)?
        .into_iter()
        .zip(&weights)
        .map(|(share, weight)| PersonSummary {
            id: share.id,
            name: share.name,
            income: weight.income,
            weight: round_weight(weight.weight),
            total: share.amount,
        })
        .collect();

    let categories = plan
        .categories
        .iter()
        .map(|category| {
            Ok(CategorySummary {
                name: category.name.clone(),
                amount: category.amount,
                per_person: allocate(category.amount, &weights)?,
            })
        })
        .collect::<Result<Vec<_>, SplitError>>()?;

    debug!(
        household = %household.id,
        month = %plan.month,
        split = %plan.split,
        categories = plan.categories.len(),
        "built budget summary"
    );

    Ok(BudgetSummary {
        household_id: household.id,
        month: plan.month,
        split: plan.split,
        total_budget,
        total_income,
        people,
        categories,
    })
}

fn round_weight(weight: f64) -> f64 {
    let factor = 10f64.powi(WEIGHT_DISPLAY_DECIMALS);
    (weight * factor).round() / factor
}
