//! Budget plan service
//!
//! Saves monthly plans (one per household and month), changes their split
//! policy, and produces the per-member summary from the split engine.

use tracing::{info, warn};

use crate::audit::EntityType;
use crate::engine::{build_summary, BudgetSummary, SplitError};
use crate::error::{FairsplitError, FairsplitResult};
use crate::models::{
    BudgetCategory, BudgetMonth, BudgetPlan, Household, HouseholdId, MemberId, Money, SplitPolicy,
};
use crate::storage::Storage;

/// Result of saving a plan
#[derive(Debug, Clone)]
pub struct SavedPlan {
    pub plan: BudgetPlan,
    /// Number of submitted categories discarded during cleaning
    pub dropped: usize,
    /// Whether this save created the plan rather than replacing it
    pub created: bool,
}

/// Service for budget plan management
pub struct BudgetService<'a> {
    storage: &'a Storage,
    default_split: SplitPolicy,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            default_split: SplitPolicy::default(),
        }
    }

    /// Use a different split policy for plans saved without one
    pub fn with_default_split(mut self, split: SplitPolicy) -> Self {
        self.default_split = split;
        self
    }

    /// Create or replace the plan for a household and month
    ///
    /// Categories with an empty name or a negative amount are dropped and
    /// counted in [`SavedPlan::dropped`]. When `split` is `None` a new plan
    /// gets the default policy and an existing plan keeps its own.
    pub fn save_plan(
        &self,
        household_id: HouseholdId,
        month: BudgetMonth,
        categories: Vec<BudgetCategory>,
        split: Option<SplitPolicy>,
        created_by: Option<MemberId>,
    ) -> FairsplitResult<SavedPlan> {
        let household = self.load_household(household_id)?;

        if let Some(member_id) = created_by {
            if household.member(member_id).is_none() {
                return Err(FairsplitError::member_not_found(member_id.to_string()));
            }
        }

        let (categories, dropped) = clean_categories(categories);
        if Money::checked_sum(categories.iter().map(|c| c.amount)).is_none() {
            return Err(SplitError::AmountOverflow.into());
        }
        if dropped > 0 {
            warn!(
                household = %household_id,
                %month,
                dropped,
                "Dropped invalid categories"
            );
        }

        let default_split = self.default_split;
        let (before, plan) = self
            .storage
            .plans
            .upsert_with(household_id, month, |plan, is_new| {
                plan.set_categories(categories);
                match split {
                    Some(split) => plan.set_split(split),
                    None if is_new => plan.set_split(default_split),
                    None => {}
                }
                if is_new {
                    plan.created_by = created_by;
                }
            })?;
        self.storage.plans.save()?;

        let label = plan_label(&household, month);
        let created = before.is_none();
        match &before {
            None => self.storage.log_create(
                EntityType::BudgetPlan,
                plan.id.to_string(),
                Some(label),
                &plan,
            )?,
            Some(before) => self.storage.log_update(
                EntityType::BudgetPlan,
                plan.id.to_string(),
                Some(label),
                before,
                &plan,
            )?,
        }

        info!(
            household = %household_id,
            %month,
            categories = plan.categories.len(),
            split = %plan.split,
            created,
            "Saved budget plan"
        );

        Ok(SavedPlan {
            plan,
            dropped,
            created,
        })
    }

    /// Change only the split policy of an existing plan
    pub fn update_split(
        &self,
        household_id: HouseholdId,
        month: BudgetMonth,
        split: SplitPolicy,
    ) -> FairsplitResult<BudgetPlan> {
        let household = self.load_household(household_id)?;
        let before = self
            .storage
            .plans
            .get(household_id, month)?
            .ok_or_else(|| FairsplitError::plan_not_found(plan_label(&household, month)))?;

        if before.split == split {
            return Ok(before);
        }

        let (_, plan) = self
            .storage
            .plans
            .upsert_with(household_id, month, |plan, _| plan.set_split(split))?;
        self.storage.plans.save()?;

        self.storage.log_update(
            EntityType::BudgetPlan,
            plan.id.to_string(),
            Some(plan_label(&household, month)),
            &before,
            &plan,
        )?;

        info!(household = %household_id, %month, split = %plan.split, "Updated split policy");
        Ok(plan)
    }

    /// Get the plan for a household and month
    pub fn get_plan(
        &self,
        household_id: HouseholdId,
        month: BudgetMonth,
    ) -> FairsplitResult<Option<BudgetPlan>> {
        self.storage.plans.get(household_id, month)
    }

    /// Get all plans of a household, oldest month first
    pub fn list_plans(&self, household_id: HouseholdId) -> FairsplitResult<Vec<BudgetPlan>> {
        self.storage.plans.get_for_household(household_id)
    }

    /// Compute the split summary for a household's month
    ///
    /// Always recomputed from the current roster and incomes.
    pub fn summary(
        &self,
        household_id: HouseholdId,
        month: BudgetMonth,
    ) -> FairsplitResult<BudgetSummary> {
        let household = self.load_household(household_id)?;
        let plan = self
            .storage
            .plans
            .get(household_id, month)?
            .ok_or_else(|| FairsplitError::plan_not_found(plan_label(&household, month)))?;

        let summary = build_summary(&plan, &household)?;

        info!(
            household = %household_id,
            %month,
            total_budget = summary.total_budget.minor_units(),
            people = summary.people.len(),
            "Built budget summary"
        );
        Ok(summary)
    }

    fn load_household(&self, id: HouseholdId) -> FairsplitResult<Household> {
        self.storage
            .households
            .get(id)?
            .ok_or_else(|| FairsplitError::household_not_found(id.to_string()))
    }
}

/// Trim category names and drop entries that fail validation
///
/// Returns the kept categories in their original order and how many were
/// dropped.
pub fn clean_categories(categories: Vec<BudgetCategory>) -> (Vec<BudgetCategory>, usize) {
    let submitted = categories.len();
    let kept: Vec<_> = categories
        .into_iter()
        .map(|c| BudgetCategory::new(&c.name, c.amount))
        .filter(|c| c.validate().is_ok())
        .collect();
    let dropped = submitted - kept.len();
    (kept, dropped)
}

fn plan_label(household: &Household, month: BudgetMonth) -> String {
    format!("{} {}", household.name, month)
}
