//! Budget plan repository for JSON storage
//!
//! Plans are keyed by (household, month), so there is at most one plan per
//! household per month.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FairsplitError;
use crate::models::{BudgetMonth, BudgetPlan, HouseholdId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable plan data
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PlanData {
    #[serde(default)]
    plans: Vec<BudgetPlan>,
}

/// Composite key for budget plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanKey {
    pub household_id: HouseholdId,
    pub month: BudgetMonth,
}

impl PlanKey {
    pub fn new(household_id: HouseholdId, month: BudgetMonth) -> Self {
        Self {
            household_id,
            month,
        }
    }

    fn of(plan: &BudgetPlan) -> Self {
        Self::new(plan.household_id, plan.month)
    }
}

/// Repository for budget plan persistence
pub struct PlanRepository {
    path: PathBuf,
    plans: RwLock<HashMap<PlanKey, BudgetPlan>>,
}

impl PlanRepository {
    /// Create a new plan repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            plans: RwLock::new(HashMap::new()),
        }
    }

    /// Load plans from disk
    pub fn load(&self) -> Result<(), FairsplitError> {
        let file_data: PlanData = read_json(&self.path)?;

        let mut plans = self
            .plans
            .write()
            .map_err(|e| FairsplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        plans.clear();
        for plan in file_data.plans {
            plans.insert(PlanKey::of(&plan), plan);
        }

        Ok(())
    }

    /// Save plans to disk
    pub fn save(&self) -> Result<(), FairsplitError> {
        let plans = self
            .plans
            .read()
            .map_err(|e| FairsplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut plan_list: Vec<_> = plans.values().cloned().collect();
        plan_list.sort_by(|a, b| {
            a.month
                .cmp(&b.month)
                .then(a.created_at.cmp(&b.created_at))
        });

        write_json_atomic(&self.path, &PlanData { plans: plan_list })
    }

    /// Get the plan for a household and month
    pub fn get(
        &self,
        household_id: HouseholdId,
        month: BudgetMonth,
    ) -> Result<Option<BudgetPlan>, FairsplitError> {
        let plans = self
            .plans
            .read()
            .map_err(|e| FairsplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(plans.get(&PlanKey::new(household_id, month)).cloned())
    }

    /// Get all plans for a household, oldest month first
    pub fn get_for_household(
        &self,
        household_id: HouseholdId,
    ) -> Result<Vec<BudgetPlan>, FairsplitError> {
        let plans = self
            .plans
            .read()
            .map_err(|e| FairsplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<_> = plans
            .values()
            .filter(|p| p.household_id == household_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.month.cmp(&b.month));
        Ok(result)
    }

    /// Create or modify the plan for a household and month
    ///
    /// Runs `apply` on the existing plan, or on a fresh one if the month has
    /// none yet, while holding the write lock. The flag passed to `apply` is
    /// true for a fresh plan. Returns the previous state (if any) and the
    /// stored result.
    pub fn upsert_with<F>(
        &self,
        household_id: HouseholdId,
        month: BudgetMonth,
        apply: F,
    ) -> Result<(Option<BudgetPlan>, BudgetPlan), FairsplitError>
    where
        F: FnOnce(&mut BudgetPlan, bool),
    {
        let mut plans = self
            .plans
            .write()
            .map_err(|e| FairsplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let key = PlanKey::new(household_id, month);
        let before = plans.get(&key).cloned();
        let mut plan = before
            .clone()
            .unwrap_or_else(|| BudgetPlan::new(household_id, month));
        apply(&mut plan, before.is_none());

        plans.insert(key, plan.clone());
        Ok((before, plan))
    }
}
