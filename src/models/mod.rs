//! Core data models for fairsplit
//!
//! This module contains the value types of the household budgeting domain:
//! households and their members, monthly budget plans, categories, and the
//! split policies that decide who pays what.

pub mod category;
pub mod household;
pub mod ids;
pub mod member;
pub mod money;
pub mod month;
pub mod plan;
pub mod split;

pub use category::{BudgetCategory, CategoryValidationError};
pub use household::Household;
pub use ids::{HouseholdId, MemberId, PlanId};
pub use member::{Member, MemberValidationError};
pub use money::Money;
pub use month::BudgetMonth;
pub use plan::BudgetPlan;
pub use split::{SplitPolicy, MAX_PERCENT_MORE};
