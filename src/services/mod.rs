//! Service layer for fairsplit
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, audit logging, and calls into the split engine.

pub mod budget;
pub mod household;

pub use budget::{clean_categories, BudgetService, SavedPlan};
pub use household::HouseholdService;
