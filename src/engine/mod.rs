//! Budget split engine
//!
//! Pure, synchronous computation with no I/O: given a household roster and a
//! budget plan it works out how much each member owes, in total and per
//! category, with shares that always sum exactly to the budgeted amounts.
//!
//! - [`compute_weights`]: split policy + roster -> fraction per member
//! - [`allocate`]: total + weights -> whole minor-unit shares
//! - [`build_summary`]: runs both over a plan's categories and grand total

mod allocator;
mod error;
mod summary;
mod weights;

pub use allocator::{allocate, MemberAmount};
pub use error::SplitError;
pub use summary::{build_summary, BudgetSummary, CategorySummary, PersonSummary, WEIGHT_DISPLAY_DECIMALS};
pub use weights::{compute_weights, MemberWeight};
