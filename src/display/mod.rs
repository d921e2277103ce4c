//! Display formatting for terminal output
//!
//! Provides utilities for formatting households, plans, and split summaries
//! as terminal tables.

pub mod household;
pub mod plan;
pub mod summary;

pub use household::{format_household_details, format_household_list};
pub use plan::{format_plan_details, format_plan_list};
pub use summary::{format_category_breakdown, format_summary};

use crate::models::Money;

/// Format a computed total that may have overflowed
pub fn format_total(total: Option<Money>, symbol: &str) -> String {
    match total {
        Some(total) => total.format_with_symbol(symbol),
        None => "out of range".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(Some(Money::from_minor(14000)), "$"), "$140.00");
        assert_eq!(format_total(None, "$"), "out of range");
    }
}
