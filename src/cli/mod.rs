//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod household;
pub mod plan;
pub mod summary;

pub use household::{handle_household_command, HouseholdCommands};
pub use plan::{handle_plan_command, PlanCommands};
pub use summary::{handle_summary_command, SummaryArgs};

use crate::error::{FairsplitError, FairsplitResult};
use crate::models::{BudgetMonth, Money, SplitPolicy};
use crate::storage::Storage;

/// Parse a user-supplied amount in major units ("2500" or "2500.00")
pub fn parse_amount(input: &str, what: &str) -> FairsplitResult<Money> {
    Money::parse(input).map_err(|e| {
        FairsplitError::Validation(format!(
            "Invalid {} '{}'. Use a format like '1000.00' or '1000': {}",
            what, input, e
        ))
    })
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(input: &str) -> FairsplitResult<BudgetMonth> {
    BudgetMonth::parse(input).map_err(|e| FairsplitError::Validation(e.to_string()))
}

/// Build a split policy from `--mode` and `--percent-more`
///
/// Returns `None` when neither is given. A percentage on its own implies
/// `topEarnsMore`.
pub fn parse_split(mode: Option<&str>, percent_more: Option<f64>) -> FairsplitResult<Option<SplitPolicy>> {
    let policy = match (mode, percent_more) {
        (None, None) => return Ok(None),
        (None, Some(pct)) => SplitPolicy::top_earns_more(pct)?,
        (Some(mode), pct) => SplitPolicy::from_parts(mode.trim(), pct.unwrap_or(0.0))?,
    };
    Ok(Some(policy))
}

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, count: usize) -> FairsplitResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SplitError;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2500", "income").unwrap(), Money::from_minor(250000));
        assert_eq!(parse_amount("12.5", "income").unwrap(), Money::from_minor(1250));

        let err = parse_amount("lots", "income").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid income 'lots'"));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-05").unwrap().to_string(), "2024-05");
        assert!(parse_month("2024-13").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_split() {
        assert_eq!(parse_split(None, None).unwrap(), None);
        assert_eq!(parse_split(Some("equal"), None).unwrap(), Some(SplitPolicy::Equal));
        assert_eq!(
            parse_split(None, Some(20.0)).unwrap(),
            Some(SplitPolicy::TopEarnsMore { percent_more: 20.0 })
        );
        assert_eq!(
            parse_split(Some("topEarnsMore"), None).unwrap(),
            Some(SplitPolicy::TopEarnsMore { percent_more: 0.0 })
        );
    }

    #[test]
    fn test_parse_split_errors() {
        let err = parse_split(Some("fifty-fifty"), None).unwrap_err();
        assert!(matches!(
            err,
            FairsplitError::Split(SplitError::InvalidSplitMode(_))
        ));

        let err = parse_split(Some("topEarnsMore"), Some(250.0)).unwrap_err();
        assert!(matches!(
            err,
            FairsplitError::Split(SplitError::InvalidPercentMore(_))
        ));
    }
}
