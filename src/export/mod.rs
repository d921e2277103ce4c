//! Export module for fairsplit
//!
//! Renders a budget summary in one of several formats:
//! - Table: terminal tables for people
//! - JSON: the machine-readable summary record
//! - YAML: the same record, human-readable
//! - CSV: one row per category share, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_summary_csv;
pub use self::json::export_summary_json;
pub use self::yaml::export_summary_yaml;

use std::io::Write;

use crate::display::format_summary;
use crate::engine::BudgetSummary;
use crate::error::{FairsplitError, FairsplitResult};

/// Output format for summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// CSV format
    Csv,
}

/// Write a summary in the requested format
///
/// `symbol` is only used by the table format; the data formats carry plain
/// numbers.
pub fn write_summary<W: Write>(
    summary: &BudgetSummary,
    format: OutputFormat,
    symbol: &str,
    writer: &mut W,
) -> FairsplitResult<()> {
    match format {
        OutputFormat::Table => write!(writer, "{}", format_summary(summary, symbol))
            .map_err(|e| FairsplitError::Export(e.to_string())),
        OutputFormat::Json => export_summary_json(summary, writer),
        OutputFormat::Yaml => export_summary_yaml(summary, writer),
        OutputFormat::Csv => export_summary_csv(summary, writer),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::build_summary;
    use crate::models::{BudgetCategory, BudgetMonth, BudgetPlan, Household, Member, Money};

    /// Alex 25000 / Sam 15000 with Rent 10000 and Food 4000 in May 2024
    pub(crate) fn sample_summary() -> BudgetSummary {
        let mut household = Household::new("The Flat");
        household.add_member(Member::with_income("Alex", Money::from_minor(25000)));
        household.add_member(Member::with_income("Sam", Money::from_minor(15000)));

        let mut plan = BudgetPlan::new(household.id, BudgetMonth::new(2024, 5).unwrap());
        plan.set_categories(vec![
            BudgetCategory::new("Rent", Money::from_minor(10000)),
            BudgetCategory::new("Food", Money::from_minor(4000)),
        ]);
        build_summary(&plan, &household).unwrap()
    }

    #[test]
    fn test_write_summary_formats() {
        let summary = sample_summary();

        let mut table = Vec::new();
        write_summary(&summary, OutputFormat::Table, "$", &mut table).unwrap();
        assert!(String::from_utf8(table).unwrap().contains("$87.50"));

        let mut json = Vec::new();
        write_summary(&summary, OutputFormat::Json, "$", &mut json).unwrap();
        assert!(String::from_utf8(json).unwrap().contains("\"householdId\""));

        let mut csv = Vec::new();
        write_summary(&summary, OutputFormat::Csv, "$", &mut csv).unwrap();
        assert!(String::from_utf8(csv).unwrap().starts_with("Month,"));
    }
}
