//! Summary CLI command
//!
//! Computes who owes what for a month and prints it in the chosen format.

use clap::Args;

use super::parse_month;
use crate::config::settings::Settings;
use crate::error::FairsplitResult;
use crate::export::{write_summary, OutputFormat};
use crate::services::{BudgetService, HouseholdService};
use crate::storage::Storage;

/// Arguments for `fairsplit summary`
#[derive(Args)]
pub struct SummaryArgs {
    /// Household name or ID
    pub household: String,
    /// Month (YYYY-MM)
    pub month: String,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> FairsplitResult<()> {
    let household = HouseholdService::new(storage).require(&args.household)?;
    let month = parse_month(&args.month)?;

    let summary = BudgetService::new(storage).summary(household.id, month)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_summary(&summary, args.format, &settings.currency_symbol, &mut handle)
}
