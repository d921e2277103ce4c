//! Budget plan CLI commands
//!
//! Implements CLI commands for saving monthly plans and changing how they
//! are split.

use clap::Subcommand;
use tracing::warn;

use super::{parse_month, parse_split};
use crate::config::settings::Settings;
use crate::display::format_total;
use crate::display::plan::{format_plan_details, format_plan_list};
use crate::error::{FairsplitError, FairsplitResult};
use crate::models::BudgetCategory;
use crate::services::{BudgetService, HouseholdService};
use crate::storage::Storage;

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create or replace the plan for a month
    Save {
        /// Household name or ID
        household: String,
        /// Month (YYYY-MM)
        month: String,
        /// Category and amount, repeatable (e.g., --category "Rent=1000")
        #[arg(short, long = "category", value_name = "NAME=AMOUNT")]
        categories: Vec<String>,
        /// Split mode (income, equal, topEarnsMore)
        #[arg(short, long)]
        mode: Option<String>,
        /// How many percent more the top earner pays (0-200, topEarnsMore only)
        #[arg(short, long)]
        percent_more: Option<f64>,
        /// Member saving the plan
        #[arg(long)]
        by: Option<String>,
    },
    /// Change only the split policy of an existing plan
    Split {
        /// Household name or ID
        household: String,
        /// Month (YYYY-MM)
        month: String,
        /// Split mode (income, equal, topEarnsMore)
        #[arg(short, long)]
        mode: String,
        /// How many percent more the top earner pays (0-200, topEarnsMore only)
        #[arg(short, long)]
        percent_more: Option<f64>,
    },
    /// Show a month's plan
    Show {
        /// Household name or ID
        household: String,
        /// Month (YYYY-MM)
        month: String,
    },
    /// List all plans of a household
    List {
        /// Household name or ID
        household: String,
    },
}

/// Handle a plan command
pub fn handle_plan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PlanCommands,
) -> FairsplitResult<()> {
    let households = HouseholdService::new(storage);
    let service = BudgetService::new(storage).with_default_split(settings.default_split);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        PlanCommands::Save {
            household,
            month,
            categories,
            mode,
            percent_more,
            by,
        } => {
            let found = households.require(&household)?;
            let month = parse_month(&month)?;
            let split = parse_split(mode.as_deref(), percent_more)?;
            let created_by = match by {
                Some(member) => Some(households.require_member(&found, &member)?.id),
                None => None,
            };

            let mut parsed = Vec::with_capacity(categories.len());
            let mut unparsable = 0;
            for pair in &categories {
                match BudgetCategory::parse_pair(pair) {
                    Ok(category) => parsed.push(category),
                    Err(e) => {
                        warn!(entry = %pair, error = %e, "Skipping category");
                        unparsable += 1;
                    }
                }
            }

            let saved = service.save_plan(found.id, month, parsed, split, created_by)?;
            let plan = &saved.plan;

            println!(
                "{} plan for {} {}",
                if saved.created { "Created" } else { "Updated" },
                found.name,
                plan.month
            );
            println!("  Categories: {}", plan.categories.len());
            println!("  Total:      {}", format_total(plan.total_budget(), symbol));
            println!("  Split:      {}", plan.split);

            let dropped = saved.dropped + unparsable;
            if dropped > 0 {
                println!(
                    "  Dropped {} invalid {} (empty name or invalid amount)",
                    dropped,
                    if dropped == 1 { "category" } else { "categories" }
                );
            }
        }

        PlanCommands::Split {
            household,
            month,
            mode,
            percent_more,
        } => {
            let found = households.require(&household)?;
            let month = parse_month(&month)?;
            let split = parse_split(Some(mode.as_str()), percent_more)?.ok_or_else(|| {
                FairsplitError::Validation("A split mode is required".into())
            })?;

            let plan = service.update_split(found.id, month, split)?;
            println!("Split for {} {} is now {}", found.name, plan.month, plan.split);
        }

        PlanCommands::Show { household, month } => {
            let found = households.require(&household)?;
            let month = parse_month(&month)?;
            let plan = service.get_plan(found.id, month)?.ok_or_else(|| {
                FairsplitError::plan_not_found(format!("{} {}", found.name, month))
            })?;

            print!("{}", format_plan_details(&plan, &found, symbol));
        }

        PlanCommands::List { household } => {
            let found = households.require(&household)?;
            let plans = service.list_plans(found.id)?;
            println!("{}", format_plan_list(&plans, symbol));
        }
    }

    Ok(())
}
