//! Household CLI commands
//!
//! Implements CLI commands for households and their members.

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::household::{format_household_details, format_household_list};
use crate::error::FairsplitResult;
use crate::services::HouseholdService;
use crate::storage::Storage;

/// Household subcommands
#[derive(Subcommand)]
pub enum HouseholdCommands {
    /// Create a new household
    Create {
        /// Household name
        name: String,
    },
    /// List all households
    List,
    /// Show a household and its members
    Show {
        /// Household name or ID
        household: String,
    },
    /// Add a member to a household
    AddMember {
        /// Household name or ID
        household: String,
        /// Member name
        name: String,
        /// Monthly income (e.g., "2500.00" or "2500")
        #[arg(short, long, default_value = "0")]
        income: String,
    },
    /// Change a member's monthly income
    SetIncome {
        /// Household name or ID
        household: String,
        /// Member name or ID
        member: String,
        /// New monthly income
        income: String,
    },
    /// Remove a member from a household
    RemoveMember {
        /// Household name or ID
        household: String,
        /// Member name or ID
        member: String,
    },
}

/// Handle a household command
pub fn handle_household_command(
    storage: &Storage,
    settings: &Settings,
    cmd: HouseholdCommands,
) -> FairsplitResult<()> {
    let service = HouseholdService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        HouseholdCommands::Create { name } => {
            let household = service.create(&name)?;

            println!("Created household: {}", household.name);
            println!("  ID: {}", household.id);
            println!();
            println!(
                "Add members with 'fairsplit household add-member \"{}\" <name> --income <amount>'.",
                household.name
            );
        }

        HouseholdCommands::List => {
            let households = service.list()?;
            println!("{}", format_household_list(&households, symbol));
        }

        HouseholdCommands::Show { household } => {
            let found = service.require(&household)?;
            print!("{}", format_household_details(&found, symbol));
        }

        HouseholdCommands::AddMember {
            household,
            name,
            income,
        } => {
            let found = service.require(&household)?;
            let income = parse_amount(&income, "income")?;
            let member = service.add_member(found.id, &name, income)?;

            println!("Added {} to {}", member.name, found.name);
            println!("  Monthly income: {}", member.monthly_income.format_with_symbol(symbol));
            println!("  ID: {}", member.id);
        }

        HouseholdCommands::SetIncome {
            household,
            member,
            income,
        } => {
            let found = service.require(&household)?;
            let target = service.require_member(&found, &member)?;
            let income = parse_amount(&income, "income")?;
            let updated = service.set_income(found.id, target.id, income)?;

            println!(
                "Updated income for {}: {} -> {}",
                updated.name,
                target.monthly_income.format_with_symbol(symbol),
                updated.monthly_income.format_with_symbol(symbol)
            );
        }

        HouseholdCommands::RemoveMember { household, member } => {
            let found = service.require(&household)?;
            let target = service.require_member(&found, &member)?;
            let removed = service.remove_member(found.id, target.id)?;

            println!("Removed {} from {}", removed.name, found.name);
        }
    }

    Ok(())
}
