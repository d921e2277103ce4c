//! Household display formatting
//!
//! Formats households and their member rosters for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format_total;
use crate::models::{Household, Money};

#[derive(Tabled)]
struct HouseholdRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Members")]
    members: usize,
    #[tabled(rename = "Total Income")]
    income: String,
}

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Monthly Income")]
    income: String,
    #[tabled(rename = "Income Share")]
    share: String,
}

/// Format a list of households as a table
pub fn format_household_list(households: &[Household], symbol: &str) -> String {
    if households.is_empty() {
        return "No households found.".to_string();
    }

    let rows = households.iter().map(|h| HouseholdRow {
        id: h.id.to_string(),
        name: h.name.clone(),
        members: h.members.len(),
        income: format_total(h.total_income(), symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));
    table.to_string()
}

/// Format a single household with its roster
pub fn format_household_details(household: &Household, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Household: {}\n", household.name));
    output.push_str(&format!("  ID:           {}\n", household.id));
    output.push_str(&format!(
        "  Total Income: {}\n",
        format_total(household.total_income(), symbol)
    ));
    output.push_str(&format!(
        "  Created:      {}\n",
        household.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push('\n');

    if household.members.is_empty() {
        output.push_str("No members yet. Add one with `fairsplit household add-member`.\n");
        return output;
    }

    let total = household.total_income();
    let rows = household
        .members
        .iter()
        .enumerate()
        .map(|(i, m)| MemberRow {
            position: i + 1,
            id: m.id.to_string(),
            name: m.name.clone(),
            income: m.monthly_income.format_with_symbol(symbol),
            share: income_share(m.monthly_income, total),
        });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()));
    output.push_str(&table.to_string());
    output.push('\n');

    if !household.can_split() {
        output.push_str("\nAt least two members are needed before costs can be split.\n");
    }

    output
}

fn income_share(income: Money, total: Option<Money>) -> String {
    match total {
        Some(total) if total.is_positive() => format!(
            "{:.1}%",
            income.minor_units() as f64 / total.minor_units() as f64 * 100.0
        ),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Member;

    fn household() -> Household {
        let mut household = Household::new("The Flat");
        household.add_member(Member::with_income("Alex", Money::from_minor(25000)));
        household.add_member(Member::with_income("Sam", Money::from_minor(15000)));
        household
    }

    #[test]
    fn test_format_household_list() {
        let output = format_household_list(&[household()], "$");
        assert!(output.contains("The Flat"));
        assert!(output.contains("$400.00"));
        assert!(output.contains("hh-"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_household_list(&[], "$"), "No households found.");
    }

    #[test]
    fn test_format_household_details() {
        let output = format_household_details(&household(), "$");
        assert!(output.contains("Household: The Flat"));
        assert!(output.contains("Alex"));
        assert!(output.contains("62.5%"));
        assert!(output.contains("37.5%"));
        assert!(!output.contains("At least two members"));
    }

    #[test]
    fn test_details_warn_when_too_few_members() {
        let mut household = Household::new("Solo");
        household.add_member(Member::new("Kim"));

        let output = format_household_details(&household, "$");
        assert!(output.contains("At least two members are needed"));
        assert!(output.contains("-"));
    }

    #[test]
    fn test_details_with_income_beyond_range() {
        let mut household = Household::new("Rich Flat");
        household.add_member(Member::with_income("Alex", Money::from_minor(i64::MAX)));
        household.add_member(Member::with_income("Sam", Money::from_minor(i64::MAX)));

        let output = format_household_details(&household, "$");
        assert!(output.contains("Total Income: out of range"));
    }
}
