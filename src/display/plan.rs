//! Budget plan display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format_total;
use crate::models::{BudgetPlan, Household};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Categories")]
    categories: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Split")]
    split: String,
}

/// Format one plan with its categories
pub fn format_plan_details(plan: &BudgetPlan, household: &Household, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Plan: {} {}\n", household.name, plan.month));
    output.push_str(&format!("  ID:      {}\n", plan.id));
    output.push_str(&format!("  Split:   {}\n", plan.split));
    output.push_str(&format!(
        "  Total:   {}\n",
        format_total(plan.total_budget(), symbol)
    ));
    if let Some(member) = plan.created_by.and_then(|id| household.member(id)) {
        output.push_str(&format!("  Created by: {}\n", member.name));
    }
    output.push_str(&format!(
        "  Modified: {}\n",
        plan.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push('\n');

    if plan.categories.is_empty() {
        output.push_str("No categories.\n");
        return output;
    }

    let rows = plan.categories.iter().map(|c| CategoryRow {
        name: c.name.clone(),
        amount: c.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

/// Format a household's plans, one row per month
pub fn format_plan_list(plans: &[BudgetPlan], symbol: &str) -> String {
    if plans.is_empty() {
        return "No budget plans found.".to_string();
    }

    let rows = plans.iter().map(|p| PlanRow {
        month: p.month.to_string(),
        categories: p.categories.len(),
        total: format_total(p.total_budget(), symbol),
        split: p.split.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
