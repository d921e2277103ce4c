//! Budget summary display formatting
//!
//! Renders a split summary as two tables: who pays what overall, and how
//! each category is divided.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::engine::{BudgetSummary, WEIGHT_DISPLAY_DECIMALS};

#[derive(Tabled)]
struct PersonRow {
    #[tabled(rename = "Member")]
    name: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Pays")]
    total: String,
}

/// Format a summary for the terminal
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget for {}\n", summary.month));
    output.push_str(&format!("  Split:        {}\n", summary.split));
    output.push_str(&format!(
        "  Total budget: {}\n",
        summary.total_budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total income: {}\n\n",
        summary.total_income.format_with_symbol(symbol)
    ));

    let rows: Vec<PersonRow> = summary
        .people
        .iter()
        .map(|p| PersonRow {
            name: p.name.clone(),
            income: p.income.format_with_symbol(symbol),
            weight: format!("{:.*}", WEIGHT_DISPLAY_DECIMALS as usize, p.weight),
            total: p.total.format_with_symbol(symbol),
        })
        .collect();

    let mut people = Table::new(rows);
    people
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    output.push_str(&people.to_string());
    output.push('\n');

    if summary.categories.is_empty() {
        output.push_str("\nNo categories in this plan.\n");
        return output;
    }

    output.push('\n');
    output.push_str(&format_category_breakdown(summary, symbol));
    output.push('\n');
    output
}

/// Format the per-category breakdown with one column per member
pub fn format_category_breakdown(summary: &BudgetSummary, symbol: &str) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Category".to_string(), "Amount".to_string()];
    header.extend(summary.people.iter().map(|p| p.name.clone()));
    builder.push_record(header);

    for category in &summary.categories {
        let mut record = vec![
            category.name.clone(),
            category.amount.format_with_symbol(symbol),
        ];
        record.extend(
            category
                .per_person
                .iter()
                .map(|share| share.amount.format_with_symbol(symbol)),
        );
        builder.push_record(record);
    }

    let mut total = vec![
        "TOTAL".to_string(),
        summary.total_budget.format_with_symbol(symbol),
    ];
    total.extend(
        summary
            .people
            .iter()
            .map(|p| p.total.format_with_symbol(symbol)),
    );
    builder.push_record(total);

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}
