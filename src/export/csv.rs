//! CSV export of budget summaries
//!
//! One row per (category, member) share, followed by one TOTAL row per
//! member, so the file loads cleanly into a spreadsheet pivot.

use std::io::Write;

use crate::engine::BudgetSummary;
use crate::error::{FairsplitError, FairsplitResult};

/// Label used in the category column for the grand-total rows
pub const TOTAL_LABEL: &str = "TOTAL";

/// Write a summary as CSV
pub fn export_summary_csv<W: Write>(summary: &BudgetSummary, writer: W) -> FairsplitResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(["Month", "Category", "Category Amount", "Member", "Weight", "Share"])
        .map_err(|e| FairsplitError::Export(e.to_string()))?;

    let month = summary.month.to_string();

    for category in &summary.categories {
        for (share, person) in category.per_person.iter().zip(&summary.people) {
            out.write_record(&[
                month.clone(),
                category.name.clone(),
                format!("{:.2}", category.amount.as_major_f64()),
                share.name.clone(),
                person.weight.to_string(),
                format!("{:.2}", share.amount.as_major_f64()),
            ])
            .map_err(|e| FairsplitError::Export(e.to_string()))?;
        }
    }

    for person in &summary.people {
        out.write_record(&[
            month.clone(),
            TOTAL_LABEL.to_string(),
            format!("{:.2}", summary.total_budget.as_major_f64()),
            person.name.clone(),
            person.weight.to_string(),
            format!("{:.2}", person.total.as_major_f64()),
        ])
        .map_err(|e| FairsplitError::Export(e.to_string()))?;
    }

    out.flush().map_err(|e| FairsplitError::Export(e.to_string()))?;
    Ok(())
}
