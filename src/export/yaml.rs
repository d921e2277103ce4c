//! YAML export of budget summaries

use std::io::Write;

use crate::engine::BudgetSummary;
use crate::error::{FairsplitError, FairsplitResult};

/// Write a summary as YAML, preceded by a short comment header
pub fn export_summary_yaml<W: Write>(summary: &BudgetSummary, writer: &mut W) -> FairsplitResult<()> {
    writeln!(writer, "# fairsplit budget summary for {}", summary.month)
        .map_err(|e| FairsplitError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in minor currency units").map_err(|e| FairsplitError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, summary).map_err(|e| FairsplitError::Export(e.to_string()))?;

    Ok(())
}
