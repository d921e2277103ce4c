//! JSON export of budget summaries
//!
//! The JSON document is the flat camelCase summary record, amounts in minor
//! units.

use std::io::Write;

use crate::engine::BudgetSummary;
use crate::error::{FairsplitError, FairsplitResult};

/// Write a summary as pretty-printed JSON
pub fn export_summary_json<W: Write>(summary: &BudgetSummary, writer: &mut W) -> FairsplitResult<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)
        .map_err(|e| FairsplitError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FairsplitError::Export(e.to_string()))?;
    Ok(())
}
