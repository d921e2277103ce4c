//! Audit logging system for fairsplit
//!
//! Every household, member, and budget plan mutation is recorded with its
//! before/after state in an append-only JSONL file.
//!
//! - `AuditEntry`: one operation with optional before/after snapshots
//! - `AuditLogger`: appends entries to and reads them from the log file
//! - `generate_diff`: one-line summary of what changed between snapshots

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
