//! Storage layer for fairsplit
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail every mutation goes through.

pub mod file_io;
pub mod households;
pub mod plans;

pub use file_io::{read_json, write_json_atomic};
pub use households::HouseholdRepository;
pub use plans::{PlanKey, PlanRepository};

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::FairsplitPaths;
use crate::error::FairsplitError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FairsplitPaths,
    pub households: HouseholdRepository,
    pub plans: PlanRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FairsplitPaths) -> Result<Self, FairsplitError> {
        paths.ensure_directories()?;

        Ok(Self {
            households: HouseholdRepository::new(paths.households_file()),
            plans: PlanRepository::new(paths.plans_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FairsplitPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FairsplitError> {
        self.households.load()?;
        self.plans.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FairsplitError> {
        self.households.save()?;
        self.plans.save()?;
        Ok(())
    }

    /// Check if `fairsplit init` has been run
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Record a newly created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FairsplitError> {
        let entry = AuditEntry::new(Operation::Create, entity_type, entity_id, entity_name)
            .with_after(serde_json::to_value(entity)?);
        self.audit.log(&entry)
    }

    /// Record a modification in the audit log, with a field-level diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), FairsplitError> {
        let before_value = serde_json::to_value(before)?;
        let after_value = serde_json::to_value(after)?;
        let diff = generate_diff(&before_value, &after_value);

        let entry = AuditEntry::new(Operation::Update, entity_type, entity_id, entity_name)
            .with_diff(diff)
            .with_before(before_value)
            .with_after(after_value);
        self.audit.log(&entry)
    }

    /// Record a removed entity in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FairsplitError> {
        let entry = AuditEntry::new(Operation::Delete, entity_type, entity_id, entity_name)
            .with_before(serde_json::to_value(entity)?);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Household, Member, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FairsplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_writes_data_files() {
        let (temp_dir, storage) = create_test_storage();
        storage.households.upsert(Household::new("The Flat")).unwrap();
        storage.save_all().unwrap();

        assert!(temp_dir.path().join("data").join("households.json").exists());
        assert!(temp_dir.path().join("data").join("plans.json").exists());
    }

    #[test]
    fn test_log_update_records_diff() {
        let (_temp_dir, storage) = create_test_storage();

        let before = Member::with_income("Sam", Money::from_minor(15000));
        let mut after = before.clone();
        after.monthly_income = Money::from_minor(18000);

        storage
            .log_update(
                EntityType::Member,
                before.id.to_string(),
                Some("Sam".into()),
                &before,
                &after,
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(
            entries[0].diff_summary.as_deref(),
            Some("monthly_income: 15000 -> 18000")
        );
    }
}
