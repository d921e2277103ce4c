//! Household repository for JSON storage
//!
//! Manages loading and saving households (with their member rosters) to
//! households.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FairsplitError;
use crate::models::{Household, HouseholdId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable household data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct HouseholdData {
    households: Vec<Household>,
}

/// Repository for household persistence
pub struct HouseholdRepository {
    path: PathBuf,
    data: RwLock<HashMap<HouseholdId, Household>>,
}

impl HouseholdRepository {
    /// Create a new household repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load households from disk
    pub fn load(&self) -> Result<(), FairsplitError> {
        let file_data: HouseholdData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FairsplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for household in file_data.households {
            data.insert(household.id, household);
        }

        Ok(())
    }

    /// Save households to disk
    pub fn save(&self) -> Result<(), FairsplitError> {
        let data = self.data.read().map_err(|e| {
            FairsplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut households: Vec<_> = data.values().cloned().collect();
        households.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &HouseholdData { households })
    }

    /// Get a household by ID
    pub fn get(&self, id: HouseholdId) -> Result<Option<Household>, FairsplitError> {
        let data = self.data.read().map_err(|e| {
            FairsplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all households, sorted by name
    pub fn get_all(&self) -> Result<Vec<Household>, FairsplitError> {
        let data = self.data.read().map_err(|e| {
            FairsplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut households: Vec<_> = data.values().cloned().collect();
        households.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(households)
    }

    /// Get a household by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Household>, FairsplitError> {
        let data = self.data.read().map_err(|e| {
            FairsplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name_lower = name.trim().to_lowercase();
        Ok(data
            .values()
            .find(|h| h.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Get a household by its short display ID (e.g. "hh-1a2b3c4d")
    pub fn get_by_display_id(&self, display_id: &str) -> Result<Option<Household>, FairsplitError> {
        let data = self.data.read().map_err(|e| {
            FairsplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .values()
            .find(|h| h.id.to_string() == display_id)
            .cloned())
    }

    /// Insert or update a household
    pub fn upsert(&self, household: Household) -> Result<(), FairsplitError> {
        let mut data = self.data.write().map_err(|e| {
            FairsplitError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(household.id, household);
        Ok(())
    }

    /// Check if a household name is already taken
    pub fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<HouseholdId>,
    ) -> Result<bool, FairsplitError> {
        let data = self.data.read().map_err(|e| {
            FairsplitError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name_lower = name.trim().to_lowercase();
        Ok(data
            .values()
            .any(|h| h.name.to_lowercase() == name_lower && Some(h.id) != exclude_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, HouseholdRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("households.json");
        let repo = HouseholdRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let household = Household::new("The Flat");
        let id = household.id;

        repo.upsert(household).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "The Flat");
    }

    #[test]
    fn test_save_and_reload_keeps_roster_order() {
        let (temp_dir, repo) = create_test_repo();

        let mut household = Household::new("The Flat");
        household.add_member(Member::with_income("Sam", Money::from_minor(15000)));
        household.add_member(Member::with_income("Alex", Money::from_minor(25000)));
        household.add_member(Member::new("Kim"));
        let id = household.id;

        repo.upsert(household).unwrap();
        repo.save().unwrap();

        let repo2 = HouseholdRepository::new(temp_dir.path().join("households.json"));
        repo2.load().unwrap();

        let reloaded = repo2.get(id).unwrap().unwrap();
        let names: Vec<_> = reloaded.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Sam", "Alex", "Kim"]);
    }

    #[test]
    fn test_get_by_name_and_display_id() {
        let (_temp_dir, repo) = create_test_repo();
        let household = Household::new("The Flat");
        let display_id = household.id.to_string();
        repo.upsert(household).unwrap();

        assert!(repo.get_by_name("the flat").unwrap().is_some());
        assert!(repo.get_by_name("Other").unwrap().is_none());
        assert!(repo.get_by_display_id(&display_id).unwrap().is_some());
    }

    #[test]
    fn test_name_exists() {
        let (_temp_dir, repo) = create_test_repo();
        let household = Household::new("The Flat");
        let id = household.id;
        repo.upsert(household).unwrap();

        assert!(repo.name_exists("THE FLAT", None).unwrap());
        assert!(!repo.name_exists("The Flat", Some(id)).unwrap());
        assert!(!repo.name_exists("Elsewhere", None).unwrap());
    }
}
