//! Household service
//!
//! Business logic for households and their member rosters: creation,
//! lookup by name or ID, and member income changes.

use tracing::{debug, info};

use crate::audit::EntityType;
use crate::error::{FairsplitError, FairsplitResult};
use crate::models::{Household, HouseholdId, Member, MemberId, Money};
use crate::storage::Storage;

/// Service for household management
pub struct HouseholdService<'a> {
    storage: &'a Storage,
}

impl<'a> HouseholdService<'a> {
    /// Create a new household service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new, empty household
    pub fn create(&self, name: &str) -> FairsplitResult<Household> {
        let name = name.trim();

        if self.storage.households.name_exists(name, None)? {
            return Err(FairsplitError::Duplicate {
                entity_type: "Household",
                identifier: name.to_string(),
            });
        }

        let household = Household::new(name);
        household
            .validate()
            .map_err(|e| FairsplitError::Validation(e.to_string()))?;

        self.storage.households.upsert(household.clone())?;
        self.storage.households.save()?;

        self.storage.log_create(
            EntityType::Household,
            household.id.to_string(),
            Some(household.name.clone()),
            &household,
        )?;

        info!(household = %household.id, name = %household.name, "Created household");
        Ok(household)
    }

    /// Get a household by ID
    pub fn get(&self, id: HouseholdId) -> FairsplitResult<Option<Household>> {
        self.storage.households.get(id)
    }

    /// Find a household by name or ID string
    pub fn find(&self, identifier: &str) -> FairsplitResult<Option<Household>> {
        // Try by name first
        if let Some(household) = self.storage.households.get_by_name(identifier)? {
            return Ok(Some(household));
        }

        if let Some(household) = self.storage.households.get_by_display_id(identifier.trim())? {
            return Ok(Some(household));
        }

        // Try parsing as a full ID
        if let Ok(id) = identifier.trim().parse::<HouseholdId>() {
            return self.storage.households.get(id);
        }

        Ok(None)
    }

    /// Find a household, failing with NotFound if it does not exist
    pub fn require(&self, identifier: &str) -> FairsplitResult<Household> {
        self.find(identifier)?
            .ok_or_else(|| FairsplitError::household_not_found(identifier))
    }

    /// Get all households
    pub fn list(&self) -> FairsplitResult<Vec<Household>> {
        self.storage.households.get_all()
    }

    /// Append a member to a household's roster
    pub fn add_member(
        &self,
        household_id: HouseholdId,
        name: &str,
        monthly_income: Money,
    ) -> FairsplitResult<Member> {
        let mut household = self.load(household_id)?;
        let name = name.trim();

        if household.member_by_name(name).is_some() {
            return Err(FairsplitError::Duplicate {
                entity_type: "Member",
                identifier: format!("{} in {}", name, household.name),
            });
        }

        let member = Member::with_income(name, monthly_income);
        member
            .validate()
            .map_err(|e| FairsplitError::Validation(e.to_string()))?;

        household.add_member(member.clone());
        ensure_income_fits(&household)?;
        self.storage.households.upsert(household.clone())?;
        self.storage.households.save()?;

        self.storage.log_create(
            EntityType::Member,
            member.id.to_string(),
            Some(member_label(&member, &household)),
            &member,
        )?;

        info!(
            household = %household.id,
            member = %member.id,
            members = household.members.len(),
            "Added member"
        );
        Ok(member)
    }

    /// Change a member's monthly income
    pub fn set_income(
        &self,
        household_id: HouseholdId,
        member_id: MemberId,
        monthly_income: Money,
    ) -> FairsplitResult<Member> {
        if monthly_income.is_negative() {
            return Err(FairsplitError::Validation(format!(
                "Monthly income cannot be negative: {}",
                monthly_income
            )));
        }

        let mut household = self.load(household_id)?;
        let before = household
            .member(member_id)
            .cloned()
            .ok_or_else(|| FairsplitError::member_not_found(member_id.to_string()))?;

        if before.monthly_income == monthly_income {
            debug!(member = %member_id, "Income unchanged");
            return Ok(before);
        }

        household.set_income(member_id, monthly_income);
        ensure_income_fits(&household)?;
        let after = household
            .member(member_id)
            .cloned()
            .ok_or_else(|| FairsplitError::member_not_found(member_id.to_string()))?;

        self.storage.households.upsert(household.clone())?;
        self.storage.households.save()?;

        self.storage.log_update(
            EntityType::Member,
            after.id.to_string(),
            Some(member_label(&after, &household)),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Remove a member from a household's roster
    pub fn remove_member(
        &self,
        household_id: HouseholdId,
        member_id: MemberId,
    ) -> FairsplitResult<Member> {
        let mut household = self.load(household_id)?;
        let member = household
            .remove_member(member_id)
            .ok_or_else(|| FairsplitError::member_not_found(member_id.to_string()))?;

        self.storage.households.upsert(household.clone())?;
        self.storage.households.save()?;

        self.storage.log_delete(
            EntityType::Member,
            member.id.to_string(),
            Some(member_label(&member, &household)),
            &member,
        )?;

        if !household.can_split() {
            info!(
                household = %household.id,
                members = household.members.len(),
                "Household no longer has enough members to split"
            );
        }

        Ok(member)
    }

    /// Find a member of a household by name or ID string
    pub fn find_member(&self, household: &Household, identifier: &str) -> Option<Member> {
        if let Some(member) = household.member_by_name(identifier) {
            return Some(member.clone());
        }

        let identifier = identifier.trim();
        household
            .members
            .iter()
            .find(|m| {
                m.id.to_string() == identifier
                    || identifier
                        .parse::<MemberId>()
                        .map(|id| id == m.id)
                        .unwrap_or(false)
            })
            .cloned()
    }

    /// Find a member, failing with NotFound if the household has no such member
    pub fn require_member(&self, household: &Household, identifier: &str) -> FairsplitResult<Member> {
        self.find_member(household, identifier)
            .ok_or_else(|| FairsplitError::member_not_found(identifier))
    }

    fn load(&self, id: HouseholdId) -> FairsplitResult<Household> {
        self.storage
            .households
            .get(id)?
            .ok_or_else(|| FairsplitError::household_not_found(id.to_string()))
    }
}

fn member_label(member: &Member, household: &Household) -> String {
    format!("{} ({})", member.name, household.name)
}

fn ensure_income_fits(household: &Household) -> FairsplitResult<()> {
    if household.total_income().is_none() {
        return Err(FairsplitError::Validation(format!(
            "Combined income of {} is too large",
            household.name
        )));
    }
    Ok(())
}
