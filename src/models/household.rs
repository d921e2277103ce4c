//! Household model
//!
//! A household owns an ordered roster of members. Roster order is the
//! tie-break key for every deterministic choice the split engine makes, so
//! members are only ever appended or removed, never reordered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{HouseholdId, MemberId};
use super::member::{validate_name, Member, MemberValidationError};
use super::money::Money;

/// A household sharing one budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    /// Unique identifier
    pub id: HouseholdId,

    /// Household name
    pub name: String,

    /// Members in join order
    #[serde(default)]
    pub members: Vec<Member>,

    /// When the household was created
    pub created_at: DateTime<Utc>,

    /// When the household was last modified
    pub updated_at: DateTime<Utc>,
}

impl Household {
    /// Create a new household with no members
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: HouseholdId::new(),
            name: name.into(),
            members: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a member to the roster
    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
        self.updated_at = Utc::now();
    }

    /// Remove a member, returning it if present
    pub fn remove_member(&mut self, id: MemberId) -> Option<Member> {
        let index = self.members.iter().position(|m| m.id == id)?;
        self.updated_at = Utc::now();
        Some(self.members.remove(index))
    }

    /// Get a member by ID
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Get a member by name (case-insensitive)
    pub fn member_by_name(&self, name: &str) -> Option<&Member> {
        let name_lower = name.trim().to_lowercase();
        self.members
            .iter()
            .find(|m| m.name.to_lowercase() == name_lower)
    }

    /// Set a member's monthly income, returning false if the member is unknown
    pub fn set_income(&mut self, id: MemberId, income: Money) -> bool {
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.monthly_income = income;
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Combined monthly income of all members, or None if it overflows
    pub fn total_income(&self) -> Option<Money> {
        Money::checked_sum(self.members.iter().map(|m| m.monthly_income))
    }

    /// Whether enough members exist for a split to be defined
    pub fn can_split(&self) -> bool {
        self.members.len() >= 2
    }

    /// Validate the household and all of its members
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        validate_name(&self.name)?;
        for member in &self.members {
            member.validate()?;
        }
        Ok(())
    }
}

impl fmt::Display for Household {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} members)", self.name, self.members.len())
    }
}
