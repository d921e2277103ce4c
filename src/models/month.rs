//! Calendar month a budget plan applies to
//!
//! Serialized and parsed as `YYYY-MM`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, e.g. `2024-05`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BudgetMonth {
    year: i32,
    month: u32,
}

impl BudgetMonth {
    /// Create a month, returning None for an invalid month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !digits(year) || !digits(month) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }

}

impl fmt::Display for BudgetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BudgetMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<BudgetMonth> for String {
    fn from(month: BudgetMonth) -> Self {
        month.to_string()
    }
}

impl TryFrom<String> for BudgetMonth {
    type Error = MonthParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

/// Error for a malformed `YYYY-MM` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(pub String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}': expected YYYY-MM", self.0)
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let month = BudgetMonth::parse("2024-05").unwrap();
        assert_eq!(month, BudgetMonth::new(2024, 5).unwrap());
        assert_eq!(month.to_string(), "2024-05");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(BudgetMonth::parse("2024-13").is_err());
        assert!(BudgetMonth::parse("2024-00").is_err());
        assert!(BudgetMonth::parse("2024-5").is_err());
        assert!(BudgetMonth::parse("May 2024").is_err());
        assert!(BudgetMonth::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_signs() {
        assert!(BudgetMonth::parse("+024-05").is_err());
        assert!(BudgetMonth::parse("-024-05").is_err());
        assert!(BudgetMonth::parse("2024-+5").is_err());
        assert!(BudgetMonth::parse("20 4-05").is_err());
    }

    #[test]
    fn test_ordering() {
        let a = BudgetMonth::new(2024, 12).unwrap();
        let b = BudgetMonth::new(2025, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serialization() {
        let month = BudgetMonth::new(2024, 5).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2024-05\"");
        let back: BudgetMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
        assert!(serde_json::from_str::<BudgetMonth>("\"2024-99\"").is_err());
    }
}
