//! Custom error types for fairsplit
//!
//! This module defines the application error hierarchy using thiserror.
//! Engine-level failures live in [`crate::engine::SplitError`] and are
//! wrapped here so callers deal with a single error type.

use thiserror::Error;

use crate::engine::SplitError;

/// The main error type for fairsplit operations
#[derive(Error, Debug)]
pub enum FairsplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Split computation rejected its input
    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FairsplitError {
    /// Create a "not found" error for households
    pub fn household_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Household",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for members
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Member",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget plans
    pub fn plan_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget plan",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    ///
    /// Split errors count as validation failures: they always describe
    /// input the caller can correct.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Split(_))
    }
}

impl From<std::io::Error> for FairsplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FairsplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FairsplitError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for fairsplit operations
pub type FairsplitResult<T> = Result<T, FairsplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FairsplitError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FairsplitError::household_not_found("Smiths");
        assert_eq!(err.to_string(), "Household not found: Smiths");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_split_error_is_validation() {
        let err: FairsplitError = SplitError::InsufficientMembers { found: 1 }.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Split error: at least two household members are required (found 1)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FairsplitError = io_err.into();
        assert!(matches!(err, FairsplitError::Io(_)));
    }
}
