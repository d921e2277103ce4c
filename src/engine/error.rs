//! Split engine errors
//!
//! Every variant describes input the caller can fix. Internally generated
//! states such as zero total income are policy fallbacks, never errors.

use thiserror::Error;

/// Reasons a split cannot be computed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    /// Fewer than two members to share costs between
    #[error("at least two household members are required (found {found})")]
    InsufficientMembers { found: usize },

    /// Unknown split mode identifier
    #[error("split mode must be \"income\", \"equal\" or \"topEarnsMore\" (got \"{0}\")")]
    InvalidSplitMode(String),

    /// `percentMore` outside [0, 200] or not a number
    #[error("percentMore must be a number between 0 and 200 (got {0})")]
    InvalidPercentMore(f64),

    /// Category amount is negative or could not be read
    #[error("invalid amount for category '{name}': '{amount}'")]
    InvalidCategoryAmount { name: String, amount: String },

    /// A total does not fit in the money type
    #[error("amounts are too large to add up")]
    AmountOverflow,
}
