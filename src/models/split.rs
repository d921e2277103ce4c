//! Split policy model
//!
//! A split policy decides what fraction of every shared cost each household
//! member owes. On the wire it is a flat record `{ "mode", "percentMore" }`
//! where `percentMore` only carries meaning for `topEarnsMore`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::SplitError;

/// Upper bound for `percentMore` under [`SplitPolicy::TopEarnsMore`]
pub const MAX_PERCENT_MORE: f64 = 200.0;

/// How shared costs are divided between household members
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "SplitRecord", try_from = "SplitRecord")]
pub enum SplitPolicy {
    /// Share proportional to monthly income (falls back to equal on zero income)
    #[default]
    Income,

    /// Everyone pays the same fraction
    Equal,

    /// The highest earner pays `percent_more` percent more than the second
    /// highest earner; anyone else pays nothing
    TopEarnsMore { percent_more: f64 },
}

impl SplitPolicy {
    /// Mode identifiers accepted by [`SplitPolicy::from_parts`]
    pub const MODES: [&'static str; 3] = ["income", "equal", "topEarnsMore"];

    /// Build a policy from a mode identifier and a percentage
    ///
    /// The percentage is validated only for `topEarnsMore`; other modes
    /// ignore it.
    pub fn from_parts(mode: &str, percent_more: f64) -> Result<Self, SplitError> {
        match mode {
            "income" => Ok(Self::Income),
            "equal" => Ok(Self::Equal),
            "topEarnsMore" => Self::top_earns_more(percent_more),
            other => Err(SplitError::InvalidSplitMode(other.to_string())),
        }
    }

    /// Create a validated `topEarnsMore` policy
    pub fn top_earns_more(percent_more: f64) -> Result<Self, SplitError> {
        if !percent_more.is_finite() || !(0.0..=MAX_PERCENT_MORE).contains(&percent_more) {
            return Err(SplitError::InvalidPercentMore(percent_more));
        }
        Ok(Self::TopEarnsMore { percent_more })
    }

    /// The wire identifier of this policy's mode
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Equal => "equal",
            Self::TopEarnsMore { .. } => "topEarnsMore",
        }
    }

    /// The stored percentage (always 0 outside `topEarnsMore`)
    pub fn percent_more(&self) -> f64 {
        match self {
            Self::TopEarnsMore { percent_more } => *percent_more,
            _ => 0.0,
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopEarnsMore { percent_more } => {
                write!(f, "{} (+{}%)", self.mode(), percent_more)
            }
            _ => write!(f, "{}", self.mode()),
        }
    }
}

/// Flat serialized form of a split policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SplitRecord {
    #[serde(default = "default_mode")]
    mode: String,
    #[serde(default)]
    percent_more: f64,
}

fn default_mode() -> String {
    "income".to_string()
}

impl From<SplitPolicy> for SplitRecord {
    fn from(policy: SplitPolicy) -> Self {
        Self {
            mode: policy.mode().to_string(),
            percent_more: policy.percent_more(),
        }
    }
}

impl TryFrom<SplitRecord> for SplitPolicy {
    type Error = SplitError;

    fn try_from(record: SplitRecord) -> Result<Self, Self::Error> {
        SplitPolicy::from_parts(&record.mode, record.percent_more)
    }
}
