//! fairsplit - household budget planning with fair cost splitting
//!
//! This library provides the core functionality for the fairsplit CLI.
//! Members of a household share a monthly budget of spending categories, and
//! the split engine works out how much each member pays per category and in
//! total, with per-member amounts always summing exactly to the budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (households, members, plans, money)
//! - `engine`: The split engine (weights, rounding allocation, summaries)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Business logic layer
//! - `display`: Terminal tables
//! - `export`: JSON, YAML, and CSV summary output
//! - `cli`: Command handlers for the `fairsplit` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fairsplit::engine::build_summary;
//!
//! let summary = build_summary(&plan, &household)?;
//! for person in &summary.people {
//!     println!("{} pays {}", person.name, person.total);
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::FairsplitError;
