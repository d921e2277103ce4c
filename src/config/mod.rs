//! Configuration module for fairsplit
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FairsplitPaths;
pub use settings::Settings;
