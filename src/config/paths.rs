//! Path management for fairsplit
//!
//! Resolves where settings, the JSON data files, and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `FAIRSPLIT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fairsplit` or `~/.config/fairsplit`
//! 3. Windows: `%APPDATA%\fairsplit`

use std::path::PathBuf;

use crate::error::FairsplitError;

/// Manages all paths used by fairsplit
#[derive(Debug, Clone)]
pub struct FairsplitPaths {
    /// Base directory for all fairsplit data
    base_dir: PathBuf,
}

impl FairsplitPaths {
    /// Create a new FairsplitPaths instance
    ///
    /// Path resolution:
    /// 1. `FAIRSPLIT_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/fairsplit` or `~/.config/fairsplit`
    /// 3. Windows: `%APPDATA%\fairsplit`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FairsplitError> {
        let base_dir = if let Ok(custom) = std::env::var("FAIRSPLIT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FairsplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fairsplit/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/fairsplit/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to households.json (households and their members)
    pub fn households_file(&self) -> PathBuf {
        self.data_dir().join("households.json")
    }

    /// Get the path to plans.json (monthly budget plans)
    pub fn plans_file(&self) -> PathBuf {
        self.data_dir().join("plans.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/fairsplit/)
    /// - Data directory (~/.config/fairsplit/data/)
    pub fn ensure_directories(&self) -> Result<(), FairsplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FairsplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FairsplitError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if `fairsplit init` has been run (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FairsplitError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_default()
        });
    if config_base.as_os_str().is_empty() {
        return Err(FairsplitError::Config(
            "Could not determine home directory; set FAIRSPLIT_DATA_DIR".into(),
        ));
    }
    Ok(config_base.join("fairsplit"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FairsplitError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FairsplitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fairsplit"))
}
