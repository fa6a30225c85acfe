//! Path management for mess-ledger
//!
//! ## Path Resolution Order
//!
//! 1. `MESS_LEDGER_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/mess-ledger` on Linux, `~/Library/Application Support/mess-ledger`
//!    on macOS, `%APPDATA%\mess-ledger\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MessError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "MESS_LEDGER_DATA_DIR";

/// Manages all paths used by mess-ledger
#[derive(Debug, Clone)]
pub struct MessPaths {
    base_dir: PathBuf,
}

impl MessPaths {
    /// Resolve paths from the environment or the platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MessError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MessPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to mess.json (all monthly records)
    pub fn records_file(&self) -> PathBuf {
        self.data_dir().join("mess.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MessError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MessError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MessError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if mess-ledger has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, MessError> {
    ProjectDirs::from("", "", "mess-ledger")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MessError::Config("Could not determine home directory".into()))
}
