//! User settings for mess-ledger
//!
//! Manages user preferences: currency symbol, how negative amounts entered by
//! the user are treated, and the default log filter.

use serde::{Deserialize, Serialize};

use super::paths::MessPaths;
use crate::error::MessError;

/// How negative meal counts or amounts entered by the user are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NegativeAmountPolicy {
    /// Negative input is raised to zero (default)
    #[default]
    Clamp,
    /// Negative input is stored as-is, usable as a correction entry
    Allow,
}

impl NegativeAmountPolicy {
    /// Apply the policy to a user-supplied value
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Clamp => value.max(0.0),
            Self::Allow => value,
        }
    }
}

/// User settings for mess-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Treatment of negative numeric input
    #[serde(default)]
    pub negative_amounts: NegativeAmountPolicy,

    /// Log filter used when `MESS_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "৳".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            negative_amounts: NegativeAmountPolicy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MessPaths) -> Result<Self, MessError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| MessError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MessError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MessPaths) -> Result<(), MessError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MessError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MessError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
