//! Custom error types for mess-ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The allocation engine itself never fails;
//! these errors come from storage, configuration and user input handling.

use thiserror::Error;

/// The main error type for mess-ledger operations
#[derive(Error, Debug)]
pub enum MessError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

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

impl MessError {
    /// Create a "not found" error for members
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Member",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for MessError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MessError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for mess-ledger operations
pub type MessResult<T> = Result<T, MessError>;
