//! Strongly-typed ID wrappers
//!
//! Using newtype wrappers prevents accidentally mixing up identifiers with
//! other strings at compile time. Stored IDs are opaque strings: new ones are
//! random UUIDs, but anything already on disk is accepted as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Short display form, e.g. `mem-1a2b3c4d`
            pub fn short(&self) -> String {
                let compact = self.compact();
                let end = compact
                    .char_indices()
                    .nth(8)
                    .map_or(compact.len(), |(i, _)| i);
                format!("{}{}", $display_prefix, &compact[..end])
            }

            /// Check whether `s` names this ID, either in full or by the short form
            pub fn matches(&self, s: &str) -> bool {
                let s = s.trim();
                if s.is_empty() {
                    return false;
                }
                if s.eq_ignore_ascii_case(&self.0) {
                    return true;
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s).to_lowercase();
                let compact = self.compact();
                s == compact || (s.chars().count() >= 8 && compact.starts_with(&s))
            }

            // Lowercase, without separators
            fn compact(&self) -> String {
                self.0
                    .chars()
                    .filter(|c| *c != '-')
                    .flat_map(char::to_lowercase)
                    .collect()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid.to_string())
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(IdParseError);
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

define_id!(MemberId, "mem-");

/// Error for parsing an empty ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError;

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID must not be empty")
    }
}

impl std::error::Error for IdParseError {}
