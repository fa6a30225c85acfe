//! Shared expense categories
//!
//! Shared costs are the fixed monthly bills split equally per head regardless
//! of meal count. The set of categories is closed: every record carries all
//! five, defaulting to zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed shared expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharedCategory {
    /// Housekeeping / maid ("bua")
    Bua,
    Wifi,
    Electricity,
    Gas,
    Other,
}

impl SharedCategory {
    /// All categories in display order
    pub fn all() -> &'static [SharedCategory] {
        &[
            Self::Bua,
            Self::Wifi,
            Self::Electricity,
            Self::Gas,
            Self::Other,
        ]
    }

    /// The persisted key of this category
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bua => "bua",
            Self::Wifi => "wifi",
            Self::Electricity => "electricity",
            Self::Gas => "gas",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bua => "Bua / Maid Cost",
            Self::Wifi => "Wifi Internet",
            Self::Electricity => "Electricity Bill",
            Self::Gas => "Gas Bill",
            Self::Other => "Other Shared Expenses",
        }
    }
}

impl fmt::Display for SharedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SharedCategory {
    type Err = SharedCategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bua" | "maid" | "housekeeping" => Ok(Self::Bua),
            "wifi" | "internet" => Ok(Self::Wifi),
            "electricity" | "electric" => Ok(Self::Electricity),
            "gas" => Ok(Self::Gas),
            "other" => Ok(Self::Other),
            _ => Err(SharedCategoryParseError(s.to_string())),
        }
    }
}

/// Error returned for an unknown category key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedCategoryParseError(pub String);

impl fmt::Display for SharedCategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown shared expense category '{}' (expected one of: bua, wifi, electricity, gas, other)",
            self.0
        )
    }
}

impl std::error::Error for SharedCategoryParseError {}

/// Amounts for every shared expense category of one month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SharedExpenses {
    #[serde(default)]
    pub bua: f64,
    #[serde(default)]
    pub wifi: f64,
    #[serde(default)]
    pub electricity: f64,
    #[serde(default)]
    pub gas: f64,
    #[serde(default)]
    pub other: f64,
}

impl SharedExpenses {
    pub fn get(&self, category: SharedCategory) -> f64 {
        match category {
            SharedCategory::Bua => self.bua,
            SharedCategory::Wifi => self.wifi,
            SharedCategory::Electricity => self.electricity,
            SharedCategory::Gas => self.gas,
            SharedCategory::Other => self.other,
        }
    }

    /// Return a copy with one category replaced
    pub fn with(&self, category: SharedCategory, amount: f64) -> Self {
        let mut updated = *self;
        match category {
            SharedCategory::Bua => updated.bua = amount,
            SharedCategory::Wifi => updated.wifi = amount,
            SharedCategory::Electricity => updated.electricity = amount,
            SharedCategory::Gas => updated.gas = amount,
            SharedCategory::Other => updated.other = amount,
        }
        updated
    }

    /// Iterate `(category, amount)` pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (SharedCategory, f64)> + '_ {
        SharedCategory::all().iter().map(move |c| (*c, self.get(*c)))
    }

    /// Sum of all five categories
    pub fn total(&self) -> f64 {
        self.entries().map(|(_, amount)| amount).sum()
    }
}
