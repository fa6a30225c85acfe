//! Mess member model
//!
//! A member eats meals from the shared kitchen and may buy groceries (bazar)
//! for everyone. Both figures are tracked per month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;

/// A member of the mess for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier, assigned at creation
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Meals eaten this month (half meals allowed)
    #[serde(default)]
    pub meals: f64,

    /// Amount this member spent on bazar for the mess
    #[serde(default)]
    pub bazar_cost: f64,
}

impl Member {
    /// Create a new member with no meals and no bazar spend
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            meals: 0.0,
            bazar_cost: 0.0,
        }
    }

    /// Validate the member
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(MemberValidationError::NameTooLong(self.name.len()));
        }

        if !self.meals.is_finite() || !self.bazar_cost.is_finite() {
            return Err(MemberValidationError::NonFinite);
        }

        Ok(())
    }

    /// Whether `name` names this member, ignoring surrounding space and case
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A partial update to a member; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub meals: Option<f64>,
    pub bazar_cost: Option<f64>,
}

impl MemberUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.meals.is_none() && self.bazar_cost.is_none()
    }

    /// Produce the updated member, leaving `member` untouched
    pub fn apply_to(&self, member: &Member) -> Member {
        let mut updated = member.clone();
        if let Some(name) = &self.name {
            updated.name = name.trim().to_string();
        }
        if let Some(meals) = self.meals {
            updated.meals = meals;
        }
        if let Some(bazar_cost) = self.bazar_cost {
            updated.bazar_cost = bazar_cost;
        }
        updated
    }
}

/// Validation errors for members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    NameTooLong(usize),
    NonFinite,
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Member name too long ({} chars, max 100)", len)
            }
            Self::NonFinite => write!(f, "Meals and bazar cost must be finite numbers"),
        }
    }
}

impl std::error::Error for MemberValidationError {}
