//! Monthly record model
//!
//! A record owns the members and shared expenses of one month. Updates never
//! mutate a record in place: each returns a new record value which the store
//! swaps in for the old one.

use serde::{Deserialize, Serialize};

use super::ids::MemberId;
use super::member::{Member, MemberUpdate};
use super::month::MonthKey;
use super::shared::{SharedCategory, SharedExpenses};

/// Everything tracked for a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub month: MonthKey,

    /// Members in insertion (display) order
    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default)]
    pub shared_expenses: SharedExpenses,
}

impl MonthlyRecord {
    /// A fresh record with no members and all-zero shared expenses
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            members: Vec::new(),
            shared_expenses: SharedExpenses::default(),
        }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.shared_expenses == SharedExpenses::default()
    }

    pub fn get_member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == *id)
    }

    /// Find a member by name (case-insensitive) or by ID
    pub fn find_member(&self, identifier: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.has_name(identifier))
            .or_else(|| self.members.iter().find(|m| m.id.matches(identifier)))
    }

    /// Record with `member` appended at the end
    pub fn with_member_added(&self, member: Member) -> Self {
        let mut next = self.clone();
        next.members.push(member);
        next
    }

    /// Record with the given member patched; unknown IDs leave it unchanged
    pub fn with_member_updated(&self, id: &MemberId, update: &MemberUpdate) -> Self {
        let mut next = self.clone();
        next.members = self
            .members
            .iter()
            .map(|m| if m.id == *id { update.apply_to(m) } else { m.clone() })
            .collect();
        next
    }

    /// Record without the given member
    pub fn with_member_removed(&self, id: &MemberId) -> Self {
        let mut next = self.clone();
        next.members.retain(|m| m.id != *id);
        next
    }

    /// Record with one shared expense category replaced
    pub fn with_shared_expense(&self, category: SharedCategory, amount: f64) -> Self {
        let mut next = self.clone();
        next.shared_expenses = self.shared_expenses.with(category, amount);
        next
    }
}
