//! Mess service
//!
//! Applies member and shared expense edits to the record of one selected
//! month. Every mutation reads the current record (creating it on first
//! access), builds the updated record, swaps it into the store and then saves
//! best-effort. Derived figures are always recomputed from the stored record.

use tracing::{debug, info};

use crate::config::settings::NegativeAmountPolicy;
use crate::error::{MessError, MessResult};
use crate::models::{Member, MemberId, MemberUpdate, MonthKey, MonthlyRecord, SharedCategory};
use crate::services::allocation::{
    compute_member_balance, compute_summary, settle_month, MemberBalance, MonthlySettlement,
    SummaryStats,
};
use crate::storage::Storage;

/// Service for editing one month of mess data
pub struct MessService<'a> {
    storage: &'a Storage,
    month: MonthKey,
    negative_amounts: NegativeAmountPolicy,
}

impl<'a> MessService<'a> {
    /// Open the given month, creating its record on first access
    pub fn open(
        storage: &'a Storage,
        month: MonthKey,
        negative_amounts: NegativeAmountPolicy,
    ) -> MessResult<Self> {
        if storage.records.get(month)?.is_none() {
            storage.records.get_or_create(month)?;
            storage.persist();
        }

        Ok(Self {
            storage,
            month,
            negative_amounts,
        })
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    /// The current record of the selected month
    pub fn record(&self) -> MessResult<MonthlyRecord> {
        self.storage.records.get_or_create(self.month)
    }

    // === Member Operations ===

    /// Add a member with no meals and no bazar spend
    pub fn add_member(&self, name: &str) -> MessResult<Member> {
        let name = name.trim();
        let record = self.record()?;

        if record.members.iter().any(|m| m.has_name(name)) {
            return Err(MessError::Duplicate {
                entity_type: "Member",
                identifier: name.to_string(),
            });
        }

        let member = Member::new(name);
        member
            .validate()
            .map_err(|e| MessError::Validation(e.to_string()))?;

        self.commit(record.with_member_added(member.clone()))?;
        info!(month = %self.month, member = %member.name, "added member");

        Ok(member)
    }

    /// Find a member by name or ID
    pub fn find_member(&self, identifier: &str) -> MessResult<Option<Member>> {
        Ok(self.record()?.find_member(identifier).cloned())
    }

    /// Find a member by name or ID, failing if absent
    pub fn require_member(&self, identifier: &str) -> MessResult<Member> {
        self.find_member(identifier)?
            .ok_or_else(|| MessError::member_not_found(identifier))
    }

    /// Apply a partial update to a member
    pub fn update_member(&self, id: &MemberId, update: MemberUpdate) -> MessResult<Member> {
        let record = self.record()?;
        let current = record
            .get_member(id)
            .ok_or_else(|| MessError::member_not_found(id.short()))?;

        let update = MemberUpdate {
            name: update.name,
            meals: update.meals.map(|v| self.negative_amounts.apply(v)),
            bazar_cost: update.bazar_cost.map(|v| self.negative_amounts.apply(v)),
        };

        if let Some(new_name) = &update.name {
            let new_name = new_name.trim();
            if record
                .members
                .iter()
                .any(|m| m.id != *id && m.has_name(new_name))
            {
                return Err(MessError::Duplicate {
                    entity_type: "Member",
                    identifier: new_name.to_string(),
                });
            }
        }

        let updated = update.apply_to(current);
        updated
            .validate()
            .map_err(|e| MessError::Validation(e.to_string()))?;

        self.commit(record.with_member_updated(id, &update))?;
        debug!(month = %self.month, member = %updated.name, "updated member");

        Ok(updated)
    }

    /// Remove a member from the month
    pub fn delete_member(&self, id: &MemberId) -> MessResult<Member> {
        let record = self.record()?;
        let member = record
            .get_member(id)
            .cloned()
            .ok_or_else(|| MessError::member_not_found(id.short()))?;

        self.commit(record.with_member_removed(id))?;
        info!(month = %self.month, member = %member.name, "deleted member");

        Ok(member)
    }

    // === Shared Expense Operations ===

    /// Set the amount of one shared expense category
    pub fn set_shared_expense(&self, category: SharedCategory, amount: f64) -> MessResult<f64> {
        if !amount.is_finite() {
            return Err(MessError::Validation(format!(
                "Amount for {} must be a finite number",
                category
            )));
        }

        let amount = self.negative_amounts.apply(amount);
        let record = self.record()?;
        self.commit(record.with_shared_expense(category, amount))?;
        debug!(month = %self.month, %category, amount, "set shared expense");

        Ok(amount)
    }

    // === Derived Figures ===

    pub fn summary(&self) -> MessResult<SummaryStats> {
        let record = self.record()?;
        Ok(compute_summary(&record.members, &record.shared_expenses))
    }

    pub fn member_balance(&self, id: &MemberId) -> MessResult<MemberBalance> {
        let record = self.record()?;
        let member = record
            .get_member(id)
            .ok_or_else(|| MessError::member_not_found(id.short()))?;
        let summary = compute_summary(&record.members, &record.shared_expenses);
        Ok(compute_member_balance(member, &summary, record.member_count()))
    }

    pub fn settlement(&self) -> MessResult<MonthlySettlement> {
        Ok(settle_month(&self.record()?))
    }

    fn commit(&self, record: MonthlyRecord) -> MessResult<()> {
        self.storage.records.replace(record)?;
        self.storage.persist();
        Ok(())
    }
}
