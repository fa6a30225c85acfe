//! Monthly cost allocation
//!
//! Pure functions deriving the meal rate, per-head shared cost and each
//! member's balance from a month's raw figures. Nothing here holds state or
//! touches storage; results are recomputed from the record on every read.
//!
//! - Meal rate = total bazar / total meals (0 when no meals were eaten)
//! - Shared per head = total shared / member count (0 with no members)
//! - Balance = bazar spent - (meals x meal rate + shared per head)
//!
//! A non-negative balance means the member is owed money (TAKE); a negative
//! one means the member owes the mess fund (GIVEN).

use serde::Serialize;
use std::fmt;

use crate::models::{Member, MonthKey, MonthlyRecord, SharedExpenses};

/// Aggregate figures for one month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SummaryStats {
    pub total_meals: f64,
    pub total_bazar: f64,
    pub total_shared: f64,
    pub total_expense: f64,
    pub meal_rate: f64,
}

impl SummaryStats {
    /// Percentage of total expense spent on bazar (0 when nothing was spent)
    pub fn bazar_share_pct(&self) -> f64 {
        percentage(self.total_bazar, self.total_expense)
    }

    /// Percentage of total expense taken by shared bills (0 when nothing was spent)
    pub fn shared_share_pct(&self) -> f64 {
        percentage(self.total_shared, self.total_expense)
    }
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole != 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// One member's share of the month's costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemberBalance {
    pub meal_cost: f64,
    pub shared_per_head: f64,
    pub total_cost: f64,
    pub balance: f64,
}

impl MemberBalance {
    pub fn settlement(&self) -> Settlement {
        Settlement::from_balance(self.balance)
    }
}

/// Direction of a member's settlement with the mess fund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Settlement {
    /// Paid more than their share; takes money back from the fund
    Take,
    /// Paid less than their share; gives money to the fund
    Given,
}

impl Settlement {
    pub fn from_balance(balance: f64) -> Self {
        if balance >= 0.0 {
            Self::Take
        } else {
            Self::Given
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Take => write!(f, "TAKE"),
            Self::Given => write!(f, "GIVEN"),
        }
    }
}

/// Compute the month's aggregate statistics
pub fn compute_summary(members: &[Member], shared: &SharedExpenses) -> SummaryStats {
    let total_meals: f64 = members.iter().map(|m| m.meals).sum();
    let total_bazar: f64 = members.iter().map(|m| m.bazar_cost).sum();
    let total_shared = shared.total();
    let total_expense = total_bazar + total_shared;
    let meal_rate = if total_meals > 0.0 {
        total_bazar / total_meals
    } else {
        0.0
    };

    SummaryStats {
        total_meals,
        total_bazar,
        total_shared,
        total_expense,
        meal_rate,
    }
}

/// Compute one member's costs and balance for the month
pub fn compute_member_balance(
    member: &Member,
    summary: &SummaryStats,
    member_count: usize,
) -> MemberBalance {
    let shared_per_head = if member_count > 0 {
        summary.total_shared / member_count as f64
    } else {
        0.0
    };
    let meal_cost = member.meals * summary.meal_rate;
    let total_cost = meal_cost + shared_per_head;

    MemberBalance {
        meal_cost,
        shared_per_head,
        total_cost,
        balance: member.bazar_cost - total_cost,
    }
}

/// A member paired with their computed balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberSettlement {
    pub member: Member,
    #[serde(flatten)]
    pub balance: MemberBalance,
    pub settlement: Settlement,
}

/// Summary plus per-member balances for one month, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySettlement {
    pub month: MonthKey,
    pub summary: SummaryStats,
    pub members: Vec<MemberSettlement>,
}

impl MonthlySettlement {
    /// Sum of all member balances
    pub fn balance_total(&self) -> f64 {
        self.members.iter().map(|m| m.balance.balance).sum()
    }
}

/// Run the full allocation for a record
pub fn settle_month(record: &MonthlyRecord) -> MonthlySettlement {
    let summary = compute_summary(&record.members, &record.shared_expenses);
    let count = record.member_count();

    let members = record
        .members
        .iter()
        .map(|member| {
            let balance = compute_member_balance(member, &summary, count);
            MemberSettlement {
                member: member.clone(),
                settlement: balance.settlement(),
                balance,
            }
        })
        .collect();

    MonthlySettlement {
        month: record.month,
        summary,
        members,
    }
}
