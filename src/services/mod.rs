//! Service layer for mess-ledger
//!
//! `allocation` holds the pure cost-allocation functions; `mess` applies
//! edits to a month's record on top of the storage layer.

pub mod allocation;
pub mod mess;

pub use allocation::{
    compute_member_balance, compute_summary, settle_month, MemberBalance, MemberSettlement,
    MonthlySettlement, Settlement, SummaryStats,
};
pub use mess::MessService;
