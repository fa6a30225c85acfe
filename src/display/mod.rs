//! Display formatting for terminal output
//!
//! Provides utilities for formatting monthly figures for terminal display,
//! including tables, bars and settlement labels.

pub mod member;
pub mod months;
pub mod report;
pub mod shared;
pub mod summary;

pub use member::{format_member_details, format_member_table, format_settlement};
pub use months::{format_month_list, format_month_navigation, format_selectable_months};
pub use shared::format_shared_expenses;
pub use summary::format_summary;
