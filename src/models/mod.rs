//! Core data models for mess-ledger
//!
//! Members, shared expense categories, month keys and the monthly record
//! that ties them together.

pub mod amount;
pub mod ids;
pub mod member;
pub mod month;
pub mod record;
pub mod shared;

pub use amount::{coerce_amount, format_amount, format_meals, parse_amount};
pub use ids::MemberId;
pub use member::{Member, MemberUpdate};
pub use month::{MonthKey, MonthParseError};
pub use record::MonthlyRecord;
pub use shared::{SharedCategory, SharedExpenses};
