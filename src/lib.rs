//! mess-ledger - monthly expense allocation for a shared kitchen
//!
//! Tracks, per month, each member's meals and bazar (grocery) spending plus
//! the shared bills of the mess, and settles who owes the fund and who is
//! owed by it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (members, shared expenses, months)
//! - `storage`: JSON file storage layer
//! - `services`: Allocation engine and month editing
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers for the `mess` binary
//! - `logging`: Diagnostic tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use mess_ledger::models::{Member, MonthKey, MonthlyRecord};
//! use mess_ledger::services::settle_month;
//!
//! let record = MonthlyRecord::empty(MonthKey::parse("Sep-25")?)
//!     .with_member_added(Member::new("Rahim"));
//! let settlement = settle_month(&record);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MessError, MessResult};
