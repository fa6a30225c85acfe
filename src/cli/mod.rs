//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod member;
pub mod months;
pub mod shared;

pub use export::{handle_export_command, ExportFormat};
pub use member::{handle_member_command, MemberCommands};
pub use months::handle_months_command;
pub use shared::{handle_shared_command, SharedCommands};

use tracing::warn;

use crate::models::parse_amount;

/// Coerce a numeric argument, treating unparseable text as 0
pub(crate) fn coerce_input(field: &str, input: &str) -> f64 {
    match parse_amount(input) {
        Some(value) => value,
        None => {
            warn!(field, input, "not a number; using 0");
            0.0
        }
    }
}
